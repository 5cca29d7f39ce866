//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArchive as FileArchive, LuBookOpen as FilePdf, LuCheck as Success,
        LuCircleAlert as Error, LuDownload as Download, LuEye as View, LuFile as File,
        LuFileText as FileText, LuFilm as FileVideo, LuFolder as Folder, LuImage as FileImage,
        LuMaximize as Maximize, LuMinimize as Minimize, LuMusic as FileAudio,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheckCircleFill as Success, BsDownload as Download, BsExclamationCircleFill as Error,
        BsEye as View, BsFileEarmark as File, BsFileEarmarkImage as FileImage,
        BsFileEarmarkMusic as FileAudio, BsFileEarmarkPdf as FilePdf,
        BsFileEarmarkPlay as FileVideo, BsFileEarmarkText as FileText,
        BsFileEarmarkZip as FileArchive, BsFolderFill as Folder, BsFullscreen as Maximize,
        BsFullscreenExit as Minimize,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FILE, File);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_ARCHIVE, FileArchive);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FOLDER, Folder);
themed_icon!(VIEW, View);
themed_icon!(DOWNLOAD, Download);
themed_icon!(MAXIMIZE, Maximize);
themed_icon!(MINIMIZE, Minimize);
themed_icon!(SUCCESS, Success);
themed_icon!(ERROR, Error);
