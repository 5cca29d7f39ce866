//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The sample listing is loaded at compile time using `include_str!`.

// =============================================================================
// Assets (loaded at compile time)
// =============================================================================

/// Sample file collection shown on first load.
pub const SAMPLE_FILES_JSON: &str = include_str!("../assets/sample_files.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// DOM id of the mount point in `index.html`.
pub const APP_ROOT_ID: &str = "app";

/// Page title.
pub const APP_NAME: &str = "File Vista";

/// Subtitle under the page title.
pub const APP_TAGLINE: &str = "A beautiful and functional file viewer that supports multiple file \
     formats with download and fullscreen capabilities.";

/// Footer note.
pub const APP_FOOTER: &str =
    "Supports various file formats including images, videos, audio, documents, and more.";

// =============================================================================
// Viewer Configuration
// =============================================================================

/// DOM id of the viewer container (fullscreen target).
pub const VIEWER_CONTAINER_ID: &str = "file-viewer-container";

/// Keyboard shortcut that toggles fullscreen while the viewer has focus.
pub const FULLSCREEN_KEY: &str = "f";

/// Icon sizes in pixels.
pub mod icon_sizes {
    pub const LIST: u32 = 24;
    pub const HEADER: u32 = 20;
    pub const AUDIO: u32 = 64;
    pub const FALLBACK: u32 = 96;
}

/// User-facing placeholder strings.
pub mod text {
    pub const EMPTY_LIST: &str = "No files to display";
    pub const NO_SELECTION: &str = "Select a file to preview";
    pub const LOADING: &str = "Loading...";
    pub const LOAD_ERROR: &str = "Failed to load file content.";
    pub const UNKNOWN_SIZE: &str = "Unknown size";
    pub const PDF_FALLBACK: &str = "Unable to display PDF.";
    pub const PDF_OPEN_LINK: &str = "Open PDF in new tab";
}

// =============================================================================
// Timing
// =============================================================================

/// Duration of the cosmetic fade when switching files (milliseconds).
pub const SELECTION_TRANSITION_MS: u32 = 50;

/// How long a toast stays on screen (milliseconds).
pub const TOAST_DURATION_MS: u32 = 3000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Media query for the two-column layout.
pub const WIDE_LAYOUT_QUERY: &str = "(min-width: 1024px)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
