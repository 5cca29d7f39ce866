//! UI components built with Leptos.
//!
//! - [`file_icon`] - Category glyph with per-category color
//! - [`file_list`] - Scrollable list of files with row actions
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`toast`] - Transient notifications
//! - [`viewer`] - Preview card with download and fullscreen controls

pub mod file_icon;
pub mod file_list;
pub mod icons;
pub mod toast;
pub mod viewer;

pub use file_icon::FileIcon;
pub use file_list::FileList;
pub use toast::Toaster;
pub use viewer::FileViewer;
