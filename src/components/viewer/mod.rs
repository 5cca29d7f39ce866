//! File viewer components.
//!
//! Components:
//! - [`FileViewer`] - Card with header controls and inline preview
//! - [`FilePreview`] - Preview body dispatched on the file's type

mod hook;
mod preview;
#[allow(clippy::module_inception)]
mod viewer;

pub use preview::FilePreview;
pub use viewer::FileViewer;
