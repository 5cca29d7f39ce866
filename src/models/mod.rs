//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileDescriptor`], [`ContentKey`], [`DownloadRequest`] - Files shown by the widget
//! - [`ToastQueue`] - Transient notifications

mod file;
mod toast;

pub use file::{ContentKey, DownloadRequest, FileDescriptor, parse_descriptors};
pub use toast::{ToastKind, ToastQueue};
