//! Utility modules for browser and display operations.
//!
//! Provides:
//! - [`dom`] - Download, fullscreen and document helpers
//! - [`fetch_text`] - Plain-text fetching
//! - [`format`] - File size formatting
//! - [`log`] - Console logging

pub mod dom;
mod fetch;
pub mod format;
pub mod log;

pub use fetch::fetch_text;
