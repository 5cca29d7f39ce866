//! Custom error types for the application.
//!
//! Provides structured error handling for the two browser capabilities that
//! can fail at runtime:
//!
//! - [`FetchError`] - Network/fetch-related errors for text previews
//! - [`FullscreenError`] - Fullscreen API request errors
//!
//! Neither is fatal: callers log them and fall back to a degraded view.

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
}

/// Fullscreen API errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FullscreenError {
    /// Browser window or document not available
    #[error("Browser document not available")]
    NoDocument,
    /// Target element not found in the document
    #[error("Element #{0} not found")]
    ElementNotFound(String),
    /// `requestFullscreen` is not exposed by this browser
    #[error("Fullscreen API not supported")]
    Unsupported,
    /// The browser rejected the request
    #[error("Error attempting to enable fullscreen: {0}")]
    Rejected(String),
}
