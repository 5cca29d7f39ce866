//! Core logic for the file viewer.
//!
//! This module provides:
//! - [`classify`] file type classification into a [`Category`]
//! - [`PreviewKind`] dispatch and [`TextLoad`] stale-response guarding
//! - [`FullscreenToggle`] state machine

mod classify;
pub mod error;
pub mod fullscreen;
pub mod preview;

pub use classify::{Category, classify};
pub use fullscreen::{FullscreenCommand, FullscreenToggle};
pub use preview::{PreviewKind, TextLoad, TextState};
