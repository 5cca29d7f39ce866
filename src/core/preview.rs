//! Preview dispatch and text loading.
//!
//! [`PreviewKind`] picks the inline element for a file. [`TextLoad`] tracks
//! the one asynchronous operation in the widget: fetching a text body. Each
//! load gets a [`LoadTicket`]; a result is only committed when its ticket is
//! still the current one, so a slow response for a file that has since been
//! replaced is dropped.

use super::classify::{Category, classify, is_playable_video};
use crate::models::{ContentKey, FileDescriptor};

// =============================================================================
// Preview Dispatch
// =============================================================================

/// Inline rendering chosen for a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewKind {
    /// `<img>`, contained, capped height
    Image,
    /// `<video controls>`
    Video,
    /// Large icon plus `<audio controls>`
    Audio,
    /// `<object>` embed with a fallback link
    Pdf,
    /// Fetched body in a `<pre>`
    Text,
    /// Large icon, name and size; no interactive preview
    Fallback,
}

impl PreviewKind {
    /// Resolve the preview for a declared type string.
    ///
    /// Video is only previewed in formats browsers play natively; other
    /// video types and every unsupported category get the fallback view.
    pub fn resolve(file_type: &str) -> Self {
        match classify(file_type) {
            Category::Image => Self::Image,
            Category::Video if is_playable_video(file_type) => Self::Video,
            Category::Audio => Self::Audio,
            Category::Pdf => Self::Pdf,
            Category::Text => Self::Text,
            Category::Video | Category::Archive | Category::Directory | Category::Other => {
                Self::Fallback
            }
        }
    }

    pub fn for_file(file: &FileDescriptor) -> Self {
        Self::resolve(&file.file_type)
    }

    /// Whether this preview needs the body fetched as text.
    pub fn needs_text(self) -> bool {
        self == Self::Text
    }
}

// =============================================================================
// Text Loading
// =============================================================================

/// Text body state for the current file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TextState {
    /// Nothing requested (current file is not text).
    #[default]
    Idle,
    /// Fetch in flight.
    Loading,
    /// Body fetched.
    Loaded(String),
    /// Fetch failed; rendered as a fixed placeholder.
    Failed,
}

/// Handle for one load; only the latest ticket may commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Generation-guarded text load state.
#[derive(Clone, Debug, Default)]
pub struct TextLoad {
    generation: u64,
    key: Option<ContentKey>,
    state: TextState,
}

impl TextLoad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading `key`, invalidating any load in flight.
    pub fn begin(&mut self, key: ContentKey) -> LoadTicket {
        self.generation += 1;
        self.key = Some(key);
        self.state = TextState::Loading;
        LoadTicket(self.generation)
    }

    /// Drop the current load without starting another.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.key = None;
        self.state = TextState::Idle;
    }

    /// Store a finished load. Returns `false` for stale tickets.
    pub fn commit<E>(&mut self, ticket: LoadTicket, result: Result<String, E>) -> bool {
        if ticket.0 != self.generation || self.key.is_none() {
            return false;
        }
        self.state = match result {
            Ok(text) => TextState::Loaded(text),
            Err(_) => TextState::Failed,
        };
        true
    }

    pub fn state(&self) -> &TextState {
        &self.state
    }

    /// Content the current state belongs to.
    pub fn key(&self) -> Option<&ContentKey> {
        self.key.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_descriptors;

    fn text_file(id: &str, url: &str) -> FileDescriptor {
        FileDescriptor::new(id, "notes.txt", "text/plain", url)
    }

    #[test]
    fn test_resolve_dispatch() {
        assert_eq!(PreviewKind::resolve("image/webp"), PreviewKind::Image);
        assert_eq!(PreviewKind::resolve("video/webm"), PreviewKind::Video);
        assert_eq!(PreviewKind::resolve("audio/wav"), PreviewKind::Audio);
        assert_eq!(PreviewKind::resolve("paper.pdf"), PreviewKind::Pdf);
        assert_eq!(PreviewKind::resolve("text/plain"), PreviewKind::Text);
        assert_eq!(PreviewKind::resolve("application/zip"), PreviewKind::Fallback);
        assert_eq!(PreviewKind::resolve("folder"), PreviewKind::Fallback);
        assert_eq!(PreviewKind::resolve(""), PreviewKind::Fallback);
    }

    #[test]
    fn test_unplayable_video_falls_back() {
        assert_eq!(PreviewKind::resolve("video/avi"), PreviewKind::Fallback);
        assert_eq!(PreviewKind::resolve("movie.wmv"), PreviewKind::Fallback);
        assert_eq!(PreviewKind::resolve("movie.ogg"), PreviewKind::Video);
    }

    #[test]
    fn test_sample_files_dispatch() {
        let files = parse_descriptors(crate::config::SAMPLE_FILES_JSON).unwrap();
        let kinds: Vec<_> = files.iter().map(PreviewKind::for_file).collect();
        assert_eq!(
            kinds,
            vec![
                PreviewKind::Image,
                PreviewKind::Video,
                PreviewKind::Audio,
                PreviewKind::Pdf,
                PreviewKind::Text,
                PreviewKind::Fallback,
            ]
        );
        for file in &files {
            let req = file.download_request();
            assert_eq!(req.href, file.url);
            assert_eq!(req.filename, file.name);
        }
    }

    #[test]
    fn test_load_success() {
        let mut load = TextLoad::new();
        let ticket = load.begin(text_file("1", "/a.txt").content_key());
        assert_eq!(load.state(), &TextState::Loading);

        assert!(load.commit::<()>(ticket, Ok("hello\n  world".into())));
        assert_eq!(load.state(), &TextState::Loaded("hello\n  world".into()));
    }

    #[test]
    fn test_load_failure_is_captured() {
        let mut load = TextLoad::new();
        let ticket = load.begin(text_file("1", "/a.txt").content_key());
        assert!(load.commit(ticket, Err("offline")));
        assert_eq!(load.state(), &TextState::Failed);
    }

    #[test]
    fn test_stale_result_after_switching_to_image() {
        let mut load = TextLoad::new();
        let ticket = load.begin(text_file("5", "/a.txt").content_key());

        // user selects an image before the fetch resolves
        load.reset();
        assert!(!load.commit::<()>(ticket, Ok("late".into())));
        assert_eq!(load.state(), &TextState::Idle);
        assert!(load.key().is_none());
    }

    #[test]
    fn test_stale_result_after_switching_text_files() {
        let mut load = TextLoad::new();
        let first = load.begin(text_file("1", "/a.txt").content_key());
        let second = load.begin(text_file("2", "/b.txt").content_key());

        assert!(load.commit::<()>(second, Ok("b".into())));
        assert!(!load.commit::<()>(first, Ok("a".into())));
        assert_eq!(load.state(), &TextState::Loaded("b".into()));
        assert_eq!(load.key().map(|k| k.url.as_str()), Some("/b.txt"));
    }

    #[test]
    fn test_reload_same_file_invalidates_previous_ticket() {
        let mut load = TextLoad::new();
        let key = text_file("1", "/a.txt").content_key();
        let old = load.begin(key.clone());
        let new = load.begin(key);

        assert!(!load.commit::<()>(old, Ok("old".into())));
        assert_eq!(load.state(), &TextState::Loading);
        assert!(load.commit::<()>(new, Ok("new".into())));
    }
}
