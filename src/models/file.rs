//! File descriptor: the one domain entity shown by the list and the viewer.

use serde::Deserialize;

use crate::core::{Category, classify};

// =============================================================================
// File Descriptor
// =============================================================================

/// A file as supplied by a listing.
///
/// Descriptors are read-only once created. Selection replaces the whole value
/// instead of mutating it, so components can hold clones freely.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    /// Unique within a collection; used as the list key and selection identity.
    pub id: String,
    /// Display name, also the suggested download filename.
    pub name: String,
    /// MIME type (`image/png`) or a bare filename/extension (`photo.PNG`).
    #[serde(rename = "type")]
    pub file_type: String,
    /// Where the content is fetched or linked from.
    pub url: String,
    /// Size in bytes, if known.
    #[serde(default)]
    pub size: Option<u64>,
    /// Opaque display string, never parsed.
    #[serde(default)]
    pub last_modified: Option<String>,
}

impl FileDescriptor {
    /// Create a descriptor without size or modification date.
    #[cfg(test)]
    pub fn new(id: &str, name: &str, file_type: &str, url: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            file_type: file_type.to_string(),
            url: url.to_string(),
            size: None,
            last_modified: None,
        }
    }

    /// Builder-style size setter.
    #[cfg(test)]
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Builder-style modification date setter.
    #[cfg(test)]
    pub fn with_last_modified(mut self, modified: &str) -> Self {
        self.last_modified = Some(modified.to_string());
        self
    }

    /// Category of this file's declared type.
    pub fn category(&self) -> Category {
        classify(&self.file_type)
    }

    /// Save-to-disk request for this file.
    pub fn download_request(&self) -> DownloadRequest {
        DownloadRequest {
            href: self.url.clone(),
            filename: self.name.clone(),
        }
    }

    /// Identity used to key asynchronous content loads.
    pub fn content_key(&self) -> ContentKey {
        ContentKey {
            url: self.url.clone(),
            file_type: self.file_type.clone(),
        }
    }
}

/// `(url, type)` pair identifying what a preview is showing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentKey {
    pub url: String,
    pub file_type: String,
}

/// A direct download: the anchor `href` and its `download` attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadRequest {
    pub href: String,
    pub filename: String,
}

// =============================================================================
// Collections
// =============================================================================

/// Parse a JSON array of descriptors.
pub fn parse_descriptors(json: &str) -> Result<Vec<FileDescriptor>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_fields() {
        let json = r#"[
            {"id": "a", "name": "notes.txt", "type": "text/plain", "url": "/notes.txt"},
            {"id": "b", "name": "pic.png", "type": "pic.png", "url": "/pic.png",
             "size": 2048, "lastModified": "yesterday"}
        ]"#;
        let files = parse_descriptors(json).unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].size, None);
        assert_eq!(files[0].last_modified, None);
        assert_eq!(files[1].file_type, "pic.png");
        assert_eq!(files[1].size, Some(2048));
        assert_eq!(files[1].last_modified.as_deref(), Some("yesterday"));
    }

    #[test]
    fn test_download_request_uses_url_and_name() {
        let file = FileDescriptor::new("1", "report.pdf", "application/pdf", "https://x/r.pdf");
        assert_eq!(
            file.download_request(),
            DownloadRequest {
                href: "https://x/r.pdf".to_string(),
                filename: "report.pdf".to_string(),
            }
        );
    }

    #[test]
    fn test_content_key_tracks_url_and_type() {
        let a = FileDescriptor::new("1", "a.txt", "text/plain", "/a.txt");
        let renamed = FileDescriptor::new("2", "b.txt", "text/plain", "/a.txt");
        let moved = FileDescriptor::new("1", "a.txt", "text/plain", "/b.txt");

        assert_eq!(a.content_key(), renamed.content_key());
        assert_ne!(a.content_key(), moved.content_key());
    }

    #[test]
    fn test_category_from_type() {
        let file = FileDescriptor::new("1", "x", "folder", "#");
        assert_eq!(file.category(), Category::Directory);
    }
}
