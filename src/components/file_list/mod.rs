//! File list components.
//!
//! Displays a scrollable collection of files in caller order. The list holds
//! no selection state of its own: viewing a file calls back to the owner.
//!
//! Components:
//! - [`FileList`] - Scroll region with one row per file, or an empty state
//! - [`FileItem`] - A single row with view/download actions

mod item;
mod list;

pub use item::FileItem;
pub use list::FileList;

use crate::core::Category;
use crate::models::FileDescriptor;
use crate::utils::format::format_size;

/// Display data for one list row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRow {
    pub file: FileDescriptor,
    pub category: Category,
    pub size_label: String,
}

impl From<&FileDescriptor> for FileRow {
    fn from(file: &FileDescriptor) -> Self {
        Self {
            file: file.clone(),
            category: file.category(),
            size_label: format_size(file.size),
        }
    }
}

/// Rows for a collection, preserving input order.
pub fn list_rows(files: &[FileDescriptor]) -> Vec<FileRow> {
    files.iter().map(FileRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SAMPLE_FILES_JSON;
    use crate::models::parse_descriptors;

    #[test]
    fn test_empty_collection_has_no_rows() {
        assert!(list_rows(&[]).is_empty());
    }

    #[test]
    fn test_rows_follow_input_order() {
        let files = vec![
            FileDescriptor::new("z", "zeta.txt", "text/plain", "/z"),
            FileDescriptor::new("a", "alpha.png", "image/png", "/a"),
            FileDescriptor::new("m", "mid.bin", "application/octet-stream", "/m"),
        ];
        let rows = list_rows(&files);

        assert_eq!(rows.len(), 3);
        let ids: Vec<_> = rows.iter().map(|r| r.file.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_row_labels() {
        let file = FileDescriptor::new("1", "photo.png", "image/png", "/p")
            .with_size(2048)
            .with_last_modified("2023-10-15");
        let row = FileRow::from(&file);
        assert_eq!(row.category, Category::Image);
        assert_eq!(row.size_label, "2.0 KB");

        let unknown = FileRow::from(&FileDescriptor::new("2", "x", "x", "/x"));
        assert_eq!(unknown.size_label, "Unknown size");
    }

    #[test]
    fn test_sample_rows() {
        let files = parse_descriptors(SAMPLE_FILES_JSON).unwrap();
        let rows = list_rows(&files);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].size_label, "1.14 MB");
        assert_eq!(rows[3].size_label, "839.8 KB");
    }
}
