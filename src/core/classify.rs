//! File type classification.
//!
//! Maps a declared type string (MIME type or filename) to a [`Category`].
//! Each category is matched against an anchored MIME pattern and a set of
//! filename suffixes after lower-casing. The first matching category wins,
//! in the order of [`RULES`]; anything unmatched is [`Category::Other`].

use std::sync::LazyLock;

use regex::Regex;

/// Broad file category used for icons and preview dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Image,
    Video,
    Audio,
    Archive,
    Pdf,
    Text,
    Directory,
    Other,
}

/// How a category recognizes its MIME form.
enum MimeMatch {
    /// Anchored regular expression over the lower-cased input.
    Pattern(&'static str),
    /// One of a few exact values.
    Exact(&'static [&'static str]),
}

struct Rule {
    category: Category,
    mime: MimeMatch,
    suffixes: &'static [&'static str],
}

// `ogg` is listed under both Video and Audio; Video is checked first.
const RULES: &[Rule] = &[
    Rule {
        category: Category::Image,
        mime: MimeMatch::Pattern(r"^image/(jpeg|jpg|png|gif|webp|svg|bmp|tiff)$"),
        suffixes: &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg", ".bmp", ".tiff"],
    },
    Rule {
        category: Category::Video,
        mime: MimeMatch::Pattern(r"^video/(mp4|webm|ogg|mpeg|avi|mov|wmv|flv)$"),
        suffixes: &[".mp4", ".webm", ".ogg", ".mpeg", ".avi", ".mov", ".wmv", ".flv"],
    },
    Rule {
        category: Category::Audio,
        mime: MimeMatch::Pattern(r"^audio/(mp3|wav|ogg|aac|flac)$"),
        suffixes: &[".mp3", ".wav", ".ogg", ".aac", ".flac"],
    },
    Rule {
        category: Category::Archive,
        mime: MimeMatch::Pattern(
            r"^application/(zip|x-rar-compressed|x-7z-compressed|x-tar|gzip)$",
        ),
        suffixes: &[".zip", ".rar", ".7z", ".tar", ".gz"],
    },
    Rule {
        category: Category::Directory,
        mime: MimeMatch::Exact(&["directory", "folder"]),
        suffixes: &[],
    },
    Rule {
        category: Category::Pdf,
        mime: MimeMatch::Exact(&["application/pdf"]),
        suffixes: &[".pdf"],
    },
    Rule {
        category: Category::Text,
        mime: MimeMatch::Exact(&["text/plain"]),
        suffixes: &[".txt"],
    },
];

/// Compiled patterns, index-aligned with [`RULES`].
static PATTERNS: LazyLock<Vec<Option<Regex>>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|rule| match rule.mime {
            MimeMatch::Pattern(p) => Regex::new(p).ok(),
            MimeMatch::Exact(_) => None,
        })
        .collect()
});

/// Formats the viewer can hand to a native `<video>` element.
static PLAYABLE_VIDEO: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^video/(mp4|webm|ogg)$").ok());

const PLAYABLE_VIDEO_SUFFIXES: &[&str] = &[".mp4", ".webm", ".ogg"];

fn has_suffix(value: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| value.ends_with(s))
}

fn rule_matches(index: usize, rule: &Rule, value: &str) -> bool {
    let mime = match rule.mime {
        MimeMatch::Pattern(_) => PATTERNS[index]
            .as_ref()
            .is_some_and(|re| re.is_match(value)),
        MimeMatch::Exact(values) => values.contains(&value),
    };
    mime || has_suffix(value, rule.suffixes)
}

/// Classify a declared type string.
///
/// Total and deterministic: every input yields exactly one category.
pub fn classify(file_type: &str) -> Category {
    let value = file_type.to_lowercase();
    RULES
        .iter()
        .enumerate()
        .find(|(i, rule)| rule_matches(*i, rule, &value))
        .map(|(_, rule)| rule.category)
        .unwrap_or(Category::Other)
}

/// Whether a video type is one of the formats browsers play natively.
pub fn is_playable_video(file_type: &str) -> bool {
    let value = file_type.to_lowercase();
    PLAYABLE_VIDEO.as_ref().is_some_and(|re| re.is_match(&value))
        || has_suffix(&value, PLAYABLE_VIDEO_SUFFIXES)
}
