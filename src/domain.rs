use chrono::{DateTime, Local, NaiveDate};
use std::path::{Component, Path};
use thiserror::Error;

/// Length of the `YYYY-MM-DD` prefix in a note file name.
const DATE_PREFIX_LEN: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("note title cannot be empty")]
    EmptyTitle,
    #[error("category name cannot be empty")]
    EmptyCategory,
    #[error("category name contains invalid character {0:?}")]
    InvalidCategoryChar(char),
}

/// A Markdown note discovered under a notebook root.
///
/// Notes are plain values: the filesystem is the only source of truth and a
/// fresh scan produces fresh records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Display title, taken from the file name.
    pub title: String,
    /// Root-relative path with `/` separators. Unique within one scan.
    pub path: String,
    /// Directory names between the root and the file. Empty for root notes.
    pub category: Vec<String>,
    /// Last modification time reported by the filesystem.
    pub modified_at: DateTime<Local>,
}

impl Note {
    /// Builds a note from its root-relative path.
    ///
    /// The last path component is the file name; every component before it
    /// becomes one category segment. Non-UTF-8 names are converted lossily.
    pub fn from_relative_path(relative: &Path, modified_at: DateTime<Local>) -> Note {
        let mut category = relative_segments(relative);
        let file_name = category.pop().unwrap_or_default();
        let path = if category.is_empty() {
            file_name.clone()
        } else {
            format!("{}/{}", category.join("/"), file_name)
        };

        let stem = Path::new(&file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or(file_name);

        Note {
            title: title_from_stem(&stem),
            path,
            category,
            modified_at,
        }
    }

    /// Returns `true` when the note sits directly in the notebook root.
    pub fn is_root(&self) -> bool {
        self.category.is_empty()
    }
}

/// Derives a note title from a file name without its extension.
///
/// Names longer than the date prefix whose 5th and 8th characters are `-`
/// are read as `YYYY-MM-DD <title>`: the first eleven characters are dropped
/// and the rest is trimmed. The prefix is matched by position only, so
/// `abcd-ef-hi jk` also counts. Anything else is returned unchanged.
pub fn title_from_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();

    if chars.len() > DATE_PREFIX_LEN && chars[4] == '-' && chars[7] == '-' {
        chars[DATE_PREFIX_LEN + 1..]
            .iter()
            .collect::<String>()
            .trim()
            .to_owned()
    } else {
        stem.to_owned()
    }
}

/// Formats the file name for a note created on `date`.
pub fn note_file_name(date: NaiveDate, title: &str, extension: &str) -> String {
    format!("{} {}.{}", date.format("%Y-%m-%d"), title, extension)
}

/// Splits a relative path into its normal components.
///
/// `.` components are dropped; `..`, roots and prefixes are not expected here
/// and are dropped as well.
pub fn relative_segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

/// Validates a proposed note title.
///
/// Trims whitespace and rejects an empty result.
pub fn validate_title(title: &str) -> Result<String, NameError> {
    let trimmed = title.trim();

    if trimmed.is_empty() {
        return Err(NameError::EmptyTitle);
    }

    Ok(trimmed.to_owned())
}

/// Validates a proposed category directory name.
///
/// Trims whitespace, ensures it is not empty, and rejects characters that
/// are not portable in directory names (`/`, `\`, `:`, `*`, `?`, `"`, `<`, `>`, `|`).
pub fn validate_category_name(name: &str) -> Result<String, NameError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(NameError::EmptyCategory);
    }

    if let Some(bad) = trimmed
        .chars()
        .find(|c| ['/', '\\', ':', '*', '?', '"', '<', '>', '|'].contains(c))
    {
        return Err(NameError::InvalidCategoryChar(bad));
    }

    Ok(trimmed.to_owned())
}
