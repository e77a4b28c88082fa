use crate::error::{GitnoteError, GitnoteResult};
use crate::notebook::store::NoteStore;
use crate::search::SearchEngine;
use crate::toc::IndexGenerator;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// File naming conventions of a notebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Root-relative location of the generated index document.
    pub index_file: String,
    /// Note file extension, without the dot. Matched case-insensitively.
    pub extension: String,
    /// Leading character that marks hidden files and directories.
    pub hidden_prefix: char,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            index_file: "readme.md".to_string(),
            extension: "md".to_string(),
            hidden_prefix: '.',
        }
    }
}

impl Layout {
    /// Returns `true` if `name` starts with the hidden prefix.
    pub fn is_hidden(&self, name: &OsStr) -> bool {
        name.to_string_lossy().starts_with(self.hidden_prefix)
    }

    /// Returns `true` if `name` ends with the note extension, ignoring case.
    pub fn is_note_file(&self, name: &OsStr) -> bool {
        let suffix = format!(".{}", self.extension.to_lowercase());
        name.to_string_lossy().to_lowercase().ends_with(&suffix)
    }
}

/// A directory tree of notes.
///
/// Holds nothing but the root and its [`Layout`]; every operation rescans
/// the filesystem.
#[derive(Debug, Clone)]
pub struct Notebook {
    pub root: PathBuf,
    pub layout: Layout,
}

impl Notebook {
    /// Wraps `root` without touching the filesystem.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            layout: Layout::default(),
        }
    }

    /// Opens an existing notebook directory.
    ///
    /// - Returns [`GitnoteError::NotFound`] if `root` does not exist.
    /// - Returns [`GitnoteError::NotADirectory`] if it exists but is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> GitnoteResult<Self> {
        let root = root.into();

        if !root.exists() {
            return Err(GitnoteError::NotFound(root));
        }

        if !root.is_dir() {
            return Err(GitnoteError::NotADirectory(root));
        }

        Ok(Self::new(root))
    }

    /// Opens `root`, creating it and any missing parents first.
    pub fn ensure_exists(root: impl Into<PathBuf>) -> GitnoteResult<Self> {
        let root = root.into();
        if !root.exists() {
            fs::create_dir_all(&root)?;
        }

        Self::open(root)
    }

    /// Resolves the default notebook location, `<documents>/notes`.
    ///
    /// Falls back to the home directory when the platform has no documents
    /// directory. Returns [`GitnoteError::NotFound`] if neither is known.
    pub fn default_root() -> GitnoteResult<PathBuf> {
        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| GitnoteError::NotFound(PathBuf::from("~/Documents")))?;

        Ok(base.join("notes"))
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Absolute location of the index document.
    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.layout.index_file)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self) -> NoteStore<'_> {
        NoteStore::new(self)
    }

    pub fn index(&self) -> IndexGenerator<'_> {
        IndexGenerator::new(self)
    }

    pub fn search(&self) -> SearchEngine<'_> {
        SearchEngine::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_extension_ignores_case() {
        let layout = Layout::default();
        assert!(layout.is_note_file(OsStr::new("a.md")));
        assert!(layout.is_note_file(OsStr::new("B.MD")));
        assert!(layout.is_note_file(OsStr::new(".md")));
        assert!(!layout.is_note_file(OsStr::new("a.markdown")));
        assert!(!layout.is_note_file(OsStr::new("amd")));
    }

    #[test]
    fn hidden_prefix_is_checked() {
        let layout = Layout::default();
        assert!(layout.is_hidden(OsStr::new(".git")));
        assert!(!layout.is_hidden(OsStr::new("work")));
    }
}
