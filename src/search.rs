//! Free-text lookup over note titles and, optionally, note bodies.
//!
//! Matching is a case-insensitive substring test. There is no ranking:
//! results keep the path order of the underlying scan.
//!
//! ```rust,no_run
//! use gitnote_core::notebook::Notebook;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let notebook = Notebook::open("/path/to/notes")?;
//!
//! // Titles only
//! let hits = notebook.search().search("meeting", false)?;
//!
//! // Titles, then file contents
//! let hits = notebook.search().search("meeting", true)?;
//! # Ok(())
//! # }
//! ```

use crate::domain::Note;
use crate::error::GitnoteResult;
use crate::notebook::layout::Notebook;
use crate::notebook::store::NoteStore;
use std::fs;
use tracing::{debug, warn};

/// Configuration options for a search.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Also scan file contents when the title does not match.
    ///
    /// Defaults to `false`.
    pub deep: bool,
}

/// Searches the notes of a single [`Notebook`].
pub struct SearchEngine<'a> {
    notebook: &'a Notebook,
}

impl<'a> SearchEngine<'a> {
    pub fn new(notebook: &'a Notebook) -> Self {
        SearchEngine { notebook }
    }

    /// Returns the notes matching `query`, in path order.
    ///
    /// An empty query matches every note.
    ///
    /// # Errors
    /// Fails only if the notebook scan itself fails.
    pub fn search(&self, query: &str, deep: bool) -> GitnoteResult<Vec<Note>> {
        self.search_with_options(query, &SearchOptions { deep })
    }

    pub fn search_with_options(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> GitnoteResult<Vec<Note>> {
        let notes = NoteStore::new(self.notebook).discover()?;
        let needle = query.to_lowercase();

        let matches: Vec<Note> = notes
            .into_iter()
            .filter(|note| {
                title_matches(note, &needle) || (options.deep && self.content_matches(note, &needle))
            })
            .collect();

        debug!(query, deep = options.deep, count = matches.len(), "search finished");
        Ok(matches)
    }

    /// Reads the note body and tests it against `needle`.
    ///
    /// An unreadable file counts as a miss; the search carries on.
    fn content_matches(&self, note: &Note, needle: &str) -> bool {
        let path = self.notebook.root.join(&note.path);
        match fs::read(&path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes)
                .to_lowercase()
                .contains(needle),
            Err(e) => {
                warn!(path = %note.path, error = %e, "skipping unreadable note");
                false
            }
        }
    }
}

/// Tests the title of `note` against an already lowercased `needle`.
fn title_matches(note: &Note, needle: &str) -> bool {
    note.title.to_lowercase().contains(needle)
}
