//! Table-of-contents generation for a notebook.
//!
//! [`render`] turns a note collection into the index document text. It is
//! pure and deterministic. [`IndexGenerator`] ties it to the filesystem:
//! it writes the document under the notebook root and checks whether the
//! copy on disk still matches what would be generated.
//!
//! ```text
//! # Notes Index
//!
//! [root note](/2025-01-01 root note.md)
//!
//! ## work
//!
//! [work note](/work/2025-01-02 work note.md)
//!
//! ### meetings
//!
//! [standup](/work/meetings/2025-01-03 standup.md)
//! ```

pub mod tree;

use crate::domain::Note;
use crate::error::{GitnoteError, GitnoteResult};
use crate::notebook::layout::Notebook;
use crate::notebook::store::NoteStore;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};
pub use tree::{CategoryNode, CategoryTree};

/// First line of every index document.
pub const INDEX_HEADING: &str = "# Notes Index";

/// Renders the index document for `notes`.
///
/// Root notes come first, then one section per category in byte-wise name
/// order, nested depth-first. A category at depth `d` gets a heading of
/// level `d + 1`, so top-level categories are `##`. Links within a section
/// follow path order.
pub fn render(notes: &[Note]) -> String {
    let tree = CategoryTree::build(notes);

    let mut out = String::new();
    out.push_str(INDEX_HEADING);
    out.push_str("\n\n");

    write_links(&mut out, &tree.root().notes);
    for child in tree.children(CategoryTree::ROOT) {
        write_section(&mut out, &tree, child);
    }

    out
}

fn write_section(out: &mut String, tree: &CategoryTree<'_>, index: usize) {
    let node = tree.node(index);
    out.push_str(&format!("{} {}\n\n", "#".repeat(node.depth + 1), node.name));

    write_links(out, &node.notes);
    for child in tree.children(index) {
        write_section(out, tree, child);
    }
}

fn write_links(out: &mut String, notes: &[&Note]) {
    for note in notes {
        out.push_str(&format!("[{}](/{})\n", note.title, note.path));
    }

    if !notes.is_empty() {
        out.push('\n');
    }
}

/// Writes and checks the index document of a [`Notebook`].
pub struct IndexGenerator<'a> {
    notebook: &'a Notebook,
}

impl<'a> IndexGenerator<'a> {
    pub fn new(notebook: &'a Notebook) -> Self {
        IndexGenerator { notebook }
    }

    /// Renders the index from a fresh scan.
    ///
    /// The index document itself is left out of its own listing; otherwise
    /// writing it would change what the next render produces.
    pub fn expected(&self) -> GitnoteResult<String> {
        let index_file = &self.notebook.layout.index_file;
        let notes: Vec<Note> = NoteStore::new(self.notebook)
            .discover()?
            .into_iter()
            .filter(|note| &note.path != index_file)
            .collect();

        Ok(render(&notes))
    }

    /// Rewrites the index document in full.
    pub fn generate(&self) -> GitnoteResult<()> {
        let content = self.expected()?;
        let path = self.notebook.index_path();

        write_atomic(&path, content.as_bytes())?;
        info!(path = %path.display(), "wrote notes index");
        Ok(())
    }

    /// Returns `true` only if the index on disk equals a fresh render byte
    /// for byte.
    ///
    /// A missing index is simply out of date. Any other read failure is
    /// returned as an error.
    pub fn is_up_to_date(&self) -> GitnoteResult<bool> {
        let path = self.notebook.index_path();
        let existing = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "notes index missing");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(existing == self.expected()?.into_bytes())
    }

    /// Regenerates the index only when it is stale.
    ///
    /// Returns `true` if the document was written.
    pub fn refresh(&self) -> GitnoteResult<bool> {
        if self.is_up_to_date()? {
            debug!(root = %self.notebook.root.display(), "notes index already up to date");
            return Ok(false);
        }

        self.generate()?;
        Ok(true)
    }
}

/// Writes to a temporary file next to `path` and renames it in place, so a
/// reader never sees a half-written index.
fn write_atomic(path: &Path, data: &[u8]) -> GitnoteResult<()> {
    let dir = path
        .parent()
        .ok_or_else(|| GitnoteError::InvalidPath(path.display().to_string()))?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| GitnoteError::Io(e.error))?;
    Ok(())
}
