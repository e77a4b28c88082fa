use crate::domain::{Note, note_file_name, relative_segments};
use crate::error::{GitnoteError, GitnoteResult};
use crate::notebook::layout::{Layout, Notebook};
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// Filesystem operations over the notes of a single [`Notebook`].
///
/// Nothing is cached: each call walks the directory tree again.
pub struct NoteStore<'a> {
    notebook: &'a Notebook,
}

impl<'a> NoteStore<'a> {
    pub fn new(notebook: &'a Notebook) -> Self {
        NoteStore { notebook }
    }

    /// Lazily walks the notebook, yielding every note file in traversal order.
    ///
    /// Hidden directories are pruned along with everything beneath them. A
    /// note file must carry the note extension and its relative path must not
    /// start with the hidden prefix.
    pub fn walk(&self) -> impl Iterator<Item = GitnoteResult<Note>> + use<'a> {
        let notebook: &'a Notebook = self.notebook;
        let root = notebook.root.as_path();
        let layout = &notebook.layout;

        WalkDir::new(root)
            .into_iter()
            .filter_entry(move |entry| {
                entry.depth() == 0
                    || !(entry.file_type().is_dir() && layout.is_hidden(entry.file_name()))
            })
            .filter_map(move |res| match res {
                Ok(entry) => note_from_entry(root, layout, &entry).transpose(),
                Err(source) => Some(Err(GitnoteError::Walk {
                    root: root.to_path_buf(),
                    source,
                })),
            })
    }

    /// Lists every note in the notebook, sorted by path.
    ///
    /// All or nothing: the first traversal or metadata failure aborts the
    /// scan, so callers never see a partial listing.
    pub fn discover(&self) -> GitnoteResult<Vec<Note>> {
        let mut notes = self.walk().collect::<GitnoteResult<Vec<_>>>()?;
        notes.sort_by(|a, b| a.path.cmp(&b.path));

        debug!(root = %self.notebook.root.display(), count = notes.len(), "discovered notes");
        Ok(notes)
    }

    /// Names of the non-hidden top-level directories, sorted.
    pub fn categories(&self) -> GitnoteResult<Vec<String>> {
        self.child_dirs(&self.notebook.root)
    }

    /// Names of the non-hidden directories directly inside `category`, sorted.
    ///
    /// # Errors
    /// Returns [`GitnoteError::InvalidPath`] if `category` leaves the root, or
    /// an I/O error if the directory cannot be read.
    pub fn subcategories(&self, category: impl AsRef<Path>) -> GitnoteResult<Vec<String>> {
        let dir = self.notebook.root.join(checked_category(category.as_ref())?);
        self.child_dirs(&dir)
    }

    /// Creates a category directory and any missing parents.
    ///
    /// Returns the absolute path of the directory. Succeeds if it already exists.
    pub fn create_category(&self, category: impl AsRef<Path>) -> GitnoteResult<PathBuf> {
        let dir = self.notebook.root.join(checked_category(category.as_ref())?);
        fs::create_dir_all(&dir)?;

        info!(path = %dir.display(), "created category");
        Ok(dir)
    }

    /// Creates a note dated today inside `category`.
    ///
    /// See [`NoteStore::create_note_on`].
    pub fn create_note(&self, category: impl AsRef<Path>, title: &str) -> GitnoteResult<String> {
        self.create_note_on(category, title, Local::now().date_naive())
    }

    /// Creates `<category>/<date> <title>.md` holding a single heading.
    ///
    /// The title is expected to be validated already. An existing file with
    /// the same name is overwritten. Returns the note's root-relative path
    /// with `/` separators.
    pub fn create_note_on(
        &self,
        category: impl AsRef<Path>,
        title: &str,
        date: NaiveDate,
    ) -> GitnoteResult<String> {
        let dir = checked_category(category.as_ref())?;
        let relative = dir.join(note_file_name(date, title, &self.notebook.layout.extension));
        let full_path = self.notebook.root.join(&relative);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full_path, format!("# {title}\n"))?;

        let path = relative_segments(&relative).join("/");
        info!(%path, "created note");
        Ok(path)
    }

    fn child_dirs(&self, dir: &Path) -> GitnoteResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() && !self.notebook.layout.is_hidden(&entry.file_name()) {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        names.sort();
        names.dedup();
        Ok(names)
    }
}

/// Turns a walked entry into a note, or `None` if it is not a note file.
fn note_from_entry(root: &Path, layout: &Layout, entry: &DirEntry) -> GitnoteResult<Option<Note>> {
    if entry.depth() == 0 || entry.file_type().is_dir() || !layout.is_note_file(entry.file_name()) {
        return Ok(None);
    }

    let relative = entry
        .path()
        .strip_prefix(root)
        .map_err(|_| GitnoteError::InvalidPath(entry.path().display().to_string()))?;

    if relative.to_string_lossy().starts_with(layout.hidden_prefix) {
        return Ok(None);
    }

    let metadata = entry.metadata().map_err(|source| GitnoteError::Walk {
        root: root.to_path_buf(),
        source,
    })?;
    let modified_at = metadata.modified()?;

    Ok(Some(Note::from_relative_path(relative, modified_at.into())))
}

/// Rejects category paths that would resolve outside the notebook root.
fn checked_category(category: &Path) -> GitnoteResult<PathBuf> {
    let mut checked = PathBuf::new();
    for component in category.components() {
        match component {
            Component::Normal(segment) => checked.push(segment),
            Component::CurDir => {}
            _ => return Err(GitnoteError::InvalidPath(category.display().to_string())),
        }
    }

    Ok(checked)
}
