//! # gitnote_core
//!
//! A Rust library for keeping a directory of dated Markdown notes, filed into
//! nested category directories, together with a generated table of contents.
//!
//! ## Features
//!
//! - **Note Discovery**: Walk a notebook, skip hidden entries, and parse titles from
//!   `YYYY-MM-DD <title>.md` file names
//! - **Categories**: List and create category directories at any depth
//! - **Index Generation**: Render a deterministic `readme.md` table of contents and
//!   detect when it has gone stale
//! - **Search**: Case-insensitive lookup over titles, optionally over note bodies
//! - **Robust Error Handling**: A single error type with automatic conversions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gitnote_core::notebook::Notebook;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let notebook = Notebook::ensure_exists("my-notes")?;
//!
//! // File a new note under work/meetings, dated today
//! let path = notebook.store().create_note("work/meetings", "weekly sync")?;
//! println!("Created note: {path}");
//!
//! // Bring the table of contents up to date
//! if notebook.index().refresh()? {
//!     println!("readme.md has been updated");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`domain`]**: The [`Note`](domain::Note) record and file name conventions
//! - **[`notebook`]**: Notebook roots, layout settings and the note store
//! - **[`toc`]**: Category tree, index rendering and regeneration
//! - **[`search`]**: Title and content search
//! - **[`error`]**: Unified error handling throughout the library
//!
//! Nothing is cached between calls. Every operation rescans the notebook, and
//! every scan returns notes sorted by path, which keeps rendering and search
//! results stable from run to run.
//!
//! ## Error Handling
//!
//! All fallible operations return [`GitnoteResult<T>`], wrapping [`GitnoteError`].
//!
//! ```rust,no_run
//! use gitnote_core::{GitnoteResult, notebook::Notebook};
//!
//! fn titles(root: &str) -> GitnoteResult<Vec<String>> {
//!     let notebook = Notebook::open(root)?;
//!     let notes = notebook.store().discover()?;
//!     Ok(notes.into_iter().map(|n| n.title).collect())
//! }
//! ```

pub mod domain;
pub mod error;
pub mod notebook;
pub mod search;
pub mod toc;

/// Re-exports the most commonly used types for convenience.
pub use domain::Note;
pub use error::{GitnoteError, GitnoteResult};
pub use notebook::{Layout, NoteStore, Notebook};
pub use search::{SearchEngine, SearchOptions};
pub use toc::{IndexGenerator, render};
