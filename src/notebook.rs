//! Notebook roots and the note store that scans them.

pub mod layout;
pub mod store;

pub use layout::{Layout, Notebook};
pub use store::NoteStore;
