//! Folder documents.

pub mod document;
pub mod patch;

pub use document::{Folder, NewFolder};
pub use patch::FolderPatch;
