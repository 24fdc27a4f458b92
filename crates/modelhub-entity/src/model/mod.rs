//! Diagram model documents.

pub mod document;
pub mod patch;

pub use document::{Model, NewModel};
pub use patch::ModelPatch;
