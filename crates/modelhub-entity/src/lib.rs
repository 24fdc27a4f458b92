//! # modelhub-entity
//!
//! Documents persisted by ModelHub. Every struct in this crate is either a
//! stored document (deriving `sqlx::FromRow`) or the record used to create
//! or patch one.

pub mod folder;
pub mod model;

pub use folder::{Folder, FolderPatch, NewFolder};
pub use model::{Model, ModelPatch, NewModel};
