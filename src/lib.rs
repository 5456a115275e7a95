// src/lib.rs
//! Virtual Museum
//!
//! Gallery model, transform editor and scene projection behind a 3D virtual
//! gallery builder. Rendering, uploads and storage are left to the host.

pub mod builder;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod prelude;
pub mod scene;
pub mod store;

// Re-export main types for convenience
pub use builder::BuilderSession;
pub use config::EditorConfig;
pub use error::{GalleryError, ValidationError};
pub use model::{Exhibit, ExhibitId, Gallery};

/// Creates a builder session over a fresh, untitled gallery
pub fn default() -> BuilderSession {
    BuilderSession::new(Gallery::untitled())
}
