//! Error types
//!
//! Only adding an exhibit and reading snapshots can fail. Unparseable numbers
//! and unknown ids are handled locally (fallback values and no-ops) and never
//! show up here.

use thiserror::Error;

use crate::model::ExhibitId;

/// Reasons an exhibit cannot be added to a gallery
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Exhibit title is required")]
    MissingTitle,
    #[error("Exhibit image is required")]
    MissingImage,
    #[error("Exhibit id {0} is already in the gallery")]
    DuplicateId(ExhibitId),
}

/// Unknown preset name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown placement preset: {0}")]
pub struct ParsePresetError(pub String);

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
