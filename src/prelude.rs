//! # Virtual Museum Prelude
//!
//! Commonly used types in one import, for hosts that drive a builder session
//! and render its scene.
//!
//! ## Usage
//!
//! ```
//! use virtual_museum::prelude::*;
//!
//! let transition = virtual_museum::default().update(Message::SetTemplate(GalleryTemplate::Modern));
//! assert!(transition
//!     .effects
//!     .iter()
//!     .any(|effect| matches!(effect, Effect::SceneChanged(_))));
//! ```

// Builder workflow
pub use crate::builder::{BuilderSession, BuilderState, EditSession, Effect, Message, Transition};

// Model
pub use crate::model::{Exhibit, ExhibitId, Gallery, GalleryTemplate, MetadataPatch, Transform};

// Editing
pub use crate::editor::{Axis, ExhibitDraft, Preset, TextField, TransformEditor, TransformForm};

// Scene
pub use crate::scene::{pick_surface, PlacedSurface, Ray, SceneProjector, SceneSnapshot, ViewMode};

// Configuration, storage and errors
pub use crate::config::EditorConfig;
pub use crate::error::{GalleryError, ParsePresetError, ValidationError};
pub use crate::store::{GalleryStore, InMemoryGalleryStore};
