//! # Transform Editor
//!
//! Pure, value-in value-out edits applied to an exhibit (or an unsubmitted
//! draft) while the side panel is open. Nothing here knows about galleries or
//! sessions; the builder decides when an edited value is committed.
//!
//! ## Key Components
//!
//! - [`TransformEditor`] - Per-axis position, rotation and scale edits plus presets
//! - [`Preset`] - Fixed placements (left, right, center, back wall)
//! - [`ExhibitDraft`] - The "add exhibit" form before submission
//! - [`TransformForm`] - What the form shows, with rotation in whole degrees
//!
//! ## Usage
//!
//! ```
//! use virtual_museum::editor::{Axis, Preset, TransformEditor};
//! use virtual_museum::model::Exhibit;
//!
//! let editor = TransformEditor::default();
//! let exhibit = Exhibit::new("a1", "Sunset", "img://sunset");
//! let exhibit = editor.apply_preset(exhibit, Preset::LeftWall);
//! let exhibit = editor.set_rotation_axis_degrees(exhibit, Axis::Y, 90.0);
//! assert_eq!(exhibit.transform.position.x, -6.0);
//! ```

pub mod axis;
pub mod draft;
pub mod form;
pub mod preset;
pub mod transform_editor;

// Re-export main types
pub use axis::Axis;
pub use draft::ExhibitDraft;
pub use form::{parse_field_value, parse_scale_value, TransformForm};
pub use preset::Preset;
pub use transform_editor::{
    display_degrees, to_degrees, to_radians, EditTarget, TextField, TransformEditor,
};
