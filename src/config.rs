//! Editor configuration
//!
//! Tunables for the transform editor, the scene projector and the builder
//! session. Defaults match the stock gallery builder; hosts may override them
//! in code or load them from JSON.

use serde::{Deserialize, Serialize};

use crate::error::GalleryError;
use crate::model::{Transform, MIN_SCALE};
use crate::scene::BOB_AMPLITUDE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Floor applied to every scale component the editor writes; values
    /// below [`MIN_SCALE`] are ignored
    pub min_scale: f32,
    /// Placement given to a new exhibit draft
    pub default_placement: Transform,
    /// Vertical amplitude of the idle bob animation, in world units
    pub bob_amplitude: f32,
    /// When set, picking an exhibit while a non-empty add draft is open is
    /// ignored instead of discarding the draft
    pub guard_unsaved_draft: bool,
    /// Whether surfaces can be picked outside edit mode
    pub focus_in_view_mode: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            default_placement: Transform::default_placement(),
            bob_amplitude: BOB_AMPLITUDE,
            guard_unsaved_draft: false,
            focus_in_view_mode: false,
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_scale(mut self, min_scale: f32) -> Self {
        self.min_scale = min_scale;
        self
    }

    pub fn with_default_placement(mut self, placement: Transform) -> Self {
        self.default_placement = placement;
        self
    }

    pub fn with_bob_amplitude(mut self, amplitude: f32) -> Self {
        self.bob_amplitude = amplitude;
        self
    }

    pub fn with_guard_unsaved_draft(mut self, guard: bool) -> Self {
        self.guard_unsaved_draft = guard;
        self
    }

    pub fn with_focus_in_view_mode(mut self, focus: bool) -> Self {
        self.focus_in_view_mode = focus;
        self
    }

    /// Scale floor actually enforced
    ///
    /// The setting can only raise the floor; anything below [`MIN_SCALE`] or
    /// non-finite falls back to it.
    pub fn effective_min_scale(&self) -> f32 {
        if self.min_scale.is_finite() && self.min_scale > MIN_SCALE {
            self.min_scale
        } else {
            MIN_SCALE
        }
    }

    /// Parse a configuration; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, GalleryError> {
        Ok(serde_json::from_str(json)?)
    }
}
