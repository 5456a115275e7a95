//! Pure edit operations on exhibit placement
//!
//! Every operation takes a value and returns a new one; nothing here touches a
//! gallery. Wiring the result back into the model is the caller's job.

use cgmath::{Deg, Rad};
use log::debug;

use super::axis::Axis;
use super::draft::ExhibitDraft;
use super::preset::Preset;
use crate::config::EditorConfig;
use crate::model::{Exhibit, Transform};

/// Free-text fields of an exhibit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Title,
    Description,
}

/// Anything with a placement and text fields the editor can write to
pub trait EditTarget {
    fn transform(&self) -> &Transform;
    fn transform_mut(&mut self) -> &mut Transform;
    fn text_mut(&mut self, field: TextField) -> &mut String;
}

impl EditTarget for Exhibit {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Title => &mut self.title,
            TextField::Description => &mut self.description,
        }
    }
}

impl EditTarget for ExhibitDraft {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Title => &mut self.title,
            TextField::Description => &mut self.description,
        }
    }
}

/// Degrees to radians, at full precision
pub fn to_radians(degrees: f32) -> f32 {
    Rad::from(Deg(degrees)).0
}

/// Radians to degrees, at full precision
pub fn to_degrees(radians: f32) -> f32 {
    Deg::from(Rad(radians)).0
}

/// Whole degrees shown in the editing form for a stored angle
///
/// Converted in `f64` and snapped to a thousandth of a degree first, so an
/// angle typed as a half degree still shows that half rounded up. Halves round
/// towards positive infinity (`-2.5` shows as `-2`).
pub fn display_degrees(radians: f32) -> f32 {
    let degrees = Deg::from(Rad(f64::from(radians))).0;
    let snapped = (degrees * 1e3).round() / 1e3;
    (snapped + 0.5).floor() as f32
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        debug!("Non-finite edit value {} replaced by 0", value);
        0.0
    }
}

/// Stateless transform editor; holds only the scale floor it enforces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformEditor {
    min_scale: f32,
}

impl TransformEditor {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            min_scale: config.effective_min_scale(),
        }
    }

    pub fn min_scale(&self) -> f32 {
        self.min_scale
    }

    /// Replace the title or description
    pub fn set_field<T: EditTarget>(&self, mut target: T, field: TextField, value: impl Into<String>) -> T {
        *target.text_mut(field) = value.into();
        target
    }

    /// Replace one position component; non-finite input becomes 0
    pub fn set_position_axis<T: EditTarget>(&self, mut target: T, axis: Axis, value: f32) -> T {
        let transform = target.transform_mut();
        transform.position = axis.with(transform.position, finite_or_zero(value));
        target
    }

    /// Replace one rotation component given in degrees; stored in radians
    pub fn set_rotation_axis_degrees<T: EditTarget>(&self, mut target: T, axis: Axis, degrees: f32) -> T {
        let transform = target.transform_mut();
        transform.rotation = axis.with(transform.rotation, to_radians(finite_or_zero(degrees)));
        target
    }

    /// Replace one scale component, flooring it at the minimum scale
    pub fn set_scale_axis<T: EditTarget>(&self, mut target: T, axis: Axis, value: f32) -> T {
        let value = if value.is_finite() && value > self.min_scale {
            value
        } else {
            debug!("Scale {} on {} clamped to {}", value, axis, self.min_scale);
            self.min_scale
        };
        let transform = target.transform_mut();
        transform.scale = axis.with(transform.scale, value);
        target
    }

    /// Overwrite position, rotation and scale with a preset placement
    pub fn apply_preset<T: EditTarget>(&self, mut target: T, preset: Preset) -> T {
        *target.transform_mut() = preset.transform();
        target
    }

    /// Discard in-progress edits
    pub fn reset_to<T>(&self, _edited: T, original: T) -> T {
        original
    }
}

impl Default for TransformEditor {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MIN_SCALE;
    use cgmath::Vector3;
    use std::f32::consts::PI;

    fn origin_exhibit() -> Exhibit {
        Exhibit::new("e1", "Title", "img").with_transform(Transform::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
        ))
    }

    #[test]
    fn test_position_axes_are_isolated() {
        let editor = TransformEditor::default();

        let e = editor.set_position_axis(origin_exhibit(), Axis::X, 5.0);
        assert_eq!(e.transform.position, Vector3::new(5.0, 0.0, 0.0));

        let e = editor.set_position_axis(e, Axis::Y, 7.0);
        assert_eq!(e.transform.position, Vector3::new(5.0, 7.0, 0.0));
    }

    #[test]
    fn test_position_nan_becomes_zero() {
        let editor = TransformEditor::default();
        let e = editor.set_position_axis(origin_exhibit(), Axis::Z, 3.0);
        let e = editor.set_position_axis(e, Axis::Z, f32::NAN);
        assert_eq!(e.transform.position.z, 0.0);
    }

    #[test]
    fn test_rotation_stored_in_radians() {
        let editor = TransformEditor::default();
        let e = editor.set_rotation_axis_degrees(origin_exhibit(), Axis::Y, 90.0);

        assert!((e.transform.rotation.y - PI / 2.0).abs() < 1e-6);
        assert_eq!(e.transform.rotation.x, 0.0);
        assert_eq!(display_degrees(e.transform.rotation.y), 90.0);
    }

    #[test]
    fn test_rotation_storage_is_not_rounded() {
        let editor = TransformEditor::default();
        let e = editor.set_rotation_axis_degrees(origin_exhibit(), Axis::X, 12.4);

        assert!((to_degrees(e.transform.rotation.x) - 12.4).abs() < 1e-4);
        assert_eq!(display_degrees(e.transform.rotation.x), 12.0);
    }

    /// Form rounding: nearest whole degree, halves towards positive infinity
    fn form_round(degrees: f32) -> f32 {
        (degrees + 0.5).floor()
    }

    #[test]
    fn test_display_degrees_round_trip() {
        // Whole, half and quarter degrees across the editable range
        for quarter in -720..=720 {
            let d = quarter as f32 / 4.0;
            assert_eq!(display_degrees(to_radians(d)), form_round(d), "degrees {}", d);
        }
    }

    #[test]
    fn test_display_degrees_half_values() {
        for d in [-126.5, -119.5, -58.5, -15.5, 15.5, 58.5, 119.5, 126.5] {
            assert_eq!(display_degrees(to_radians(d)), form_round(d), "degrees {}", d);
        }
        assert_eq!(display_degrees(to_radians(2.5)), 3.0);
        assert_eq!(display_degrees(to_radians(-2.5)), -2.0);
        assert_eq!(display_degrees(to_radians(-180.0)), -180.0);
    }

    #[test]
    fn test_scale_never_below_floor() {
        let editor = TransformEditor::default();
        for value in [0.0, -0.0, -1.0, -1000.0, 0.05, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let e = editor.set_scale_axis(origin_exhibit(), Axis::X, value);
            assert!(e.transform.scale.x >= MIN_SCALE, "value {}", value);
            assert_eq!(e.transform.scale.y, 1.0);
        }

        let e = editor.set_scale_axis(origin_exhibit(), Axis::Z, 2.5);
        assert_eq!(e.transform.scale.z, 2.5);
    }

    #[test]
    fn test_configured_scale_floor() {
        let editor = TransformEditor::new(&EditorConfig::new().with_min_scale(0.5));
        let e = editor.set_scale_axis(origin_exhibit(), Axis::Y, 0.2);
        assert_eq!(e.transform.scale.y, 0.5);

        // A configured floor cannot go below the model's
        let editor = TransformEditor::new(&EditorConfig::new().with_min_scale(0.05));
        let e = editor.set_scale_axis(origin_exhibit(), Axis::Y, 0.05);
        assert_eq!(e.transform.scale.y, MIN_SCALE);
    }

    #[test]
    fn test_back_wall_preset_keeps_text() {
        let editor = TransformEditor::default();
        let original = origin_exhibit().with_description("desc");
        let e = editor.apply_preset(original.clone(), Preset::BackWall);

        assert_eq!(e.transform.position, Vector3::new(0.0, 1.5, 8.0));
        assert_eq!(e.transform.rotation, Vector3::new(0.0, PI, 0.0));
        assert_eq!(e.transform.scale, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(e.title, original.title);
        assert_eq!(e.description, original.description);
        assert_eq!(e.image_ref, original.image_ref);
        assert_eq!(e.id(), original.id());
    }

    #[test]
    fn test_set_field_and_reset() {
        let editor = TransformEditor::default();
        let original = origin_exhibit();

        let edited = editor.set_field(original.clone(), TextField::Title, "New");
        let edited = editor.set_field(edited, TextField::Description, "About");
        assert_eq!(edited.title, "New");
        assert_eq!(edited.description, "About");

        assert_eq!(editor.reset_to(edited, original.clone()), original);
    }
}
