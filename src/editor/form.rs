//! Side-panel form values
//!
//! Converts between what the editing form shows and types and what the model
//! stores. Rotation is shown in whole degrees; parsing follows the form's
//! forgiving rules (leading number wins, anything unreadable falls back).

use log::debug;

use super::axis::Axis;
use super::transform_editor::display_degrees;
use crate::model::{Exhibit, Transform, MIN_SCALE};

/// Fallback for unreadable position and rotation input
pub const NUMERIC_FALLBACK: f32 = 0.0;

/// Longest leading prefix of `text` that reads as a finite number
fn leading_number(text: &str) -> Option<f32> {
    let text = text.trim();
    let end = text
        .char_indices()
        .take_while(|&(_, c)| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;

    (1..=end)
        .rev()
        .find_map(|len| text[..len].parse::<f32>().ok())
        .filter(|v| v.is_finite())
}

/// Parse a position or rotation field; unreadable input becomes `0`
///
/// A zero result is indistinguishable from typing `0`.
pub fn parse_field_value(text: &str) -> f32 {
    leading_number(text).unwrap_or_else(|| {
        debug!("Unreadable number {:?}, using {}", text, NUMERIC_FALLBACK);
        NUMERIC_FALLBACK
    })
}

/// Parse a scale field; unreadable or zero input becomes the minimum scale
pub fn parse_scale_value(text: &str) -> f32 {
    match leading_number(text) {
        Some(v) if v != 0.0 => v,
        _ => {
            debug!("Unreadable scale {:?}, using {}", text, MIN_SCALE);
            MIN_SCALE
        }
    }
}

/// Values displayed by the transform section of the editing form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformForm {
    pub position: [f32; 3],
    /// Whole degrees; display only, never written back as-is
    pub rotation_degrees: [f32; 3],
    pub scale: [f32; 3],
}

impl TransformForm {
    pub fn from_transform(transform: &Transform) -> Self {
        let per_axis = |f: &dyn Fn(Axis) -> f32| [f(Axis::X), f(Axis::Y), f(Axis::Z)];
        Self {
            position: per_axis(&|a| a.get(transform.position)),
            rotation_degrees: per_axis(&|a| display_degrees(a.get(transform.rotation))),
            scale: per_axis(&|a| a.get(transform.scale)),
        }
    }

    pub fn from_exhibit(exhibit: &Exhibit) -> Self {
        Self::from_transform(&exhibit.transform)
    }

    pub fn position(&self, axis: Axis) -> f32 {
        self.position[axis as usize]
    }

    pub fn rotation_degrees(&self, axis: Axis) -> f32 {
        self.rotation_degrees[axis as usize]
    }

    pub fn scale(&self, axis: Axis) -> f32 {
        self.scale[axis as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;
    use std::f32::consts::PI;

    #[test]
    fn test_parse_field_value() {
        assert_eq!(parse_field_value("2.5"), 2.5);
        assert_eq!(parse_field_value("  -3 "), -3.0);
        assert_eq!(parse_field_value("12abc"), 12.0);
        assert_eq!(parse_field_value("1e2"), 100.0);
        assert_eq!(parse_field_value(""), 0.0);
        assert_eq!(parse_field_value("-"), 0.0);
        assert_eq!(parse_field_value("abc"), 0.0);
        assert_eq!(parse_field_value("NaN"), 0.0);
        assert_eq!(parse_field_value("1e99"), 0.0);
    }

    #[test]
    fn test_parse_scale_value() {
        assert_eq!(parse_scale_value("2"), 2.0);
        assert_eq!(parse_scale_value("0"), MIN_SCALE);
        assert_eq!(parse_scale_value("x"), MIN_SCALE);
        // Negative input is passed through; the editor floors it
        assert_eq!(parse_scale_value("-1"), -1.0);
    }

    #[test]
    fn test_form_shows_whole_degrees() {
        let transform = Transform::new(
            Vector3::new(1.0, 1.5, -8.0),
            Vector3::new(0.2, PI, -PI / 4.0),
            Vector3::new(1.0, 2.0, 1.0),
        );
        let form = TransformForm::from_transform(&transform);

        assert_eq!(form.position, [1.0, 1.5, -8.0]);
        assert_eq!(form.rotation_degrees, [11.0, 180.0, -45.0]);
        assert_eq!(form.scale(Axis::Y), 2.0);
        assert_eq!(form.rotation_degrees(Axis::Z), -45.0);
    }
}
