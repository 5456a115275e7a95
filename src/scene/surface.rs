//! Placed surfaces: what the renderer draws for each exhibit

use cgmath::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use super::animation::bob_offset;
use crate::model::{ExhibitId, Transform};

/// Whether the builder is editing the layout or just showing it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Edit,
    #[default]
    View,
}

impl ViewMode {
    pub fn is_edit(self) -> bool {
        self == ViewMode::Edit
    }
}

/// Renderer-agnostic dimensions of a framed exhibit, in local space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameLayout {
    /// Frame box (width, height, depth)
    pub frame_size: Vector3<f32>,
    /// Image plane (width, height)
    pub image_size: (f32, f32),
    /// Image plane offset in front of the frame
    pub image_z: f32,
    /// Title label anchor relative to the frame centre
    pub label_offset: Vector3<f32>,
    pub label_font_size: f32,
    pub label_max_width: f32,
    /// Corner marker shown while editing
    pub edit_marker_offset: Vector3<f32>,
    pub edit_marker_radius: f32,
}

impl FrameLayout {
    pub const STANDARD: FrameLayout = FrameLayout {
        frame_size: Vector3::new(2.2, 2.8, 0.1),
        image_size: (2.0, 2.6),
        image_z: 0.06,
        label_offset: Vector3::new(0.0, -1.8, 0.1),
        label_font_size: 0.2,
        label_max_width: 3.0,
        edit_marker_offset: Vector3::new(1.2, 1.2, 0.1),
        edit_marker_radius: 0.1,
    };

    /// Local-space corners of the frame box
    pub fn frame_bounds(&self) -> (Vector3<f32>, Vector3<f32>) {
        let half = self.frame_size / 2.0;
        (-half, half)
    }
}

impl Default for FrameLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// One exhibit as the renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedSurface {
    pub id: ExhibitId,
    pub transform: Transform,
    pub image_ref: String,
    /// Text rendered under the frame
    pub label: String,
    pub is_edit_mode: bool,
    /// Whether a pick on this surface should be reported
    pub is_selectable: bool,
    pub layout: FrameLayout,
    pub bob_amplitude: f32,
}

impl PlacedSurface {
    /// Model matrix for the frame at rest
    pub fn world_matrix(&self) -> Matrix4<f32> {
        self.transform.to_matrix()
    }

    /// Position displaced by the idle bob at `elapsed` seconds
    pub fn animated_position(&self, elapsed: f32) -> Vector3<f32> {
        let position = self.transform.position;
        Vector3::new(
            position.x,
            position.y + bob_offset(elapsed, position.x, self.bob_amplitude),
            position.z,
        )
    }

    /// Model matrix including the idle bob
    pub fn animated_matrix(&self, elapsed: f32) -> Matrix4<f32> {
        Transform {
            position: self.animated_position(elapsed),
            ..self.transform
        }
        .to_matrix()
    }

    pub fn shows_edit_marker(&self) -> bool {
        self.is_edit_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::BOB_AMPLITUDE;

    fn surface(mode: ViewMode) -> PlacedSurface {
        PlacedSurface {
            id: ExhibitId::new("e1"),
            transform: Transform::default_placement(),
            image_ref: "img".to_string(),
            label: "Sunset".to_string(),
            is_edit_mode: mode.is_edit(),
            is_selectable: mode.is_edit(),
            layout: FrameLayout::STANDARD,
            bob_amplitude: BOB_AMPLITUDE,
        }
    }

    #[test]
    fn test_standard_layout() {
        let layout = FrameLayout::default();
        assert_eq!(layout.frame_size, Vector3::new(2.2, 2.8, 0.1));
        assert_eq!(layout.image_size, (2.0, 2.6));
        assert_eq!(layout.label_offset.y, -1.8);

        let (min, max) = layout.frame_bounds();
        assert_eq!(max - min, layout.frame_size);
    }

    #[test]
    fn test_animated_position_leaves_transform_alone() {
        let s = surface(ViewMode::View);
        let moved = s.animated_position(1.0);

        assert_eq!(moved.x, s.transform.position.x);
        assert_eq!(moved.z, s.transform.position.z);
        assert!((moved.y - s.transform.position.y).abs() <= BOB_AMPLITUDE);
        assert_eq!(s.transform, Transform::default_placement());
    }

    #[test]
    fn test_edit_marker() {
        assert!(surface(ViewMode::Edit).shows_edit_marker());
        assert!(!surface(ViewMode::View).shows_edit_marker());
        assert_eq!(ViewMode::default(), ViewMode::View);
    }
}
