//! Placement of an exhibit in world space
//!
//! A [`Transform`] is the (position, rotation, scale) triple stored on every
//! exhibit. Rotation is kept in radians as intrinsic Euler angles applied in
//! X, Y, Z order; scale is a per-axis multiplier that must stay positive.

use cgmath::{Matrix4, Rad, Vector3};
use serde::{Deserialize, Serialize};

/// Height of the hanging line exhibits are placed on by default
pub const HANG_HEIGHT: f32 = 1.5;

/// Z coordinate of the front wall's hanging plane
pub const FRONT_WALL_Z: f32 = -8.0;

/// Smallest scale component an exhibit may carry
pub const MIN_SCALE: f32 = 0.1;

/// Position, rotation (radians) and scale of an exhibit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// World-space position
    pub position: Vector3<f32>,
    /// Euler angles in radians, applied X then Y then Z
    pub rotation: Vector3<f32>,
    /// Per-axis scale multiplier
    pub scale: Vector3<f32>,
}

impl Transform {
    /// Create a transform from its three components
    pub fn new(position: Vector3<f32>, rotation: Vector3<f32>, scale: Vector3<f32>) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Placement given to newly added exhibits: front wall, hang height,
    /// unrotated, unit scale
    pub fn default_placement() -> Self {
        Self::new(
            Vector3::new(0.0, HANG_HEIGHT, FRONT_WALL_Z),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
        )
    }

    /// Returns a copy with every scale component raised to at least `min_scale`.
    ///
    /// Non-finite components are replaced by `min_scale` as well.
    pub fn with_scale_floor(mut self, min_scale: f32) -> Self {
        let floor = |v: f32| if v.is_finite() && v > min_scale { v } else { min_scale };
        self.scale = Vector3::new(floor(self.scale.x), floor(self.scale.y), floor(self.scale.z));
        self
    }

    /// Whether every scale component is at or above `min_scale`
    pub fn has_valid_scale(&self, min_scale: f32) -> bool {
        [self.scale.x, self.scale.y, self.scale.z]
            .iter()
            .all(|v| v.is_finite() && *v >= min_scale)
    }

    /// Rotation part of the transform as a 4x4 matrix (Rx * Ry * Rz)
    pub fn rotation_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_angle_x(Rad(self.rotation.x))
            * Matrix4::from_angle_y(Rad(self.rotation.y))
            * Matrix4::from_angle_z(Rad(self.rotation.z))
    }

    /// Compose the full model matrix
    pub fn to_matrix(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.position);
        let r = self.rotation_matrix();
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        t * r * s // Order matters: T * R * S
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::default_placement()
    }
}
