//! Axis selector for per-component transform edits

use std::fmt;

use cgmath::Vector3;
use serde::{Deserialize, Serialize};

/// One component of a [`Vector3`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Read this component
    pub fn get(self, v: Vector3<f32>) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Copy of `v` with this component replaced, others untouched
    pub fn with(self, mut v: Vector3<f32>, value: f32) -> Vector3<f32> {
        match self {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
            Axis::Z => v.z = value,
        }
        v
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_touches_one_component() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(Axis::X.with(v, 9.0), Vector3::new(9.0, 2.0, 3.0));
        assert_eq!(Axis::Y.with(v, 9.0), Vector3::new(1.0, 9.0, 3.0));
        assert_eq!(Axis::Z.with(v, 9.0), Vector3::new(1.0, 2.0, 9.0));
        for axis in Axis::ALL {
            assert_eq!(axis.get(axis.with(v, -4.0)), -4.0);
        }
    }
}
