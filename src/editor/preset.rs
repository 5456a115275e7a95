//! Named placements an exhibit can be snapped to in one step

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use cgmath::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::ParsePresetError;
use crate::model::{Transform, FRONT_WALL_Z, HANG_HEIGHT};

/// Fixed placement presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    LeftWall,
    RightWall,
    Center,
    BackWall,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::LeftWall,
        Preset::RightWall,
        Preset::Center,
        Preset::BackWall,
    ];

    /// Machine name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Preset::LeftWall => "left-wall",
            Preset::RightWall => "right-wall",
            Preset::Center => "center",
            Preset::BackWall => "back-wall",
        }
    }

    /// Button label for the side panel
    pub fn label(self) -> &'static str {
        match self {
            Preset::LeftWall => "Left Wall",
            Preset::RightWall => "Right Wall",
            Preset::Center => "Center",
            Preset::BackWall => "Back Wall",
        }
    }

    /// The placement this preset snaps to
    pub fn transform(self) -> Transform {
        let unit = Vector3::new(1.0, 1.0, 1.0);
        let upright = Vector3::new(0.0, 0.0, 0.0);
        match self {
            Preset::LeftWall => Transform::new(Vector3::new(-6.0, HANG_HEIGHT, FRONT_WALL_Z), upright, unit),
            Preset::RightWall => Transform::new(Vector3::new(6.0, HANG_HEIGHT, FRONT_WALL_Z), upright, unit),
            Preset::Center => Transform::new(Vector3::new(0.0, HANG_HEIGHT, FRONT_WALL_Z), upright, unit),
            Preset::BackWall => Transform::new(
                Vector3::new(0.0, HANG_HEIGHT, -FRONT_WALL_Z),
                Vector3::new(0.0, PI, 0.0),
                unit,
            ),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == s.trim())
            .ok_or_else(|| ParsePresetError(s.to_string()))
    }
}
