//! Built-in demo galleries
//!
//! These stand in for a real gallery store: the featured collection shown on
//! the landing page and the gallery served for an arbitrary share link.

use std::f32::consts::PI;

use cgmath::Vector3;

use super::exhibit::Exhibit;
use super::gallery::{Gallery, GalleryTemplate};
use super::transform::{Transform, FRONT_WALL_Z, HANG_HEIGHT};

const BACK_WALL_Z: f32 = 8.0;

const SUNSET_URL: &str =
    "https://images.unsplash.com/photo-1506905925346-04b1e0b0f8e0?w=400&h=600&fit=crop";
const URBAN_URL: &str =
    "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=400&h=600&fit=crop";
const FOREST_URL: &str =
    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=400&h=600&fit=crop";
const OCEAN_URL: &str =
    "https://images.unsplash.com/photo-1505142468610-359e7d316be0?w=400&h=600&fit=crop";
const DESERT_URL: &str =
    "https://images.unsplash.com/photo-1509316975850-ff9c5deb0cd9?w=400&h=600&fit=crop";

fn front_wall(x: f32) -> Transform {
    Transform::new(
        Vector3::new(x, HANG_HEIGHT, FRONT_WALL_Z),
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 1.0, 1.0),
    )
}

fn back_wall(x: f32) -> Transform {
    Transform::new(
        Vector3::new(x, HANG_HEIGHT, BACK_WALL_Z),
        Vector3::new(0.0, PI, 0.0),
        Vector3::new(1.0, 1.0, 1.0),
    )
}

fn exhibit(id: &str, title: &str, description: &str, image: &str, transform: Transform) -> Exhibit {
    Exhibit::new(id, title, image)
        .with_description(description)
        .with_transform(transform)
}

impl Gallery {
    /// The featured three-piece collection
    pub fn demo() -> Self {
        Gallery::new(
            "demo-gallery",
            "My Art Collection",
            "A curated collection of digital artworks and photographs.",
            GalleryTemplate::Classic,
        )
        .with_sharing(true, Some("demo-gallery".to_string()))
        .push_exhibit(exhibit(
            "1",
            "Sunset Dreams",
            "A beautiful sunset captured during golden hour.",
            SUNSET_URL,
            front_wall(-4.0),
        ))
        .push_exhibit(exhibit(
            "2",
            "Urban Geometry",
            "Abstract architectural photography exploring lines and shapes.",
            URBAN_URL,
            front_wall(4.0),
        ))
        .push_exhibit(exhibit(
            "3",
            "Nature's Canvas",
            "A serene forest landscape with morning mist.",
            FOREST_URL,
            front_wall(0.0),
        ))
    }

    /// Gallery served for a share link; uses both the front and back walls
    pub fn shared_demo(share_id: &str) -> Self {
        Gallery::new(
            share_id,
            "Shared Art Gallery",
            "A beautiful collection of digital artworks shared with you.",
            GalleryTemplate::Classic,
        )
        .with_sharing(true, Some(share_id.to_string()))
        .push_exhibit(exhibit(
            "1",
            "Mountain Vista",
            "A breathtaking view of mountain peaks at sunrise.",
            SUNSET_URL,
            front_wall(-4.0),
        ))
        .push_exhibit(exhibit(
            "2",
            "Urban Abstract",
            "Modern city architecture captured in abstract form.",
            URBAN_URL,
            front_wall(4.0),
        ))
        .push_exhibit(exhibit(
            "3",
            "Forest Serenity",
            "Peaceful forest scene with morning light filtering through trees.",
            FOREST_URL,
            front_wall(0.0),
        ))
        .push_exhibit(exhibit(
            "4",
            "Ocean Waves",
            "Powerful ocean waves crashing against rocky shores.",
            OCEAN_URL,
            back_wall(-6.0),
        ))
        .push_exhibit(exhibit(
            "5",
            "Desert Sunset",
            "Golden hour in the desert with dramatic cloud formations.",
            DESERT_URL,
            back_wall(6.0),
        ))
    }
}
