//! Exhibits: one image placed in the gallery room

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::transform::{Transform, MIN_SCALE};

const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// Generate a short lowercase base-36 identifier
pub(crate) fn random_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Opaque exhibit identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExhibitId(String);

impl ExhibitId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(random_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExhibitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExhibitId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ExhibitId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An image hung in the gallery, with its placement
///
/// The id is fixed at construction. Every other field is replaced wholesale by
/// the transform editor; the gallery substitutes the new value by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exhibit {
    id: ExhibitId,
    /// Display title, also used as the label under the frame
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Opaque reference to the image content (URL or blob reference)
    #[serde(alias = "imageUrl")]
    pub image_ref: String,
    /// Placement in the room
    #[serde(flatten)]
    pub transform: Transform,
}

impl Exhibit {
    /// Create an exhibit at the default placement with an empty description
    pub fn new(id: impl Into<ExhibitId>, title: impl Into<String>, image_ref: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            image_ref: image_ref.into(),
            transform: Transform::default_placement(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the placement, flooring the scale at [`MIN_SCALE`]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform.with_scale_floor(MIN_SCALE);
        self
    }

    pub fn id(&self) -> &ExhibitId {
        &self.id
    }

    /// Rebind this value to another identity (used when substituting into a slot)
    pub(crate) fn with_id(mut self, id: ExhibitId) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn test_generated_ids_are_base36() {
        let id = ExhibitId::generate();
        assert_eq!(id.as_str().len(), ID_LEN);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_new_exhibit_uses_default_placement() {
        let exhibit = Exhibit::new("1", "A", "img1");
        assert_eq!(exhibit.id().as_str(), "1");
        assert_eq!(exhibit.description, "");
        assert_eq!(exhibit.transform, Transform::default_placement());
    }

    #[test]
    fn test_with_transform_floors_scale() {
        let exhibit = Exhibit::new("1", "A", "img1").with_transform(Transform::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 2.0, -1.0),
        ));
        assert_eq!(exhibit.transform.scale, Vector3::new(MIN_SCALE, 2.0, MIN_SCALE));
    }

    #[test]
    fn test_image_url_alias() {
        let json = r#"{
            "id": "7",
            "title": "Sunset",
            "imageUrl": "https://example.com/a.jpg",
            "position": {"x": -4.0, "y": 1.5, "z": -8.0},
            "rotation": {"x": 0.0, "y": 0.0, "z": 0.0},
            "scale": {"x": 1.0, "y": 1.0, "z": 1.0}
        }"#;
        let exhibit: Exhibit = serde_json::from_str(json).unwrap();
        assert_eq!(exhibit.image_ref, "https://example.com/a.jpg");
        assert_eq!(exhibit.transform.position, Vector3::new(-4.0, 1.5, -8.0));
        assert_eq!(exhibit.description, "");
    }
}
