//! Gallery snapshots and the mutations that produce new ones
//!
//! A [`Gallery`] is a value: every mutation takes `&self` and returns a new
//! snapshot, so a caller holding an older snapshot never observes later edits.
//! All exhibit edits funnel through [`Gallery::replace_exhibit`].

use std::fmt;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::exhibit::{random_id, Exhibit, ExhibitId};
use super::transform::MIN_SCALE;
use crate::error::{GalleryError, ValidationError};

/// Room geometry and material set the renderer builds around the exhibits
///
/// Stored and forwarded only; exhibit placement never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryTemplate {
    #[default]
    Classic,
    Modern,
}

impl GalleryTemplate {
    pub const ALL: [GalleryTemplate; 2] = [GalleryTemplate::Classic, GalleryTemplate::Modern];

    pub fn name(self) -> &'static str {
        match self {
            GalleryTemplate::Classic => "classic",
            GalleryTemplate::Modern => "modern",
        }
    }
}

impl fmt::Display for GalleryTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Top-level fields a metadata edit may touch; `None` leaves a field as is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub template: Option<GalleryTemplate>,
}

impl MetadataPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn template(mut self, template: GalleryTemplate) -> Self {
        self.template = Some(template);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.template.is_none()
    }
}

/// Check the fields an exhibit needs before it can join a gallery
pub fn validate_exhibit(exhibit: &Exhibit) -> Result<(), ValidationError> {
    if exhibit.title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    if exhibit.image_ref.is_empty() {
        return Err(ValidationError::MissingImage);
    }
    Ok(())
}

/// A named, ordered collection of exhibits plus display metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gallery {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    template: GalleryTemplate,
    #[serde(default)]
    exhibits: Vec<Exhibit>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    share_id: Option<String>,
}

impl Gallery {
    /// Create an empty, private gallery
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        template: GalleryTemplate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            template,
            exhibits: Vec::new(),
            created_at: now,
            updated_at: now,
            is_public: false,
            share_id: None,
        }
    }

    /// Fresh gallery as created from the builder's "create" action
    pub fn untitled() -> Self {
        Self::new(
            random_id(),
            "Untitled Gallery",
            "A new virtual gallery space",
            GalleryTemplate::Classic,
        )
    }

    /// Set the sharing metadata
    pub fn with_sharing(mut self, is_public: bool, share_id: Option<String>) -> Self {
        self.is_public = is_public;
        self.share_id = share_id;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn template(&self) -> GalleryTemplate {
        self.template
    }

    /// Exhibits in insertion order
    pub fn exhibits(&self) -> &[Exhibit] {
        &self.exhibits
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn share_id(&self) -> Option<&str> {
        self.share_id.as_deref()
    }

    pub fn len(&self) -> usize {
        self.exhibits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exhibits.is_empty()
    }

    /// Look up an exhibit by id
    pub fn exhibit(&self, id: &ExhibitId) -> Option<&Exhibit> {
        self.exhibits.iter().find(|e| e.id() == id)
    }

    /// Sequence position of the exhibit with `id`
    pub fn position_of(&self, id: &ExhibitId) -> Option<usize> {
        self.exhibits.iter().position(|e| e.id() == id)
    }

    pub fn contains(&self, id: &ExhibitId) -> bool {
        self.position_of(id).is_some()
    }

    /// Substitute `exhibit` at the slot holding `id`
    ///
    /// The slot keeps its identity: the stored value is rebound to `id` even if
    /// `exhibit` carries another one. Scales are floored at [`MIN_SCALE`]. An
    /// unknown id returns the gallery unchanged.
    pub fn replace_exhibit(&self, id: &ExhibitId, exhibit: Exhibit) -> Gallery {
        let Some(index) = self.position_of(id) else {
            debug!("replace_exhibit: no exhibit {} in gallery {}", id, self.id);
            return self.clone();
        };

        let transform = exhibit.transform;
        let exhibit = exhibit.with_id(id.clone()).with_transform(transform);
        if self.exhibits[index] == exhibit {
            return self.clone();
        }

        let mut next = self.clone();
        next.exhibits[index] = exhibit;
        next.touch();
        next
    }

    /// Append a new exhibit at the end of the sequence; scales are floored at [`MIN_SCALE`]
    pub fn append_exhibit(&self, exhibit: Exhibit) -> Result<Gallery, ValidationError> {
        validate_exhibit(&exhibit)?;
        if self.contains(exhibit.id()) {
            return Err(ValidationError::DuplicateId(exhibit.id().clone()));
        }

        let transform = exhibit.transform;
        let exhibit = exhibit.with_transform(transform);

        info!("Adding exhibit '{}' ({}) to gallery {}", exhibit.title, exhibit.id(), self.id);
        let mut next = self.clone();
        next.exhibits.push(exhibit);
        next.touch();
        Ok(next)
    }

    /// Remove the exhibit with `id`, keeping the order of the rest
    pub fn remove_exhibit(&self, id: &ExhibitId) -> Gallery {
        let Some(index) = self.position_of(id) else {
            debug!("remove_exhibit: no exhibit {} in gallery {}", id, self.id);
            return self.clone();
        };

        info!("Removing exhibit {} from gallery {}", id, self.id);
        let mut next = self.clone();
        next.exhibits.remove(index);
        next.touch();
        next
    }

    /// Merge top-level metadata fields
    pub fn set_metadata(&self, patch: MetadataPatch) -> Gallery {
        let mut next = self.clone();
        if let Some(title) = patch.title {
            next.title = title;
        }
        if let Some(description) = patch.description {
            next.description = description;
        }
        if let Some(template) = patch.template {
            next.template = template;
        }

        if next == *self {
            return next;
        }
        next.touch();
        next
    }

    /// Serialize the snapshot for the gallery store
    pub fn to_json(&self) -> Result<String, GalleryError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, GalleryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot handed over by the gallery store
    ///
    /// Exhibit ids must be unique; scales are floored at [`MIN_SCALE`].
    pub fn from_json(json: &str) -> Result<Gallery, GalleryError> {
        let mut gallery: Gallery = serde_json::from_str(json)?;

        for (i, exhibit) in gallery.exhibits.iter().enumerate() {
            if gallery.exhibits[..i].iter().any(|e| e.id() == exhibit.id()) {
                return Err(ValidationError::DuplicateId(exhibit.id().clone()).into());
            }
        }
        for exhibit in &mut gallery.exhibits {
            exhibit.transform = exhibit.transform.with_scale_floor(MIN_SCALE);
        }

        Ok(gallery)
    }

    /// Append without validation, for built-in fixtures
    pub(crate) fn push_exhibit(mut self, exhibit: Exhibit) -> Self {
        self.exhibits.push(exhibit);
        self
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Transform;
    use cgmath::Vector3;

    fn gallery_with(ids: &[&str]) -> Gallery {
        ids.iter().fold(
            Gallery::new("g", "Test", "", GalleryTemplate::Classic),
            |g, id| g.push_exhibit(Exhibit::new(*id, format!("Exhibit {}", id), "img")),
        )
    }

    fn ids(gallery: &Gallery) -> Vec<&str> {
        gallery.exhibits().iter().map(|e| e.id().as_str()).collect()
    }

    #[test]
    fn test_append_to_empty_gallery_uses_defaults() {
        let gallery = Gallery::new("g", "Test", "", GalleryTemplate::Classic);
        let next = gallery.append_exhibit(Exhibit::new("a", "A", "img1")).unwrap();

        assert_eq!(next.len(), 1);
        let exhibit = &next.exhibits()[0];
        assert_eq!(exhibit.transform.position, Vector3::new(0.0, 1.5, -8.0));
        assert_eq!(exhibit.transform.rotation, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(exhibit.transform.scale, Vector3::new(1.0, 1.0, 1.0));
        // The original snapshot is untouched
        assert!(gallery.is_empty());
    }

    #[test]
    fn test_append_rejects_missing_fields() {
        let gallery = gallery_with(&["1"]);

        let err = gallery.append_exhibit(Exhibit::new("a", "", "img1")).unwrap_err();
        assert_eq!(err, ValidationError::MissingTitle);

        let err = gallery.append_exhibit(Exhibit::new("a", "   ", "img1")).unwrap_err();
        assert_eq!(err, ValidationError::MissingTitle);

        let err = gallery.append_exhibit(Exhibit::new("a", "A", "")).unwrap_err();
        assert_eq!(err, ValidationError::MissingImage);

        let err = gallery.append_exhibit(Exhibit::new("1", "A", "img")).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateId(ExhibitId::new("1")));

        assert_eq!(ids(&gallery), vec!["1"]);
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let gallery = gallery_with(&["1", "2"]);
        let next = gallery.replace_exhibit(&ExhibitId::new("missing"), Exhibit::new("missing", "X", "img"));
        assert_eq!(next, gallery);
    }

    #[test]
    fn test_replace_preserves_order_and_length() {
        let gallery = gallery_with(&["1", "2", "3"]);
        let target = ExhibitId::new("2");
        let edited = gallery
            .exhibit(&target)
            .cloned()
            .unwrap()
            .with_description("edited")
            .with_transform(Transform::new(
                Vector3::new(5.0, 1.0, 2.0),
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(2.0, 2.0, 2.0),
            ));

        let next = gallery.replace_exhibit(&target, edited.clone());

        assert_eq!(ids(&next), vec!["1", "2", "3"]);
        assert_eq!(next.exhibits()[1], edited);
        assert_eq!(next.exhibits()[0], gallery.exhibits()[0]);
        assert_eq!(next.exhibits()[2], gallery.exhibits()[2]);
        assert!(next.updated_at() >= gallery.updated_at());
    }

    #[test]
    fn test_writes_floor_scale() {
        let gallery = gallery_with(&["1", "2"]);
        let target = ExhibitId::new("1");

        let mut edited = gallery.exhibit(&target).cloned().unwrap();
        edited.transform.scale.x = 0.0;
        edited.transform.scale.y = -3.0;
        let next = gallery.replace_exhibit(&target, edited);
        let stored = next.exhibit(&target).unwrap().transform;
        assert!(stored.has_valid_scale(MIN_SCALE));
        assert_eq!(stored.scale, Vector3::new(MIN_SCALE, MIN_SCALE, 1.0));

        let mut added = Exhibit::new("3", "Three", "img");
        added.transform.scale.z = f32::NAN;
        let next = next.append_exhibit(added).unwrap();
        let stored = next.exhibit(&ExhibitId::new("3")).unwrap().transform;
        assert!(stored.has_valid_scale(MIN_SCALE));
        assert_eq!(stored.scale, Vector3::new(1.0, 1.0, MIN_SCALE));
    }

    fn stale_gallery() -> Gallery {
        let json = r#"{
            "id": "g",
            "title": "Old",
            "createdAt": "2000-01-01T00:00:00Z",
            "updatedAt": "2000-01-01T00:00:00Z",
            "exhibits": [
                {
                    "id": "1",
                    "title": "One",
                    "imageRef": "img1",
                    "position": {"x": 0.0, "y": 1.5, "z": -8.0},
                    "rotation": {"x": 0.0, "y": 0.0, "z": 0.0},
                    "scale": {"x": 1.0, "y": 1.0, "z": 1.0}
                }
            ]
        }"#;
        Gallery::from_json(json).unwrap()
    }

    #[test]
    fn test_effective_mutations_refresh_updated_at() {
        let gallery = stale_gallery();
        let stale = gallery.updated_at();
        assert_eq!(stale.to_rfc3339(), "2000-01-01T00:00:00+00:00");
        let target = ExhibitId::new("1");

        let edited = gallery.exhibit(&target).cloned().unwrap().with_description("edited");
        assert!(gallery.replace_exhibit(&target, edited).updated_at() > stale);

        let appended = gallery.append_exhibit(Exhibit::new("2", "Two", "img2")).unwrap();
        assert!(appended.updated_at() > stale);

        assert!(gallery.remove_exhibit(&target).updated_at() > stale);

        let renamed = gallery.set_metadata(MetadataPatch::new().title("New"));
        assert!(renamed.updated_at() > stale);
        assert_eq!(renamed.created_at(), gallery.created_at());
    }

    #[test]
    fn test_noop_mutations_keep_updated_at() {
        let gallery = stale_gallery();
        let target = ExhibitId::new("1");
        let same = gallery.exhibit(&target).cloned().unwrap();

        assert_eq!(gallery.replace_exhibit(&target, same).updated_at(), gallery.updated_at());
        assert_eq!(gallery.remove_exhibit(&ExhibitId::new("9")).updated_at(), gallery.updated_at());
        assert_eq!(
            gallery.set_metadata(MetadataPatch::new().title("Old")).updated_at(),
            gallery.updated_at()
        );
    }

    #[test]
    fn test_replace_keeps_slot_identity() {
        let gallery = gallery_with(&["1", "2"]);
        let impostor = Exhibit::new("other", "Renamed", "img");

        let next = gallery.replace_exhibit(&ExhibitId::new("1"), impostor);

        assert_eq!(ids(&next), vec!["1", "2"]);
        assert_eq!(next.exhibits()[0].title, "Renamed");
    }

    #[test]
    fn test_remove_exhibit() {
        let gallery = gallery_with(&["1", "2", "3"]);

        let next = gallery.remove_exhibit(&ExhibitId::new("2"));
        assert_eq!(ids(&next), vec!["1", "3"]);

        let unchanged = next.remove_exhibit(&ExhibitId::new("2"));
        assert_eq!(unchanged, next);
    }

    #[test]
    fn test_set_metadata_merges_fields() {
        let gallery = gallery_with(&["1"]);

        let next = gallery.set_metadata(MetadataPatch::new().title("Renamed").template(GalleryTemplate::Modern));
        assert_eq!(next.title(), "Renamed");
        assert_eq!(next.template(), GalleryTemplate::Modern);
        assert_eq!(next.description(), gallery.description());
        assert_eq!(next.exhibits(), gallery.exhibits());

        let same = next.set_metadata(MetadataPatch::new());
        assert_eq!(same, next);
    }

    #[test]
    fn test_json_round_trip_uses_store_field_names() {
        let gallery = gallery_with(&["1", "2"]).with_sharing(true, Some("share".to_string()));
        let json = gallery.to_json().unwrap();

        assert!(json.contains("\"imageRef\""));
        assert!(json.contains("\"isPublic\":true"));
        assert!(json.contains("\"template\":\"classic\""));

        let restored = Gallery::from_json(&json).unwrap();
        assert_eq!(restored, gallery);
    }

    #[test]
    fn test_from_json_rejects_duplicate_ids() {
        let mut gallery = gallery_with(&["1"]);
        gallery.exhibits.push(Exhibit::new("1", "Again", "img"));
        let json = gallery.to_json().unwrap();

        match Gallery::from_json(&json) {
            Err(GalleryError::Validation(ValidationError::DuplicateId(id))) => assert_eq!(id.as_str(), "1"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }
}
