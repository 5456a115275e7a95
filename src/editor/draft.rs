//! Draft held by the "add exhibit" form until it is submitted

use crate::error::ValidationError;
use crate::model::{validate_exhibit, Exhibit, ExhibitId, Transform};

/// Fields of an exhibit that does not exist yet
///
/// The image reference stays `None` until the blob resolver delivers one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExhibitDraft {
    pub title: String,
    pub description: String,
    image_ref: Option<String>,
    pub transform: Transform,
}

impl ExhibitDraft {
    /// Empty draft at the default placement
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty draft at a custom placement
    pub fn with_placement(placement: Transform) -> Self {
        Self {
            transform: placement,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach a resolved image reference; an empty string clears it
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        let image_ref = image_ref.into();
        self.image_ref = (!image_ref.is_empty()).then_some(image_ref);
        self
    }

    pub fn without_image(mut self) -> Self {
        self.image_ref = None;
        self
    }

    pub fn image_ref(&self) -> Option<&str> {
        self.image_ref.as_deref()
    }

    /// Nothing typed or uploaded yet, so discarding loses nothing
    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.image_ref.is_none()
    }

    /// Whether the submit button should be enabled
    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.image_ref.is_none() {
            return Err(ValidationError::MissingImage);
        }
        Ok(())
    }

    /// Turn the draft into an exhibit with the given id
    pub fn into_exhibit(self, id: ExhibitId) -> Result<Exhibit, ValidationError> {
        self.validate()?;
        let exhibit = Exhibit::new(id, self.title, self.image_ref.unwrap_or_default())
            .with_description(self.description)
            .with_transform(self.transform);
        validate_exhibit(&exhibit)?;
        Ok(exhibit)
    }
}
