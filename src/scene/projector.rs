//! Gallery snapshot to scene description
//!
//! The projector is a pure function of the gallery and the view mode. The
//! renderer redraws from whatever it returns; nothing here is cached.

use log::debug;
use serde::Serialize;

use super::surface::{FrameLayout, PlacedSurface, ViewMode};
use crate::config::EditorConfig;
use crate::model::{Exhibit, ExhibitId, Gallery, GalleryTemplate};

/// Everything the renderer needs for one frame of the room
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    pub gallery_id: String,
    pub template: GalleryTemplate,
    pub title: String,
    pub description: String,
    pub mode: ViewMode,
    pub surfaces: Vec<PlacedSurface>,
}

impl SceneSnapshot {
    /// Exhibit count shown under the gallery title
    pub fn caption(&self) -> String {
        match self.surfaces.len() {
            1 => "1 exhibit".to_string(),
            n => format!("{} exhibits", n),
        }
    }

    pub fn surface(&self, id: &ExhibitId) -> Option<&PlacedSurface> {
        self.surfaces.iter().find(|s| &s.id == id)
    }
}

/// Maps galleries to placed surfaces and pick events back to exhibits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneProjector {
    mode: ViewMode,
    layout: FrameLayout,
    bob_amplitude: f32,
    focus_in_view_mode: bool,
}

impl SceneProjector {
    pub fn new(mode: ViewMode) -> Self {
        Self::from_config(mode, &EditorConfig::default())
    }

    pub fn from_config(mode: ViewMode, config: &EditorConfig) -> Self {
        Self {
            mode,
            layout: FrameLayout::STANDARD,
            bob_amplitude: config.bob_amplitude,
            focus_in_view_mode: config.focus_in_view_mode,
        }
    }

    pub fn with_layout(mut self, layout: FrameLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Whether picks are reported in the current mode
    pub fn is_selectable(&self) -> bool {
        self.mode.is_edit() || self.focus_in_view_mode
    }

    fn place(&self, exhibit: &Exhibit) -> PlacedSurface {
        PlacedSurface {
            id: exhibit.id().clone(),
            transform: exhibit.transform,
            image_ref: exhibit.image_ref.clone(),
            label: exhibit.title.clone(),
            is_edit_mode: self.mode.is_edit(),
            is_selectable: self.is_selectable(),
            layout: self.layout,
            bob_amplitude: self.bob_amplitude,
        }
    }

    /// One surface per exhibit, in gallery order
    pub fn project(&self, gallery: &Gallery) -> Vec<PlacedSurface> {
        gallery.exhibits().iter().map(|e| self.place(e)).collect()
    }

    /// Surfaces plus the room's metadata
    pub fn project_scene(&self, gallery: &Gallery) -> SceneSnapshot {
        SceneSnapshot {
            gallery_id: gallery.id().to_string(),
            template: gallery.template(),
            title: gallery.title().to_string(),
            description: gallery.description().to_string(),
            mode: self.mode,
            surfaces: self.project(gallery),
        }
    }

    /// Owned copy of the exhibit behind a pick event
    pub fn resolve_pick(&self, id: &ExhibitId, gallery: &Gallery) -> Option<Exhibit> {
        let exhibit = gallery.exhibit(id).cloned();
        if exhibit.is_none() {
            debug!("Pick on unknown exhibit {}", id);
        }
        exhibit
    }
}

impl Default for SceneProjector {
    fn default() -> Self {
        Self::new(ViewMode::default())
    }
}
