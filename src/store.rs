//! Gallery persistence seam
//!
//! The builder never talks to storage directly; it emits
//! [`Effect::SaveRequested`](crate::builder::Effect::SaveRequested) and the
//! host hands the snapshot to a [`GalleryStore`].

use std::collections::HashMap;

use log::{debug, info};

use crate::model::Gallery;

/// Where gallery snapshots are loaded from and saved to
pub trait GalleryStore {
    /// Snapshot for `id`, if the store knows it
    fn load(&self, id: &str) -> Option<Gallery>;

    /// Persist a snapshot; fire-and-forget from the builder's point of view
    fn save(&mut self, gallery: &Gallery);
}

/// Process-local store keyed by gallery id
#[derive(Debug, Clone, Default)]
pub struct InMemoryGalleryStore {
    galleries: HashMap<String, Gallery>,
    demo_fallback: bool,
}

impl InMemoryGalleryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve [`Gallery::shared_demo`] for ids the store has never seen
    pub fn with_demo_fallback(mut self) -> Self {
        self.demo_fallback = true;
        self
    }

    pub fn len(&self) -> usize {
        self.galleries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.galleries.is_empty()
    }
}

impl GalleryStore for InMemoryGalleryStore {
    fn load(&self, id: &str) -> Option<Gallery> {
        match self.galleries.get(id) {
            Some(gallery) => Some(gallery.clone()),
            None if self.demo_fallback => {
                debug!("Gallery {} not stored, serving shared demo", id);
                Some(Gallery::shared_demo(id))
            }
            None => {
                debug!("Gallery {} not found", id);
                None
            }
        }
    }

    fn save(&mut self, gallery: &Gallery) {
        info!("Storing gallery {} ({} exhibits)", gallery.id(), gallery.len());
        self.galleries.insert(gallery.id().to_string(), gallery.clone());
    }
}
