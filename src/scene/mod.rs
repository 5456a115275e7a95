//! # Scene Projection
//!
//! Turns a gallery snapshot into a declarative list of framed surfaces for a
//! renderer, and turns the renderer's pick events back into exhibits. The
//! renderer owns nothing persistent; it redraws from each new projection.
//!
//! ## Key Components
//!
//! - [`SceneProjector`] - Gallery to [`PlacedSurface`] list and pick resolution
//! - [`FrameLayout`] - Frame, image plane and label dimensions
//! - [`bob_offset`] - Cosmetic idle animation
//! - [`pick_surface`] - Ray picking for hosts that only report rays
//!
//! ## Usage
//!
//! ```
//! use virtual_museum::model::Gallery;
//! use virtual_museum::scene::{SceneProjector, ViewMode};
//!
//! let scene = SceneProjector::new(ViewMode::Edit).project_scene(&Gallery::demo());
//! assert_eq!(scene.caption(), "3 exhibits");
//! assert!(scene.surfaces.iter().all(|s| s.is_selectable));
//! ```

pub mod animation;
pub mod picking;
pub mod projector;
pub mod surface;

// Re-export main types
pub use animation::{bob_offset, BOB_AMPLITUDE};
pub use picking::{pick_surface, surface_bounds, PickResult, Ray, AABB};
pub use projector::{SceneProjector, SceneSnapshot};
pub use surface::{FrameLayout, PlacedSurface, ViewMode};
