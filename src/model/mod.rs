//! # Gallery Model
//!
//! The canonical data the rest of the crate works on: a [`Gallery`] holding an
//! ordered sequence of [`Exhibit`]s, each with its own [`Transform`].
//!
//! ## Key Components
//!
//! - [`Gallery`] - Metadata plus exhibits; mutations return new snapshots
//! - [`Exhibit`] - One image and its placement
//! - [`Transform`] - Position, rotation (radians) and scale
//! - [`MetadataPatch`] - Explicit partial update of the gallery's top-level fields
//!
//! ## Usage
//!
//! ```
//! use virtual_museum::model::{Exhibit, Gallery, MetadataPatch};
//!
//! let gallery = Gallery::untitled();
//! let gallery = gallery.append_exhibit(Exhibit::new("a1", "Sunset", "img://sunset")).unwrap();
//! let gallery = gallery.set_metadata(MetadataPatch::new().title("Summer"));
//! assert_eq!(gallery.len(), 1);
//! ```

pub mod demo;
pub mod exhibit;
pub mod gallery;
pub mod transform;

// Re-export main types
pub use exhibit::{Exhibit, ExhibitId};
pub use gallery::{validate_exhibit, Gallery, GalleryTemplate, MetadataPatch};
pub use transform::{Transform, FRONT_WALL_Z, HANG_HEIGHT, MIN_SCALE};
