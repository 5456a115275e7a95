//! # Gallery Builder
//!
//! The edit workflow around a gallery: adding exhibits through a draft form,
//! picking an exhibit to edit, committing or cancelling, and editing the
//! gallery's own metadata.
//!
//! ## Key Components
//!
//! - [`BuilderSession`] - Owns the gallery, the panel state and the view mode
//! - [`BuilderState`] - Browsing, adding a draft, or editing an exhibit
//! - [`Message`] - Input events from the UI, renderer and blob resolver
//! - [`Effect`] - Output the host acts on (persist, redraw, report)
//!
//! ## Usage
//!
//! ```
//! use virtual_museum::builder::{BuilderSession, Message};
//! use virtual_museum::model::Gallery;
//!
//! let session = BuilderSession::new(Gallery::untitled());
//! let session = [
//!     Message::StartAdd,
//!     Message::DraftTitle("Sunset".into()),
//!     Message::ImageResolved("img://sunset".into()),
//!     Message::SubmitDraft,
//! ]
//! .into_iter()
//! .fold(session, |session, message| session.update(message).session);
//!
//! assert_eq!(session.gallery().len(), 1);
//! ```

pub mod message;
pub mod session;
pub mod state;

// Re-export main types
pub use message::{Effect, Message};
pub use session::{BuilderSession, Transition};
pub use state::{BuilderState, EditSession};
