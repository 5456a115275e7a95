//! What the builder's side panel is doing

use crate::editor::ExhibitDraft;
use crate::model::{Exhibit, ExhibitId};

/// An exhibit open in the editor: the committed value and the working copy
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    original: Exhibit,
    pub edited: Exhibit,
}

impl EditSession {
    pub fn new(original: Exhibit) -> Self {
        Self {
            edited: original.clone(),
            original,
        }
    }

    pub fn original(&self) -> &Exhibit {
        &self.original
    }

    /// Id of the exhibit being edited; the working copy never changes it
    pub fn id(&self) -> &ExhibitId {
        self.original.id()
    }

    pub fn is_dirty(&self) -> bool {
        self.edited != self.original
    }

    /// Split into `(original, edited)`
    pub fn into_parts(self) -> (Exhibit, Exhibit) {
        (self.original, self.edited)
    }
}

/// Side-panel state; at most one of adding or editing is active
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BuilderState {
    #[default]
    Browsing,
    Adding(ExhibitDraft),
    Editing(EditSession),
}

impl BuilderState {
    pub fn is_browsing(&self) -> bool {
        matches!(self, BuilderState::Browsing)
    }

    pub fn draft(&self) -> Option<&ExhibitDraft> {
        match self {
            BuilderState::Adding(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        match self {
            BuilderState::Editing(session) => Some(session),
            _ => None,
        }
    }

    /// Whether leaving this state would throw away user input
    pub fn has_unsaved_input(&self) -> bool {
        match self {
            BuilderState::Browsing => false,
            BuilderState::Adding(draft) => !draft.is_blank(),
            BuilderState::Editing(session) => session.is_dirty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_session_dirty_tracking() {
        let exhibit = Exhibit::new("e1", "A", "img1");
        let mut session = EditSession::new(exhibit.clone());
        assert!(!session.is_dirty());

        session.edited.title = "B".to_string();
        assert!(session.is_dirty());
        assert_eq!(session.id().as_str(), "e1");

        let (original, edited) = session.into_parts();
        assert_eq!(original, exhibit);
        assert_eq!(edited.title, "B");
    }

    #[test]
    fn test_unsaved_input() {
        assert!(!BuilderState::Browsing.has_unsaved_input());
        assert!(!BuilderState::Adding(ExhibitDraft::new()).has_unsaved_input());
        assert!(BuilderState::Adding(ExhibitDraft::new().with_title("x")).has_unsaved_input());
        assert!(BuilderState::default().is_browsing());
    }
}
