//! Events fed into a builder session and the effects it asks the host to perform

use crate::editor::{Axis, Preset};
use crate::error::ValidationError;
use crate::model::{Exhibit, ExhibitId, Gallery, GalleryTemplate};
use crate::scene::{SceneSnapshot, ViewMode};

/// Something the user, the renderer or the blob resolver did
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Open the "add exhibit" form
    StartAdd,
    DraftTitle(String),
    DraftDescription(String),
    /// The blob resolver produced a reference for the chosen image
    ImageResolved(String),
    ImageRemoved,
    SubmitDraft,
    CancelAdd,

    /// Renderer reported a click on a surface
    Pick(ExhibitId),
    /// Exhibit chosen from the side-panel list, in any mode
    Select(ExhibitId),
    EditTitle(String),
    EditDescription(String),
    /// Raw form text for one position component
    PositionInput(Axis, String),
    /// Raw form text for one rotation component, in degrees
    RotationInput(Axis, String),
    ScaleInput(Axis, String),
    ApplyPreset(Preset),
    ResetEdits,
    SaveEdits,
    CancelEdits,
    RemoveExhibit(ExhibitId),

    SetTitle(String),
    SetDescription(String),
    SetTemplate(GalleryTemplate),
    SetMode(ViewMode),

    /// Animation clock, in seconds
    Tick(f32),
    SaveGallery,
    Preview,
}

/// Work the host performs after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The committed gallery changed
    GalleryChanged(Gallery),
    /// Surfaces or room metadata changed; redraw from this snapshot
    SceneChanged(SceneSnapshot),
    ValidationFailed(ValidationError),
    /// Unsaved input was dropped by an implicit cancel
    DraftDiscarded,
    /// A pick arrived while an unsaved draft was guarded
    PickIgnored(ExhibitId),
    /// Pick outside edit mode; the host may zoom to or describe the exhibit
    ExhibitFocused(Exhibit),
    /// Hand the gallery to the store
    SaveRequested(Gallery),
    PreviewRequested,
    /// Panel contents or the animation clock changed
    Redraw,
}
