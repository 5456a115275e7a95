//! Builder session: the gallery being built plus the side panel's state
//!
//! A session is a plain value. [`BuilderSession::update`] consumes it together
//! with one [`Message`] and returns the next session along with the effects
//! the host should carry out (persist, redraw, report a validation error).

use log::{debug, info, warn};

use super::message::{Effect, Message};
use super::state::{BuilderState, EditSession};
use crate::config::EditorConfig;
use crate::editor::{
    parse_field_value, parse_scale_value, Axis, EditTarget, ExhibitDraft, Preset, TextField,
    TransformEditor, TransformForm,
};
use crate::model::{Exhibit, ExhibitId, Gallery, MetadataPatch};
use crate::scene::{SceneProjector, SceneSnapshot, ViewMode};

/// Result of feeding one message to a session
#[derive(Debug, Clone)]
pub struct Transition {
    pub session: BuilderSession,
    pub effects: Vec<Effect>,
}

/// A single edit to whatever the side panel currently has open
#[derive(Debug, Clone, PartialEq)]
enum FieldEdit {
    Text(TextField, String),
    Position(Axis, f32),
    Rotation(Axis, f32),
    Scale(Axis, f32),
    Preset(Preset),
}

impl FieldEdit {
    fn apply<T: EditTarget>(self, editor: &TransformEditor, target: T) -> T {
        match self {
            FieldEdit::Text(field, value) => editor.set_field(target, field, value),
            FieldEdit::Position(axis, value) => editor.set_position_axis(target, axis, value),
            FieldEdit::Rotation(axis, degrees) => editor.set_rotation_axis_degrees(target, axis, degrees),
            FieldEdit::Scale(axis, value) => editor.set_scale_axis(target, axis, value),
            FieldEdit::Preset(preset) => editor.apply_preset(target, preset),
        }
    }
}

/// The gallery under construction and everything the builder UI tracks
#[derive(Debug, Clone)]
pub struct BuilderSession {
    gallery: Gallery,
    state: BuilderState,
    mode: ViewMode,
    config: EditorConfig,
    editor: TransformEditor,
    elapsed: f32,
}

impl BuilderSession {
    /// Start building `gallery` in edit mode with the default configuration
    pub fn new(gallery: Gallery) -> Self {
        let config = EditorConfig::default();
        Self {
            gallery,
            state: BuilderState::Browsing,
            mode: ViewMode::Edit,
            editor: TransformEditor::new(&config),
            config,
            elapsed: 0.0,
        }
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.editor = TransformEditor::new(&config);
        self.config = config;
        self
    }

    pub fn with_mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Seconds reported by the last tick
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn into_gallery(self) -> Gallery {
        self.gallery
    }

    pub fn projector(&self) -> SceneProjector {
        SceneProjector::from_config(self.mode, &self.config)
    }

    /// Scene for the committed gallery; open drafts and edits are not shown
    pub fn scene(&self) -> SceneSnapshot {
        self.projector().project_scene(&self.gallery)
    }

    /// Transform values for the open draft or exhibit, as the form shows them
    pub fn form(&self) -> Option<TransformForm> {
        match &self.state {
            BuilderState::Browsing => None,
            BuilderState::Adding(draft) => Some(TransformForm::from_transform(&draft.transform)),
            BuilderState::Editing(session) => Some(TransformForm::from_exhibit(&session.edited)),
        }
    }

    /// Apply one message
    pub fn update(self, message: Message) -> Transition {
        let mut effects = Vec::new();
        let session = self.apply(message, &mut effects);
        Transition { session, effects }
    }

    fn apply(self, message: Message, effects: &mut Vec<Effect>) -> Self {
        match message {
            Message::StartAdd => self.start_add(effects),
            Message::DraftTitle(title) => self.edit_draft(FieldEdit::Text(TextField::Title, title), effects),
            Message::DraftDescription(text) => {
                self.edit_draft(FieldEdit::Text(TextField::Description, text), effects)
            }
            Message::ImageResolved(image_ref) => self.set_draft_image(Some(image_ref), effects),
            Message::ImageRemoved => self.set_draft_image(None, effects),
            Message::SubmitDraft => self.submit_draft(effects),
            Message::CancelAdd => self.cancel_add(effects),

            Message::Pick(id) => self.pick(&id, effects),
            Message::Select(id) => {
                let found = self.gallery.exhibit(&id).cloned();
                match found {
                    Some(exhibit) => self.begin_edit(exhibit, effects),
                    None => {
                        debug!("Select on unknown exhibit {}", id);
                        self
                    }
                }
            }
            Message::EditTitle(title) => self.edit_exhibit(FieldEdit::Text(TextField::Title, title), effects),
            Message::EditDescription(text) => {
                self.edit_exhibit(FieldEdit::Text(TextField::Description, text), effects)
            }
            Message::PositionInput(axis, text) => {
                self.edit_active(FieldEdit::Position(axis, parse_field_value(&text)), effects)
            }
            Message::RotationInput(axis, text) => {
                self.edit_active(FieldEdit::Rotation(axis, parse_field_value(&text)), effects)
            }
            Message::ScaleInput(axis, text) => {
                self.edit_active(FieldEdit::Scale(axis, parse_scale_value(&text)), effects)
            }
            Message::ApplyPreset(preset) => self.edit_active(FieldEdit::Preset(preset), effects),
            Message::ResetEdits => self.reset_edits(effects),
            Message::SaveEdits => self.save_edits(effects),
            Message::CancelEdits => self.cancel_edits(effects),
            Message::RemoveExhibit(id) => self.remove_exhibit(&id, effects),

            Message::SetTitle(title) => {
                let gallery = self.gallery.set_metadata(MetadataPatch::new().title(title));
                self.commit(gallery, effects)
            }
            Message::SetDescription(text) => {
                let gallery = self.gallery.set_metadata(MetadataPatch::new().description(text));
                self.commit(gallery, effects)
            }
            Message::SetTemplate(template) => {
                let gallery = self.gallery.set_metadata(MetadataPatch::new().template(template));
                self.commit(gallery, effects)
            }
            Message::SetMode(mode) => self.set_mode(mode, effects),

            Message::Tick(elapsed) => self.tick(elapsed, effects),
            Message::SaveGallery => {
                info!("Saving gallery {} ({} exhibits)", self.gallery.id(), self.gallery.len());
                effects.push(Effect::SaveRequested(self.gallery.clone()));
                self
            }
            Message::Preview => {
                effects.push(Effect::PreviewRequested);
                self
            }
        }
    }

    /// Swap in a new gallery snapshot, reporting only real changes
    fn commit(mut self, gallery: Gallery, effects: &mut Vec<Effect>) -> Self {
        if gallery != self.gallery {
            self.gallery = gallery;
            effects.push(Effect::GalleryChanged(self.gallery.clone()));
            effects.push(Effect::SceneChanged(self.scene()));
        }
        self
    }

    /// Drop whatever the panel has open, reporting lost input
    fn discard_open(&mut self, reason: &str, effects: &mut Vec<Effect>) {
        if self.state.has_unsaved_input() {
            warn!("Discarding unsaved input to {}", reason);
            effects.push(Effect::DraftDiscarded);
        }
        self.state = BuilderState::Browsing;
    }

    fn start_add(mut self, effects: &mut Vec<Effect>) -> Self {
        if self.state.draft().is_some() {
            debug!("Add form already open");
            return self;
        }
        self.discard_open("start a new exhibit", effects);
        self.state = BuilderState::Adding(ExhibitDraft::with_placement(self.config.default_placement));
        effects.push(Effect::Redraw);
        self
    }

    fn set_draft_image(mut self, image_ref: Option<String>, effects: &mut Vec<Effect>) -> Self {
        self.state = match self.state {
            BuilderState::Adding(draft) => {
                effects.push(Effect::Redraw);
                BuilderState::Adding(match image_ref {
                    Some(image_ref) => draft.with_image(image_ref),
                    None => draft.without_image(),
                })
            }
            other => {
                debug!("No add form open, dropping image");
                other
            }
        };
        self
    }

    fn submit_draft(mut self, effects: &mut Vec<Effect>) -> Self {
        let BuilderState::Adding(draft) = &self.state else {
            debug!("Submit without an add form open");
            return self;
        };

        let appended = draft
            .clone()
            .into_exhibit(ExhibitId::generate())
            .and_then(|exhibit| self.gallery.append_exhibit(exhibit));

        match appended {
            Ok(gallery) => {
                self.state = BuilderState::Browsing;
                effects.push(Effect::Redraw);
                self.commit(gallery, effects)
            }
            Err(err) => {
                debug!("Draft rejected: {}", err);
                effects.push(Effect::ValidationFailed(err));
                self
            }
        }
    }

    fn cancel_add(mut self, effects: &mut Vec<Effect>) -> Self {
        if self.state.draft().is_some() {
            self.state = BuilderState::Browsing;
            effects.push(Effect::Redraw);
        }
        self
    }

    fn pick(self, id: &ExhibitId, effects: &mut Vec<Effect>) -> Self {
        let Some(exhibit) = self.projector().resolve_pick(id, &self.gallery) else {
            return self;
        };

        if self.mode.is_edit() {
            self.begin_edit(exhibit, effects)
        } else {
            effects.push(Effect::ExhibitFocused(exhibit));
            self
        }
    }

    fn begin_edit(mut self, exhibit: Exhibit, effects: &mut Vec<Effect>) -> Self {
        if let BuilderState::Editing(session) = &self.state {
            if session.id() == exhibit.id() {
                debug!("Exhibit {} already open", exhibit.id());
                return self;
            }
        }

        if self.config.guard_unsaved_draft && self.state.draft().is_some() && self.state.has_unsaved_input() {
            debug!("Unsaved draft open, ignoring pick on {}", exhibit.id());
            effects.push(Effect::PickIgnored(exhibit.id().clone()));
            return self;
        }

        self.discard_open(&format!("edit exhibit {}", exhibit.id()), effects);
        self.state = BuilderState::Editing(EditSession::new(exhibit));
        effects.push(Effect::Redraw);
        self
    }

    fn edit_draft(mut self, edit: FieldEdit, effects: &mut Vec<Effect>) -> Self {
        self.state = match self.state {
            BuilderState::Adding(draft) => {
                effects.push(Effect::Redraw);
                BuilderState::Adding(edit.apply(&self.editor, draft))
            }
            other => {
                debug!("No add form open, ignoring {:?}", edit);
                other
            }
        };
        self
    }

    fn edit_exhibit(mut self, edit: FieldEdit, effects: &mut Vec<Effect>) -> Self {
        self.state = match self.state {
            BuilderState::Editing(mut session) => {
                session.edited = edit.apply(&self.editor, session.edited);
                effects.push(Effect::Redraw);
                BuilderState::Editing(session)
            }
            other => {
                debug!("No exhibit open, ignoring {:?}", edit);
                other
            }
        };
        self
    }

    /// Transform edits go to the draft while adding, or the open exhibit
    fn edit_active(self, edit: FieldEdit, effects: &mut Vec<Effect>) -> Self {
        if self.state.draft().is_some() {
            self.edit_draft(edit, effects)
        } else {
            self.edit_exhibit(edit, effects)
        }
    }

    fn reset_edits(mut self, effects: &mut Vec<Effect>) -> Self {
        if let BuilderState::Editing(session) = &mut self.state {
            session.edited = session.original().clone();
            effects.push(Effect::Redraw);
        }
        self
    }

    fn save_edits(mut self, effects: &mut Vec<Effect>) -> Self {
        match self.state {
            BuilderState::Editing(session) => {
                let (original, edited) = session.into_parts();
                self.state = BuilderState::Browsing;
                effects.push(Effect::Redraw);
                let gallery = self.gallery.replace_exhibit(original.id(), edited);
                self.commit(gallery, effects)
            }
            other => {
                debug!("Save without an exhibit open");
                self.state = other;
                self
            }
        }
    }

    fn cancel_edits(mut self, effects: &mut Vec<Effect>) -> Self {
        if self.state.edit_session().is_some() {
            self.state = BuilderState::Browsing;
            effects.push(Effect::Redraw);
        }
        self
    }

    fn remove_exhibit(mut self, id: &ExhibitId, effects: &mut Vec<Effect>) -> Self {
        if !self.gallery.contains(id) {
            debug!("Remove of unknown exhibit {}", id);
            return self;
        }
        if self.state.edit_session().is_some_and(|s| s.id() == id) {
            self.state = BuilderState::Browsing;
            effects.push(Effect::Redraw);
        }
        let gallery = self.gallery.remove_exhibit(id);
        self.commit(gallery, effects)
    }

    fn set_mode(mut self, mode: ViewMode, effects: &mut Vec<Effect>) -> Self {
        if mode != self.mode {
            self.mode = mode;
            effects.push(Effect::SceneChanged(self.scene()));
        }
        self
    }

    fn tick(mut self, elapsed: f32, effects: &mut Vec<Effect>) -> Self {
        if elapsed.is_finite() {
            self.elapsed = elapsed;
            effects.push(Effect::Redraw);
        } else {
            debug!("Ignoring non-finite tick {}", elapsed);
        }
        self
    }
}
