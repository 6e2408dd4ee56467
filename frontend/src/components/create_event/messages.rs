use common::generation::GenerationKind;
use common::model::event_draft::DraftField;
use common::workspace::PreviewMode;

pub enum Msg {
    SetField(DraftField, String),
    SetPublic(bool),
    /// Full document text reported by the editor.
    DocumentEdited(String),
    SetPrompt(String),
    UseQuickPrompt(usize),
    Generate(GenerationKind),
    GenerationFinished(GenerationKind, String),
    SetPreviewMode(PreviewMode),
    ToggleVersions,
    ToggleAssistant,
    SetAutoSave(bool),
    AutoSaveDue,
    SaveDraft,
    RestoreVersion(u64),
    ToggleValidation,
    Submit,
    DismissSubmitOptions,
}
