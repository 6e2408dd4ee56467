#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorTab {
    Write,
    Preview,
}

/// Formatting actions offered by the toolbar. Each one inserts a markdown
/// snippet at the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Heading(u8),
    BulletList,
    OrderedList,
    Quote,
    HorizontalRule,
    Table,
}

/// Edits to the markdown table under the cursor. Only offered while the
/// cursor is inside a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEdit {
    AddColumnAfter,
    AddRowAfter,
    DeleteTable,
}

pub enum Msg {
    SetTab(EditorTab),
    UpdateText(String),
    Undo,
    Redo,
    ApplyStyle(Style),
    EditTable(TableEdit),
    /// Selection moved (click or key); re-read from the textarea.
    CaretMoved,
}
