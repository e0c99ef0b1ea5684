/// Key press inside the message field, as reported by the embedding shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorKey {
    Enter { shift: bool },
    Other,
}

/// What the shell should do with the key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorAction {
    /// Activate the submit action.
    Submit,
    /// Insert a literal line break into the field.
    InsertLineBreak,
    /// Leave the key to the field's default handling.
    Pass,
}

/// Plain Enter submits; Shift+Enter inserts a line break instead.
pub fn editor_action(key: EditorKey) -> EditorAction {
    match key {
        EditorKey::Enter { shift: false } => EditorAction::Submit,
        EditorKey::Enter { shift: true } => EditorAction::InsertLineBreak,
        EditorKey::Other => EditorAction::Pass,
    }
}
