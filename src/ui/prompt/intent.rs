use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PromptIntent {
    Open,
    Close,
    Insert(char),
    Backspace,
    /// Submitted value was not a valid collection id.
    Reject,
}

impl Intent for PromptIntent {}
