use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PromptState {
    #[default]
    Hidden,
    Visible {
        value: String,
        /// Set after a rejected submit, cleared by the next edit.
        invalid: bool,
    },
}

impl UiState for PromptState {}

impl PromptState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Visible { value, .. } => Some(value),
            Self::Hidden => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Visible { invalid: true, .. })
    }
}
