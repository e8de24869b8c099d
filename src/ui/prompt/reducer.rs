use crate::ui::mvi::Reducer;
use crate::ui::prompt::intent::PromptIntent;
use crate::ui::prompt::state::PromptState;

/// Longest identifier the prompt accepts.
const MAX_LEN: usize = 64;

pub struct PromptReducer;

impl Reducer for PromptReducer {
    type State = PromptState;
    type Intent = PromptIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PromptIntent::Open => PromptState::Visible {
                value: String::new(),
                invalid: false,
            },
            PromptIntent::Close => PromptState::Hidden,
            PromptIntent::Insert(ch) => match state {
                PromptState::Visible { mut value, .. } => {
                    if !ch.is_control() && value.chars().count() < MAX_LEN {
                        value.push(ch);
                    }
                    PromptState::Visible {
                        value,
                        invalid: false,
                    }
                }
                other => other,
            },
            PromptIntent::Backspace => match state {
                PromptState::Visible { mut value, .. } => {
                    value.pop();
                    PromptState::Visible {
                        value,
                        invalid: false,
                    }
                }
                other => other,
            },
            PromptIntent::Reject => match state {
                PromptState::Visible { value, .. } => PromptState::Visible {
                    value,
                    invalid: true,
                },
                other => other,
            },
        }
    }
}
