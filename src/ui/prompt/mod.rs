//! Collection prompt feature module.
//!
//! A one-line input for typing a collection identifier. Submitting is
//! handled by `App`, which validates the value and navigates.

mod intent;
mod reducer;
mod state;

pub use intent::PromptIntent;
pub use reducer::PromptReducer;
pub use state::PromptState;
