//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──── key press / fetch result ┘
//! ```
//!
//! - **State**: everything a screen needs to draw itself
//! - **Intent**: a user action or a system event (fetch result, timer)
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
