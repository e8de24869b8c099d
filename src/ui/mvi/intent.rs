/// Marker trait for intents.
///
/// Intents are either user actions (retry, refresh) or system events
/// (a response arriving, a poll tick). Reducers turn them into new states.
pub trait Intent: Send + 'static {}
