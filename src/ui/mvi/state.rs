/// Marker trait for UI state.
///
/// States are cloned rather than mutated in place, compared to detect
/// changes, and start from `Default` when a screen mounts.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
