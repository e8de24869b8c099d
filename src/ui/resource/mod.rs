//! Remote resource feature module.
//!
//! One fetch lifecycle, parameterized over the payload type. The QR code,
//! the QR image and the gallery movie list are all instances of it.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Loading / Success / Error plus the last good payload
//! - `intent.rs` - Refresh, Resolved, Failed (tagged with a `RequestId`)
//! - `reducer.rs` - State transitions (pure, drops stale results)

mod intent;
mod reducer;
mod state;

pub use intent::{RequestId, RequestIds, ResourceIntent};
pub use reducer::ResourceReducer;
pub use state::{Payload, ResourceState, ResourceStatus, ResourceView};
