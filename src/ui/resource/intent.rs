//! Intents for a remote resource.

use chrono::{DateTime, Local};

use super::state::Payload;
use crate::ui::mvi::Intent;

/// Identifies one issued request. Later requests have larger ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// Monotonic `RequestId` allocator.
#[derive(Debug, Default)]
pub struct RequestIds {
    last: u64,
}

impl RequestIds {
    pub fn next(&mut self) -> RequestId {
        self.last += 1;
        RequestId(self.last)
    }
}

/// Intents that can be dispatched to a resource reducer.
#[derive(Debug)]
pub enum ResourceIntent<T> {
    /// A request was issued. Enters `Loading`; the previous payload is kept.
    Refresh { request: RequestId },

    /// A request succeeded.
    Resolved {
        request: RequestId,
        payload: T,
        at: DateTime<Local>,
    },

    /// A request failed. `message` is what the user sees.
    Failed { request: RequestId, message: String },
}

impl<T: Payload> Intent for ResourceIntent<T> {}

impl<T> ResourceIntent<T> {
    pub fn request(&self) -> RequestId {
        match self {
            ResourceIntent::Refresh { request }
            | ResourceIntent::Resolved { request, .. }
            | ResourceIntent::Failed { request, .. } => *request,
        }
    }
}
