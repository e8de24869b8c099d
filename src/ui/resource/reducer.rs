//! Reducer for remote resources.

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::ResourceIntent;
use super::state::{Payload, ResourceState, ResourceStatus};

/// Reducer for resource state transitions.
///
/// Pure function. Issuing the request and logging failures are handled
/// by the caller around the dispatch call.
pub struct ResourceReducer<T>(PhantomData<fn() -> T>);

impl<T: Payload> Reducer for ResourceReducer<T> {
    type State = ResourceState<T>;
    type Intent = ResourceIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ResourceIntent::Refresh { request } => ResourceState {
                status: ResourceStatus::Loading,
                error_message: None,
                latest_request: Some(request),
                ..state
            },

            // Superseded request: its result no longer describes the screen.
            ResourceIntent::Resolved { request, .. } | ResourceIntent::Failed { request, .. }
                if state.latest_request != Some(request) =>
            {
                state
            }

            ResourceIntent::Resolved { payload, at, .. } => ResourceState {
                status: ResourceStatus::Success,
                data: Some(payload),
                error_message: None,
                last_updated: Some(at),
                ..state
            },

            ResourceIntent::Failed { message, .. } => ResourceState {
                status: ResourceStatus::Error,
                error_message: Some(message),
                ..state
            },
        }
    }
}
