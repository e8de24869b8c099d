use chrono::{DateTime, Local};

use super::intent::RequestId;
use crate::api::{Movie, QrCode};
use crate::ui::mvi::UiState;

/// Payload types a resource can hold.
pub trait Payload: Clone + PartialEq + Send + 'static {
    /// True when a successful response carries nothing to show.
    fn is_empty_payload(&self) -> bool {
        false
    }
}

impl Payload for Vec<Movie> {
    fn is_empty_payload(&self) -> bool {
        self.is_empty()
    }
}

impl Payload for QrCode {
    fn is_empty_payload(&self) -> bool {
        self.url.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStatus {
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub(super) status: ResourceStatus,
    /// Last successfully fetched payload. Survives refreshes and errors.
    pub(super) data: Option<T>,
    pub(super) error_message: Option<String>,
    pub(super) last_updated: Option<DateTime<Local>>,
    /// Only results for this request are applied.
    pub(super) latest_request: Option<RequestId>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            status: ResourceStatus::Loading,
            data: None,
            error_message: None,
            last_updated: None,
            latest_request: None,
        }
    }
}

impl<T: Payload> UiState for ResourceState<T> {}

/// What a screen should draw for a resource.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResourceView<'a, T> {
    Loading,
    Failed(&'a str),
    Empty,
    Ready(&'a T),
}

impl<T: Payload> ResourceState<T> {
    pub fn status(&self) -> ResourceStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ResourceStatus::Loading
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest_request
    }

    /// Derives the rendering decision from status and payload.
    pub fn view(&self) -> ResourceView<'_, T> {
        match self.status {
            ResourceStatus::Loading => ResourceView::Loading,
            ResourceStatus::Error => {
                ResourceView::Failed(self.error_message.as_deref().unwrap_or_default())
            }
            ResourceStatus::Success => match &self.data {
                Some(data) if !data.is_empty_payload() => ResourceView::Ready(data),
                _ => ResourceView::Empty,
            },
        }
    }
}
