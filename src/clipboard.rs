//! Clipboard access for sharing gallery links.

use std::sync::{Arc, Mutex};

use arboard::Clipboard;

use crate::api::CollectionId;

/// Public link to a collection's gallery: `<base>/movies/<id>`.
pub fn share_link(share_base_url: &str, collection: &CollectionId) -> String {
    format!(
        "{}/movies/{}",
        share_base_url.trim_end_matches('/'),
        collection.as_str()
    )
}

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Create a new clipboard handler.
    pub fn new() -> Result<Self, String> {
        let clipboard =
            Clipboard::new().map_err(|e| format!("Clipboard unavailable: {}", e))?;
        Ok(Self { clipboard })
    }

    /// Write text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| format!("Failed to set clipboard text: {}", e))
    }
}

/// One clipboard handle kept open for the life of the app.
///
/// On Linux the copied text is served by the process that owns the last
/// `Clipboard`; dropping it right after a copy can leave the clipboard empty.
#[derive(Clone, Default)]
pub struct SharedClipboard {
    handler: Arc<Mutex<Option<ClipboardHandler>>>,
}

impl SharedClipboard {
    /// Copies `text`, opening the clipboard on first use. A failed open is
    /// retried on the next copy.
    pub fn copy(&self, text: &str) -> Result<(), String> {
        let mut slot = self
            .handler
            .lock()
            .map_err(|_| "Clipboard unavailable: lock poisoned".to_string())?;
        let mut handler = match slot.take() {
            Some(handler) => handler,
            None => ClipboardHandler::new()?,
        };
        let result = handler.set_text(text);
        *slot = Some(handler);
        result
    }

    /// Whether a clipboard handle is currently held open.
    pub fn is_open(&self) -> bool {
        self.handler.lock().is_ok_and(|slot| slot.is_some())
    }
}
