//! Executes `UiCommand`s off the UI thread.
//!
//! Each fetch runs as its own task; nothing is cancelled when a newer
//! request supersedes it. The reducers drop stale results instead.

use std::sync::mpsc;
use std::time::Duration;

use crate::api::{ApiClient, FetchError};
use crate::clipboard::SharedClipboard;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;
use crate::ui::poller::Poller;
use crate::ui::qr_image::QrBitmap;

pub struct CommandWorker {
    client: ApiClient,
    events: mpsc::Sender<AppEvent>,
    poll_interval: Duration,
    poller: Option<Poller>,
    clipboard: SharedClipboard,
}

impl CommandWorker {
    pub fn new(client: ApiClient, events: mpsc::Sender<AppEvent>, poll_interval: Duration) -> Self {
        Self {
            client,
            events,
            poll_interval,
            poller: None,
            clipboard: SharedClipboard::default(),
        }
    }

    /// Processes commands until every sender is dropped.
    pub async fn run(mut self, mut commands: tokio::sync::mpsc::Receiver<UiCommand>) {
        while let Some(command) = commands.recv().await {
            self.handle(command);
        }
        tracing::debug!("Command channel closed");
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(|poller| !poller.is_finished())
    }

    /// Must be called from within a tokio runtime.
    pub fn handle(&mut self, command: UiCommand) {
        match command {
            UiCommand::FetchQr { request } => {
                let client = self.client.clone();
                let events = self.events.clone();
                tokio::spawn(async move {
                    let result = client.fetch_qr().await;
                    let _ = events.send(AppEvent::QrFetched { request, result });
                });
            }
            UiCommand::FetchQrImage { request, url } => {
                let client = self.client.clone();
                let events = self.events.clone();
                tokio::spawn(async move {
                    let result = match client.fetch_image(&url).await {
                        Ok(bytes) => tokio::task::spawn_blocking(move || QrBitmap::decode(&bytes))
                            .await
                            .unwrap_or_else(|e| {
                                Err(FetchError::Image(format!("decoder task failed: {}", e)))
                            }),
                        Err(err) => Err(err),
                    };
                    let _ = events.send(AppEvent::QrImageFetched { request, result });
                });
            }
            UiCommand::FetchMovies {
                request,
                collection,
            } => {
                let client = self.client.clone();
                let events = self.events.clone();
                tokio::spawn(async move {
                    let result = client.fetch_movies(&collection).await;
                    let _ = events.send(AppEvent::MoviesFetched {
                        request,
                        collection,
                        result,
                    });
                });
            }
            UiCommand::StartQrPolling => {
                // Replacing an existing poller drops (and aborts) it
                self.poller = Some(Poller::start(self.poll_interval, self.events.clone()));
            }
            UiCommand::StopQrPolling => {
                self.poller = None;
            }
            UiCommand::CopyToClipboard { text } => {
                let events = self.events.clone();
                let clipboard = self.clipboard.clone();
                tokio::task::spawn_blocking(move || {
                    let result = clipboard.copy(&text).map(|()| text);
                    let _ = events.send(AppEvent::ClipboardResult(result));
                });
            }
        }
    }
}
