use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::api::{CollectionId, FetchError, Movie, QrCode};
use crate::ui::qr_image::QrBitmap;
use crate::ui::resource::RequestId;

/// Everything the UI loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    QrFetched {
        request: RequestId,
        result: Result<QrCode, FetchError>,
    },
    QrImageFetched {
        request: RequestId,
        result: Result<QrBitmap, FetchError>,
    },
    MoviesFetched {
        request: RequestId,
        collection: CollectionId,
        result: Result<Vec<Movie>, FetchError>,
    },
    /// The QR poller's interval elapsed.
    QrPollTick,
    /// Clipboard copy finished: the copied text, or an error message.
    ClipboardResult(Result<String, String>),
    /// OS signal received (SIGTERM, SIGINT, ...).
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        let shutdown = Arc::new(AtomicBool::new(false));
        for signal in signal_hook::consts::TERM_SIGNALS {
            if let Err(err) = signal_hook::flag::register(*signal, Arc::clone(&shutdown)) {
                tracing::warn!(signal, error = %err, "Failed to register signal handler");
            }
        }

        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    if shutdown.swap(false, Ordering::Relaxed)
                        && event_tx.send(AppEvent::Shutdown).is_err()
                    {
                        break;
                    }

                    // Short poll timeout so the shutdown flag is checked often
                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(Duration::from_millis(50));

                    let forwarded = match event::poll(timeout) {
                        Ok(true) => match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                            Ok(Event::Resize(cols, rows)) => {
                                event_tx.send(AppEvent::Resize(cols, rows))
                            }
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(error = %err, "Terminal read failed");
                                break;
                            }
                        },
                        Ok(false) => Ok(()),
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal poll failed");
                            break;
                        }
                    };
                    if forwarded.is_err() {
                        break;
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if event_tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            })?;

        Ok(Self { rx, tx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
