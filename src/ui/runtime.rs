use crate::api::ApiClient;
use crate::config::Config;
use crate::ui::app::{App, AppSettings, Route};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::CommandWorker;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(250);
const COMMAND_CHANNEL_CAPACITY: usize = 64;
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// Applies one event to the app. Returns false when the event loop should stop.
pub fn apply_event(app: &mut App, event: AppEvent) -> bool {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize(cols, rows) => app.on_resize(cols, rows),
        AppEvent::QrFetched { request, result } => app.on_qr_fetched(request, result),
        AppEvent::QrImageFetched { request, result } => app.on_qr_image_fetched(request, result),
        AppEvent::MoviesFetched {
            request,
            collection,
            result,
        } => app.on_movies_fetched(request, collection, result),
        AppEvent::QrPollTick => app.on_qr_poll_tick(),
        AppEvent::ClipboardResult(result) => app.on_clipboard_result(result),
        AppEvent::Shutdown => {
            tracing::info!("Termination signal received");
            app.request_quit();
        }
    }
    !app.should_quit()
}

/// Runs the TUI until the user quits.
pub fn run(config: &Config, route: Route) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("movieqr-worker")
        .build()
        .context("Failed to start async runtime")?;

    let client = ApiClient::from_config(config).context("Failed to build HTTP client")?;
    tracing::info!(api = client.base_url(), "Starting");

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let events = EventHandler::new(TICK_RATE).context("Failed to start input thread")?;
    let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
    let worker = CommandWorker::new(client, events.sender(), config.refresh_interval());
    runtime.spawn(worker.run(command_rx));

    let mut app = App::new(AppSettings::from_config(config), command_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.mount(route);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(event) => {
                if !apply_event(&mut app, event) {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // Dropping the app closes the command channel, which ends the worker.
    drop(app);
    runtime.shutdown_timeout(SHUTDOWN_TIMEOUT);
    tracing::info!("Stopped");
    Ok(())
}
