use chrono::Local;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::api::{CollectionId, FetchError, Movie, QrCode};
use crate::clipboard::share_link;
use crate::config::Config;
use crate::ui::layout::gallery_columns;
use crate::ui::mvi::Reducer;
use crate::ui::prompt::{PromptIntent, PromptReducer, PromptState};
use crate::ui::qr_image::QrBitmap;
use crate::ui::resource::{
    Payload, RequestId, RequestIds, ResourceIntent, ResourceReducer, ResourceState,
};
use crate::ui::theme::SPINNER_FRAMES;

pub const QR_FAILED_MESSAGE: &str = "Failed to load QR code. Please try again.";
pub const MOVIES_FAILED_MESSAGE: &str = "Failed to load movies. Please try again.";

/// Ticks a notice stays in the footer.
const NOTICE_TICKS: u16 = 16;

/// Screen currently mounted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Route {
    Qr,
    Gallery(CollectionId),
}

/// Side effects requested by the UI. Executed by the command worker.
#[derive(Debug)]
pub enum UiCommand {
    FetchQr {
        request: RequestId,
    },
    FetchQrImage {
        request: RequestId,
        url: String,
    },
    FetchMovies {
        request: RequestId,
        collection: CollectionId,
    },
    StartQrPolling,
    StopQrPolling,
    CopyToClipboard {
        text: String,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Settings the UI needs from the config.
#[derive(Clone, Debug)]
pub struct AppSettings {
    pub refresh_interval: Duration,
    pub share_base_url: String,
}

impl AppSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            refresh_interval: config.refresh_interval(),
            share_base_url: config.gallery.share_base_url.clone(),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
    ticks_left: u16,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    route: Option<Route>,
    settings: AppSettings,
    commands: UiCommandSender,
    request_ids: RequestIds,
    qr: ResourceState<QrCode>,
    qr_image: ResourceState<QrBitmap>,
    /// URL the QR image resource was last requested for.
    qr_image_url: Option<String>,
    movies: ResourceState<Vec<Movie>>,
    selection: usize,
    prompt: PromptState,
    notice: Option<Notice>,
    size: Option<(u16, u16)>,
    spinner_frame: usize,
}

impl App {
    pub fn new(settings: AppSettings, commands: UiCommandSender) -> Self {
        Self {
            should_quit: false,
            route: None,
            settings,
            commands,
            request_ids: RequestIds::default(),
            qr: ResourceState::default(),
            qr_image: ResourceState::default(),
            qr_image_url: None,
            movies: ResourceState::default(),
            selection: 0,
            prompt: PromptState::default(),
            notice: None,
            size: None,
            spinner_frame: 0,
        }
    }

    // -- Accessors --------------------------------------------------------------

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn qr(&self) -> &ResourceState<QrCode> {
        &self.qr
    }

    pub fn qr_image(&self) -> &ResourceState<QrBitmap> {
        &self.qr_image
    }

    pub fn movies(&self) -> &ResourceState<Vec<Movie>> {
        &self.movies
    }

    pub fn collection(&self) -> Option<&CollectionId> {
        match &self.route {
            Some(Route::Gallery(id)) => Some(id),
            _ => None,
        }
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn prompt(&self) -> &PromptState {
        &self.prompt
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn refresh_interval(&self) -> Duration {
        self.settings.refresh_interval
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    // -- Navigation -------------------------------------------------------------

    /// Mounts the first screen.
    pub fn mount(&mut self, route: Route) {
        self.navigate(route);
    }

    /// Switches screens. Unmounting the QR screen stops its poller;
    /// mounting a screen resets its state and issues one fetch.
    pub fn navigate(&mut self, route: Route) {
        if self.route.as_ref() == Some(&route) {
            return;
        }
        let previous = self.route.replace(route.clone());
        if previous == Some(Route::Qr) {
            self.send(UiCommand::StopQrPolling);
        }
        tracing::info!(?route, "Navigate");

        match route {
            Route::Qr => {
                self.qr = ResourceState::default();
                self.qr_image = ResourceState::default();
                self.qr_image_url = None;
                self.refresh_qr();
                self.send(UiCommand::StartQrPolling);
            }
            Route::Gallery(_) => {
                self.movies = ResourceState::default();
                self.selection = 0;
                self.refresh_movies();
            }
        }
    }

    // -- Fetch lifecycle --------------------------------------------------------

    /// Manual refresh ("Generate New QR Code" / "Retry").
    ///
    /// Ignored while the current screen is already loading. Returns whether
    /// a request was issued.
    pub fn request_refresh(&mut self) -> bool {
        match self.route {
            Some(Route::Qr) if !self.qr.is_loading() => {
                self.refresh_qr();
                true
            }
            Some(Route::Gallery(_)) if !self.movies.is_loading() => {
                self.refresh_movies();
                true
            }
            _ => false,
        }
    }

    /// Periodic poll. Issues a request even if one is still in flight.
    pub fn on_qr_poll_tick(&mut self) {
        if self.route == Some(Route::Qr) {
            self.refresh_qr();
        }
    }

    fn refresh_qr(&mut self) {
        let request = self.request_ids.next();
        dispatch_mvi!(
            self,
            qr,
            ResourceReducer<QrCode>,
            ResourceIntent::Refresh { request }
        );
        if !self.send(UiCommand::FetchQr { request }) {
            let intent = abandoned(request, QR_FAILED_MESSAGE);
            dispatch_mvi!(self, qr, ResourceReducer<QrCode>, intent);
        }
    }

    fn refresh_movies(&mut self) {
        let Some(Route::Gallery(collection)) = self.route.clone() else {
            return;
        };
        let request = self.request_ids.next();
        dispatch_mvi!(
            self,
            movies,
            ResourceReducer<Vec<Movie>>,
            ResourceIntent::Refresh { request }
        );
        let sent = self.send(UiCommand::FetchMovies {
            request,
            collection,
        });
        if !sent {
            let intent = abandoned(request, MOVIES_FAILED_MESSAGE);
            dispatch_mvi!(self, movies, ResourceReducer<Vec<Movie>>, intent);
        }
    }

    pub fn on_qr_fetched(&mut self, request: RequestId, result: Result<QrCode, FetchError>) {
        if self.route != Some(Route::Qr) {
            tracing::debug!(?request, "Dropping QR code for an unmounted screen");
            return;
        }
        let intent = resolve(request, result, QR_FAILED_MESSAGE, "QR code");
        dispatch_mvi!(self, qr, ResourceReducer<QrCode>, intent);
        self.load_qr_image();
    }

    pub fn on_qr_image_fetched(
        &mut self,
        request: RequestId,
        result: Result<QrBitmap, FetchError>,
    ) {
        let intent = resolve(request, result, QR_FAILED_MESSAGE, "QR image");
        dispatch_mvi!(self, qr_image, ResourceReducer<QrBitmap>, intent);
    }

    pub fn on_movies_fetched(
        &mut self,
        request: RequestId,
        collection: CollectionId,
        result: Result<Vec<Movie>, FetchError>,
    ) {
        if self.collection() != Some(&collection) {
            tracing::debug!(
                %collection,
                ?request,
                "Dropping movies for a collection no longer shown"
            );
            return;
        }
        let intent = resolve(request, result, MOVIES_FAILED_MESSAGE, "movies");
        dispatch_mvi!(self, movies, ResourceReducer<Vec<Movie>>, intent);
        let count = self.movies.data().map_or(0, Vec::len);
        self.selection = self.selection.min(count.saturating_sub(1));
    }

    /// Requests the image behind the current QR URL, once per URL.
    fn load_qr_image(&mut self) {
        let Some(url) = self
            .qr
            .data()
            .filter(|qr| !qr.is_empty_payload())
            .map(|qr| qr.url.clone())
        else {
            return;
        };
        if self.qr_image_url.as_deref() == Some(url.as_str()) {
            return;
        }
        let request = self.request_ids.next();
        self.qr_image_url = Some(url.clone());
        self.qr_image = ResourceState::default();
        dispatch_mvi!(
            self,
            qr_image,
            ResourceReducer<QrBitmap>,
            ResourceIntent::Refresh { request }
        );
        if !self.send(UiCommand::FetchQrImage { request, url }) {
            self.qr_image_url = None;
            let intent = abandoned(request, QR_FAILED_MESSAGE);
            dispatch_mvi!(self, qr_image, ResourceReducer<QrBitmap>, intent);
        }
    }

    // -- Gallery ----------------------------------------------------------------

    fn movie_count(&self) -> usize {
        match self.route {
            Some(Route::Gallery(_)) => self.movies.data().map_or(0, Vec::len),
            _ => 0,
        }
    }

    fn columns(&self) -> usize {
        self.size.map_or(1, |(cols, _)| gallery_columns(cols))
    }

    pub fn select_next(&mut self) {
        let count = self.movie_count();
        if count > 0 {
            self.selection = (self.selection + 1).min(count - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selection = self.selection.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        let count = self.movie_count();
        let target = self.selection + self.columns();
        if target < count {
            self.selection = target;
        }
    }

    pub fn select_up(&mut self) {
        self.selection = self.selection.checked_sub(self.columns()).unwrap_or(self.selection);
    }

    /// Copies the public gallery link to the clipboard.
    pub fn share(&mut self) {
        if let Some(collection) = self.collection() {
            let text = share_link(&self.settings.share_base_url, collection);
            self.send(UiCommand::CopyToClipboard { text });
        }
    }

    pub fn on_clipboard_result(&mut self, result: Result<String, String>) {
        match result {
            Ok(link) => self.show_notice(format!("Link copied: {}", link), false),
            Err(err) => {
                tracing::warn!(error = %err, "Share failed");
                self.show_notice(err, true);
            }
        }
    }

    // -- Collection prompt ------------------------------------------------------

    pub fn open_prompt(&mut self) {
        dispatch_mvi!(self, prompt, PromptReducer, PromptIntent::Open);
    }

    pub fn close_prompt(&mut self) {
        dispatch_mvi!(self, prompt, PromptReducer, PromptIntent::Close);
    }

    pub fn prompt_insert(&mut self, ch: char) {
        dispatch_mvi!(self, prompt, PromptReducer, PromptIntent::Insert(ch));
    }

    pub fn prompt_backspace(&mut self) {
        dispatch_mvi!(self, prompt, PromptReducer, PromptIntent::Backspace);
    }

    /// Opens the gallery for the typed identifier.
    pub fn submit_prompt(&mut self) {
        let Some(value) = self.prompt.value() else {
            return;
        };
        match CollectionId::parse(value) {
            Some(id) => {
                dispatch_mvi!(self, prompt, PromptReducer, PromptIntent::Close);
                self.navigate(Route::Gallery(id));
            }
            None => {
                dispatch_mvi!(self, prompt, PromptReducer, PromptIntent::Reject);
            }
        }
    }

    // -- Terminal events --------------------------------------------------------

    pub fn on_tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        if let Some(notice) = &mut self.notice {
            notice.ticks_left = notice.ticks_left.saturating_sub(1);
            if notice.ticks_left == 0 {
                self.notice = None;
            }
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    fn show_notice(&mut self, text: String, is_error: bool) {
        self.notice = Some(Notice {
            text,
            is_error,
            ticks_left: NOTICE_TICKS,
        });
    }

    /// Hands a command to the worker. Returns false when it was dropped.
    fn send(&self, command: UiCommand) -> bool {
        match self.commands.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Dropping UI command");
                false
            }
        }
    }
}

/// A refresh whose command never reached the worker fails right away, so
/// the screen can be retried instead of loading forever.
fn abandoned<T>(request: RequestId, message: &str) -> ResourceIntent<T> {
    ResourceIntent::Failed {
        request,
        message: message.to_string(),
    }
}

/// Turns a fetch result into an intent; failures are logged and replaced
/// by the fixed user-facing message.
fn resolve<T>(
    request: RequestId,
    result: Result<T, FetchError>,
    message: &str,
    what: &str,
) -> ResourceIntent<T> {
    match result {
        Ok(payload) => ResourceIntent::Resolved {
            request,
            payload,
            at: Local::now(),
        },
        Err(err) => {
            tracing::warn!(
                kind = err.kind().as_str(),
                error = %err,
                ?request,
                "Failed to load {}",
                what
            );
            ResourceIntent::Failed {
                request,
                message: message.to_string(),
            }
        }
    }
}
