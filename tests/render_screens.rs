//! Both screens drawn into a `TestBackend`.

mod common;

use common::{collection, drain, movie, qr_png, test_app};
use movieqr::api::{FetchError, Movie, QrCode};
use movieqr::ui::app::{App, Route, UiCommand, MOVIES_FAILED_MESSAGE, QR_FAILED_MESSAGE};
use movieqr::ui::qr_image::QrBitmap;
use movieqr::ui::render::{draw, PROMPT_INVALID};
use movieqr::ui::resource::RequestId;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::Receiver;

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn last_request(rx: &mut Receiver<UiCommand>) -> RequestId {
    drain(rx)
        .into_iter()
        .filter_map(|command| match command {
            UiCommand::FetchQr { request }
            | UiCommand::FetchQrImage { request, .. }
            | UiCommand::FetchMovies { request, .. } => Some(request),
            _ => None,
        })
        .last()
        .expect("a fetch was issued")
}

fn gallery_with(result: Result<Vec<Movie>, FetchError>) -> App {
    let (mut app, mut rx) = test_app();
    app.on_resize(100, 40);
    app.mount(Route::Gallery(collection("42")));
    let request = last_request(&mut rx);
    app.on_movies_fetched(request, collection("42"), result);
    app
}

#[test]
fn gallery_loading_shows_skeletons() {
    let (mut app, _rx) = test_app();
    app.mount(Route::Gallery(collection("42")));

    let screen = render(&app);
    assert!(screen.contains("Movie Gallery"));
    assert!(screen.contains("Collection #42"));
    assert!(screen.contains('░'));
    assert!(!screen.contains("No Movies Found"));
}

#[test]
fn gallery_empty_collection() {
    let screen = render(&gallery_with(Ok(Vec::new())));

    assert!(screen.contains("No Movies Found"));
    assert!(screen.contains("Generate New QR Code"));
    assert!(!screen.contains("Showing"));
}

#[test]
fn gallery_lists_movies() {
    let screen = render(&gallery_with(Ok(vec![movie("X")])));

    assert!(screen.contains("│X "));
    assert!(screen.contains("8.5"));
    assert!(screen.contains("#1"));
    assert!(screen.contains("Showing 1 movie in this collection"));
    assert!(screen.contains("Back to QR Generator"));
    assert!(screen.contains("Share"));
}

#[test]
fn gallery_draws_one_card_per_movie() {
    let movies = vec![movie("Heat"), movie("Alien"), movie("Brazil")];
    let screen = render(&gallery_with(Ok(movies)));

    for badge in [" #1 ", " #2 ", " #3 "] {
        assert!(screen.contains(badge), "missing {badge}");
    }
    assert!(!screen.contains(" #4 "));
    assert!(screen.contains("Showing 3 movies in this collection"));
}

#[test]
fn gallery_failure_offers_retry() {
    let err = FetchError::Status {
        url: "http://localhost:8000/api/movies/42".to_string(),
        status: 502,
    };
    let screen = render(&gallery_with(Err(err)));

    assert!(screen.contains(MOVIES_FAILED_MESSAGE));
    assert!(screen.contains("Retry"));
}

#[test]
fn qr_loading_state() {
    let (mut app, _rx) = test_app();
    app.mount(Route::Qr);

    let screen = render(&app);
    assert!(screen.contains("MovieQR"));
    assert!(screen.contains("QR Generator"));
    assert!(screen.contains("Movie Discovery"));
    assert!(screen.contains("Auto-refreshes every 10 seconds"));
    assert!(screen.contains("Generating QR Code..."));
    assert!(screen.contains("Refreshing..."));
    assert!(!screen.contains("Last updated"));
}

#[test]
fn qr_failure_offers_try_again() {
    let (mut app, mut rx) = test_app();
    app.mount(Route::Qr);
    let request = last_request(&mut rx);
    app.on_qr_fetched(request, Err(FetchError::Image("bad".to_string())));

    let screen = render(&app);
    assert!(screen.contains(QR_FAILED_MESSAGE));
    assert!(screen.contains("Try Again"));
    assert!(screen.contains("Generate New QR Code"));
}

#[test]
fn qr_code_is_drawn_with_half_blocks() {
    let (mut app, mut rx) = test_app();
    app.mount(Route::Qr);
    let request = last_request(&mut rx);
    app.on_qr_fetched(
        request,
        Ok(QrCode {
            url: "https://cdn.example/a.png".to_string(),
        }),
    );
    let image_request = last_request(&mut rx);
    app.on_qr_image_fetched(image_request, QrBitmap::decode(&qr_png()));

    let screen = render(&app);
    assert!(screen.contains('▀'));
    assert!(screen.contains("Last updated: "));
    assert!(screen.contains("Generate New QR Code"));
    assert!(screen.contains("How to Scan"));
    assert!(screen.contains("Point & Scan"));
}

#[test]
fn qr_screen_lists_the_scan_steps() {
    let (mut app, _rx) = test_app();
    app.mount(Route::Qr);

    let screen = render(&app);
    for text in [
        "Open Camera",
        "Launch your phone's camera app",
        "Aim at the QR code above",
        "Discover Movies",
        "Tap to open the movie gallery",
    ] {
        assert!(screen.contains(text), "missing {text}");
    }
}

#[test]
fn undecodable_qr_image_falls_back_to_the_link() {
    let (mut app, mut rx) = test_app();
    app.mount(Route::Qr);
    let request = last_request(&mut rx);
    app.on_qr_fetched(
        request,
        Ok(QrCode {
            url: "https://cdn.example/a.png".to_string(),
        }),
    );
    let image_request = last_request(&mut rx);
    app.on_qr_image_fetched(image_request, Err(FetchError::Image("bad".to_string())));

    let screen = render(&app);
    assert!(screen.contains("https://cdn.example/a.png"));
    assert!(!screen.contains('▀'));
}

#[test]
fn prompt_shows_validation_error() {
    let (mut app, _rx) = test_app();
    app.mount(Route::Qr);
    app.open_prompt();
    app.submit_prompt();

    let screen = render(&app);
    assert!(screen.contains("Open Collection"));
    assert!(screen.contains(PROMPT_INVALID));
}
