mod common;

use common::mock_backend::{MockBackend, Reply};
use common::{collection, qr_png};
use movieqr::api::{ApiClient, FetchError, FetchErrorKind};
use movieqr::ui::qr_image::QrBitmap;
use std::time::Duration;

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, Duration::from_secs(2), Duration::from_secs(1))
        .expect("client builds")
}

#[tokio::test]
async fn fetch_qr_reads_qr_code_url() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(Reply::json(
            r#"{"qrCodeUrl": "https://cdn.example/qr/abc.png", "extra": 1}"#,
        ))
        .await;

    let qr = client(&backend.base_url()).fetch_qr().await.unwrap();

    assert_eq!(qr.url, "https://cdn.example/qr/abc.png");
    let requests = backend.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/qr");
}

#[tokio::test]
async fn fetch_movies_uses_collection_id_verbatim() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(Reply::json(
            r#"{"movies": [
                {"title": "Heat", "image_url": "https://img.example/heat.jpg", "rating": 8.3, "year": 1995},
                {"title": "Alien", "image_url": "https://img.example/alien.jpg"}
            ]}"#,
        ))
        .await;

    let movies = client(&backend.base_url())
        .fetch_movies(&collection("42"))
        .await
        .unwrap();

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title, "Heat");
    assert_eq!(movies[0].rating, Some(8.3));
    assert_eq!(movies[1].rating, None);
    assert_eq!(backend.paths().await, vec!["/api/movies/42"]);
}

#[tokio::test]
async fn missing_movies_key_is_an_empty_collection() {
    let backend = MockBackend::start().await;
    backend.enqueue(Reply::json("{}")).await;

    let movies = client(&backend.base_url())
        .fetch_movies(&collection("7"))
        .await
        .unwrap();

    assert!(movies.is_empty());
}

#[tokio::test]
async fn server_error_is_a_network_failure() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(Reply::error(500, "boom"))
        .await;

    let err = client(&backend.base_url()).fetch_qr().await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 500, .. }), "{err:?}");
    assert_eq!(err.kind(), FetchErrorKind::Network);
}

#[tokio::test]
async fn malformed_body_is_a_parse_failure() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(Reply::json("<html>not json</html>"))
        .await;

    let err = client(&backend.base_url())
        .fetch_movies(&collection("1"))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Parse { .. }), "{err:?}");
    assert_eq!(err.kind(), FetchErrorKind::Parse);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_failure() {
    // Bind then drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let err = client(&format!("http://127.0.0.1:{}", port))
        .fetch_qr()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport { .. }), "{err:?}");
    assert_eq!(err.kind(), FetchErrorKind::Network);
}

#[tokio::test]
async fn relative_image_url_resolves_against_base() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(Reply::bytes("image/png", qr_png()))
        .await;

    let bytes = client(&backend.base_url())
        .fetch_image("/static/qr.png")
        .await
        .unwrap();
    let bitmap = QrBitmap::decode(&bytes).unwrap();

    assert_eq!(backend.paths().await, vec!["/static/qr.png"]);
    assert_eq!((bitmap.width(), bitmap.height()), (25, 25));
    assert!(bitmap.is_dark(2, 2));
}
