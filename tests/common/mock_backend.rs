//! Scripted MovieQR backend: replies are served in the order requests arrive.

use axum::extract::{Request, State};
use axum::http::{header, Method, StatusCode};
use axum::response::IntoResponse;
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};

/// One request as the backend saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
}

/// A canned reply, optionally held back to simulate a slow backend.
#[derive(Debug, Clone)]
pub struct Reply {
    status: StatusCode,
    content_type: String,
    body: Vec<u8>,
    delay: Duration,
}

impl Reply {
    pub fn json(body: &str) -> Self {
        Self::bytes("application/json", body.as_bytes().to_vec())
    }

    pub fn error(status: u16, message: &str) -> Self {
        let body = serde_json::json!({ "error": message }).to_string();
        Self {
            status: StatusCode::from_u16(status).expect("valid status code"),
            ..Self::json(&body)
        }
    }

    pub fn bytes(content_type: &str, body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: content_type.to_string(),
            body,
            delay: Duration::ZERO,
        }
    }

    /// Holds the reply back for `delay` after the request arrives.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone, Default)]
struct Script {
    seen: Arc<Mutex<Vec<Recorded>>>,
    replies: Arc<Mutex<VecDeque<Reply>>>,
}

pub struct MockBackend {
    addr: SocketAddr,
    script: Script,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let script = Script::default();
        let router = Router::new().fallback(serve_next).with_state(script.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");
        let (shutdown, stopped) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = stopped.await;
                })
                .await;
        });

        Self {
            addr,
            script,
            shutdown: Some(shutdown),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn enqueue(&self, reply: Reply) {
        self.script.replies.lock().await.push_back(reply);
    }

    pub async fn requests(&self) -> Vec<Recorded> {
        self.script.seen.lock().await.clone()
    }

    pub async fn paths(&self) -> Vec<String> {
        self.requests()
            .await
            .into_iter()
            .map(|request| request.path)
            .collect()
    }

    /// Waits until at least `count` requests have arrived.
    pub async fn wait_for_requests(&self, count: usize) {
        for _ in 0..400 {
            if self.script.seen.lock().await.len() >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("mock backend never saw {count} request(s)");
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

async fn serve_next(State(script): State<Script>, request: Request) -> impl IntoResponse {
    script.seen.lock().await.push(Recorded {
        method: request.method().clone(),
        path: request.uri().path().to_string(),
    });

    // The reply is claimed on arrival, so a delayed reply never reorders the queue.
    let reply = script.replies.lock().await.pop_front();
    let Some(reply) = reply else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain".to_string())],
            b"no reply scripted".to_vec(),
        );
    };
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }
    (
        reply.status,
        [(header::CONTENT_TYPE, reply.content_type)],
        reply.body,
    )
}
