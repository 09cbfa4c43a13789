// One-time server bootstrap and WebSocket client helpers shared by the integration tests.
// Each test binary uses a different subset of these.
#![allow(dead_code)]

use futures_util::StreamExt;
use serde_json::Value;
use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

static SERVER_URL: OnceLock<String> = OnceLock::new();
static SERVER_READY: OnceLock<()> = OnceLock::new();

/// Starts the server on an ephemeral port once and returns its `ws://` endpoint.
pub fn ensure_server() -> &'static str {
    SERVER_READY.get_or_init(|| {
        // Short ticks keep the tests fast; set before the server reads its config.
        // SAFETY: runs once, before the server thread exists.
        unsafe {
            std::env::set_var("TICK_INTERVAL_MS", "20");
        }

        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // The server outlives individual `#[tokio::test]` runtimes on its own OS thread.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("ws://{addr}/ws"));
                territory_server::run(listener).await.expect("server failed");
            });
        });
        wait_for_server_url_and_readiness(published_url);
    });

    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

fn wait_for_server_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    let url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVER_URL.set(url.clone());

    let addr = url
        .strip_prefix("ws://")
        .and_then(|rest| rest.strip_suffix("/ws"))
        .expect("url should be ws://host:port/ws");

    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("server did not become ready in time");
}

pub type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub async fn next_json(ws: &mut Client) -> Value {
    loop {
        let msg = tokio::time::timeout(Duration::from_secs(5), ws.next())
            .await
            .expect("message before timeout")
            .expect("stream still open")
            .expect("valid frame");
        if let Message::Text(text) = msg {
            return serde_json::from_str(text.as_str()).expect("server sends json");
        }
    }
}

/// Reads updates until one lists `session_id` on the board.
pub async fn wait_for_spawn(ws: &mut Client, session_id: &str) -> (Value, Value) {
    for _ in 0..50 {
        let update = next_json(ws).await;
        assert_eq!(update["type"], "WorldUpdate");
        let me = update["data"]["players"]
            .as_array()
            .expect("players array")
            .iter()
            .find(|p| p["session_id"] == session_id)
            .cloned();
        if let Some(me) = me {
            if me["tile"].as_i64().unwrap_or(-1) >= 0 {
                return (update, me);
            }
        }
    }
    panic!("player never appeared on the board");
}

pub async fn connect_with_identity() -> (Client, String) {
    let url = ensure_server();
    let (mut ws, _) = connect_async(url).await.expect("websocket handshake");

    let identity = next_json(&mut ws).await;
    assert_eq!(identity["type"], "Identity");
    let session_id = identity["data"]["player_id"]
        .as_str()
        .expect("identity carries a string id")
        .to_string();
    (ws, session_id)
}
