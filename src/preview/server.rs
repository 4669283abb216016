//! Preview server implementation.
//!
//! Routes:
//!
//! - `GET /` page shell showing every region
//! - `GET /regions` JSON list of region snapshots
//! - `GET /regions/:name` latest HTML fragment of one region
//! - `GET /ws` websocket stream of region updates

use std::net::{Ipv4Addr, SocketAddr};

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use super::html::PREVIEW_HTML;
use super::PreviewHub;

/// Port used when none is configured.
pub const DEFAULT_PREVIEW_PORT: u16 = 3031;

/// Address the preview server binds to for `port`.
pub fn preview_addr(port: u16) -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, port))
}

/// Build the preview router over `hub`.
pub fn preview_router(hub: PreviewHub) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(page_handler))
        .route("/regions", get(regions_handler))
        .route("/regions/:name", get(region_handler))
        .route("/ws", get(websocket_handler))
        .layer(cors)
        .with_state(hub)
}

/// Start the preview server on the default loopback port.
pub async fn start_preview_server(
    hub: PreviewHub,
) -> color_eyre::Result<(JoinHandle<()>, SocketAddr)> {
    start_preview_server_on(preview_addr(DEFAULT_PREVIEW_PORT), hub).await
}

/// Start the preview server on `addr`.
///
/// Returns the server task and the address actually bound, which differs
/// from `addr` when port 0 was requested.
pub async fn start_preview_server_on(
    addr: SocketAddr,
    hub: PreviewHub,
) -> color_eyre::Result<(JoinHandle<()>, SocketAddr)> {
    let app = preview_router(hub);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tracing::info!("Preview server listening on http://{}", actual_addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Preview server error: {}", e);
        }
    });

    Ok((handle, actual_addr))
}

async fn page_handler() -> impl IntoResponse {
    Html(PREVIEW_HTML)
}

async fn regions_handler(State(hub): State<PreviewHub>) -> impl IntoResponse {
    Json(hub.snapshots())
}

async fn region_handler(Path(name): Path<String>, State(hub): State<PreviewHub>) -> Response {
    match hub.snapshot(&name) {
        Some(snapshot) => Html(snapshot.html).into_response(),
        None => (StatusCode::NOT_FOUND, format!("Unknown region: {}", name)).into_response(),
    }
}

async fn websocket_handler(ws: WebSocketUpgrade, State(hub): State<PreviewHub>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, hub))
}

async fn handle_websocket(socket: WebSocket, hub: PreviewHub) {
    let (mut sender, mut receiver) = socket.split();
    let mut updates = hub.subscribe();

    let send_task = tokio::spawn(async move {
        loop {
            match updates.recv().await {
                Ok(snapshot) => match serde_json::to_string(&snapshot) {
                    Ok(json) => {
                        if sender.send(Message::Text(json)).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::warn!("Failed to serialize region update: {}", e),
                },
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    // The page refetches /regions when it sees a gap.
                    tracing::warn!("Preview client lagged, missed {} updates", n);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Close(_)) | Err(_) => break,
            _ => {}
        }
    }

    send_task.abort();
}
