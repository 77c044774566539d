//! HTTP transport: maps HTTP requests onto [`RequestRouter::dispatch`].
//!
//! Uses axum with a single fallback handler, since all routing decisions
//! (including the 404 for paths outside the resource prefix) belong to the
//! router. This layer buffers the body, adds `Content-Type: application/json`
//! and the `Location` header, and applies CORS and request tracing.
//!
//! ## Example
//!
//! ```ignore
//! use game_catalog::{config::ServerConfig, server};
//!
//! let config = ServerConfig::default();
//! let router = server::from_config(&config)?;
//! server::serve(router, &config.bind_addr()).await?;
//! ```

use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, Method as HttpMethod, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::api::CatalogApi;
use crate::config::ServerConfig;
use crate::error::{CatalogError, Result};
use crate::router::{ApiRequest, ApiResponse, Method, RequestRouter};
use crate::store::fs::FileStore;
use crate::store::CollectionStore;

/// Upper bound on a buffered request body.
pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Open the file store named by `config` and wire it into a router.
pub fn from_config(config: &ServerConfig) -> Result<Arc<RequestRouter<FileStore>>> {
    let store = FileStore::open(&config.db_file)?;
    Ok(Arc::new(RequestRouter::new(
        CatalogApi::new(store),
        config.prefix.clone(),
    )))
}

/// Build the axum app around `router`.
pub fn app<S: CollectionStore + 'static>(router: Arc<RequestRouter<S>>) -> Router {
    Router::new()
        .fallback(handle::<S>)
        .with_state(router)
        .layer(cors_layer())
        // Outside CORS so preflight answers are JSON-typed too
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Serve `router` at `addr` (e.g. `"127.0.0.1:3001"`) until SIGINT/SIGTERM.
pub async fn serve<S: CollectionStore + 'static>(
    router: Arc<RequestRouter<S>>,
    addr: &str,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        addr = %listener.local_addr()?,
        prefix = router.prefix(),
        "game catalog server listening"
    );
    axum::serve(listener, app(router))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            HttpMethod::GET,
            HttpMethod::POST,
            HttpMethod::PATCH,
            HttpMethod::DELETE,
            HttpMethod::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::LOCATION])
}

async fn handle<S: CollectionStore + 'static>(
    State(router): State<Arc<RequestRouter<S>>>,
    request: Request,
) -> Response {
    let (parts, body) = request.into_parts();
    let method = parts
        .method
        .as_str()
        .parse::<Method>()
        .unwrap_or(Method::Other);
    let target = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    let body = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes.to_vec(),
        Err(e) => {
            return into_http(ApiResponse::from_error(CatalogError::Store(format!(
                "failed to read request body: {e}"
            ))))
        }
    };
    let api_request = ApiRequest::new(method, target).with_body(body);

    // Store I/O is blocking
    match tokio::task::spawn_blocking(move || router.dispatch(&api_request)).await {
        Ok(response) => into_http(response),
        Err(e) => {
            error!(error = %e, "dispatch task failed");
            into_http(ApiResponse::from_error(CatalogError::Store(e.to_string())))
        }
    }
}

fn into_http(response: ApiResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut http = (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body_bytes(),
    )
        .into_response();
    if let Some(location) = response.location.as_deref() {
        match HeaderValue::from_str(location) {
            Ok(value) => {
                http.headers_mut().insert(header::LOCATION, value);
            }
            Err(e) => error!(error = %e, location, "invalid Location header"),
        }
    }
    http
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("shutting down");
}
