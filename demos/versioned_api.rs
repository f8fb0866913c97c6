use axum::response::IntoResponse;
use axum::Json;
use std::net::SocketAddr;
use versioned_router::{handler_fn, ApiConfig, EndpointConfig, VersionConfig};

#[tokio::main]
async fn main() {
    versioned_router::diagnostics::init_console_logging();

    let config = ApiConfig::new()
        .version(
            VersionConfig::new("v1")
                .endpoint(EndpointConfig::get("/users").handler(handler_fn(
                    |api_version, _req| async move {
                        Json(serde_json::json!({
                            "version": api_version,
                            "users": ["ada", "grace"],
                        }))
                        .into_response()
                    },
                )))
                // Served under /v1, not inherited by v2.
                .endpoint(EndpointConfig::get("/ping").deprecated().handler(handler_fn(
                    |_, _| async move { "pong".into_response() },
                ))),
        )
        .version(
            // Inherits /users; replaces its handler with a richer payload.
            VersionConfig::new("v2").endpoint(EndpointConfig::get("/users").handler(handler_fn(
                |api_version, _req| async move {
                    Json(serde_json::json!({
                        "version": api_version,
                        "users": [
                            { "name": "ada", "admin": true },
                            { "name": "grace", "admin": false },
                        ],
                    }))
                    .into_response()
                },
            ))),
        );

    let app = versioned_router::resolve_and_bind_with_logging(&config, true);

    let addr = SocketAddr::from(([127, 0, 0, 1], 8080));
    println!("Versioned API listening on http://{} (try /v1/users, /v2/users, /v1/ping)", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
