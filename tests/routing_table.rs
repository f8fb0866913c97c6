//! In-process tests driving the bound axum router with tower `oneshot`.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::IntoResponse;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use versioned_router::{handler_fn, ApiConfig, EndpointConfig, VersionConfig};

fn echo(tag: &'static str) -> versioned_router::EndpointHandler {
    handler_fn(move |api_version, _req| async move {
        format!("{tag}:{api_version}").into_response()
    })
}

/// Three-version API exercising inheritance, override, deprecation and the
/// permissive error paths at once.
fn sample_router() -> Router {
    let config = ApiConfig::new()
        .version(
            VersionConfig::new("v1")
                .endpoint(EndpointConfig::get("/users").handler(echo("list-v1")))
                .endpoint(EndpointConfig::post("/users").handler(echo("create")))
                .endpoint(EndpointConfig::get("/legacy").handler(echo("legacy")).deprecated())
                .endpoint(EndpointConfig::get("/draft"))
                .endpoint(EndpointConfig::new("/stream", "SUBSCRIBE").handler(echo("stream"))),
        )
        .version(
            VersionConfig::new("v2").endpoint(EndpointConfig::get("/users").handler(echo("list-v2"))),
        )
        .version(VersionConfig::new("v3").inactive().endpoint(EndpointConfig::get("/ghost")))
        .version(VersionConfig::new("v4"));

    versioned_router::resolve_and_bind(&config)
}

async fn send(router: &Router, method: Method, path: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn own_routes_answer_under_their_version_prefix() {
    let router = sample_router();

    let (status, body) = send(&router, Method::GET, "/v1/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "list-v1:v1");

    let (status, body) = send(&router, Method::POST, "/v1/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "create:v1");
}

#[tokio::test]
async fn inherited_route_answers_with_the_new_version_argument() {
    let router = sample_router();

    // POST /users was never redeclared in v2; the inherited copy serves it
    // and the handler sees the version it was rebound to.
    let (status, body) = send(&router, Method::POST, "/v2/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "create:v2");
}

#[tokio::test]
async fn override_swaps_the_handler_and_the_old_version_keeps_its_own() {
    let router = sample_router();

    let (_, body) = send(&router, Method::GET, "/v2/users").await;
    assert_eq!(body, "list-v2:v2");

    let (_, body) = send(&router, Method::GET, "/v1/users").await;
    assert_eq!(body, "list-v1:v1");
}

#[tokio::test]
async fn deprecated_route_serves_its_version_only() {
    let router = sample_router();

    let (status, body) = send(&router, Method::GET, "/v1/legacy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "legacy:v1");

    let (status, _) = send(&router, Method::GET, "/v2/legacy").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn inactive_version_has_no_routes_and_the_next_one_inherits_past_it() {
    let router = sample_router();

    let (status, _) = send(&router, Method::GET, "/v3/ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&router, Method::GET, "/v3/users").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // v4 inherits the v2 table (v3 never entered the chain).
    let (status, body) = send(&router, Method::GET, "/v4/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "list-v2:v4");
}

#[tokio::test]
async fn handlerless_endpoint_responds_not_implemented() {
    let router = sample_router();

    let (status, _) = send(&router, Method::GET, "/v1/draft").await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);

    // Inherited into v2 unchanged: still declared, still unimplemented.
    let (status, _) = send(&router, Method::GET, "/v2/draft").await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn unrecognized_method_registers_no_route() {
    let router = sample_router();

    let (status, _) = send(&router, Method::GET, "/v1/stream").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_on_a_bound_path_is_method_not_allowed() {
    let router = sample_router();

    let (status, _) = send(&router, Method::DELETE, "/v1/users").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
