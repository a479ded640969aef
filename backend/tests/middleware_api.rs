use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

mod support;
use support::{request, test_app};

#[tokio::test]
async fn request_id_is_generated_when_absent() {
    let app = test_app().await;
    let response = app
        .oneshot(request(Method::GET, "/api/posts", None, None))
        .await
        .unwrap();
    let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn request_id_echoes_client_value_on_errors_too() {
    let app = test_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/posts/999")
                .header("x-correlation-id", "corr-req-456")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers().get("x-request-id").unwrap(), "corr-req-456");

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let app = test_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/admin/posts")
                .header(header::ORIGIN, "http://localhost:8080")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn openapi_document_lists_routes_and_bearer_scheme() {
    let app = test_app().await;
    let response = app
        .oneshot(request(Method::GET, "/api/docs/openapi.json", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();

    let paths = json["paths"].as_object().expect("paths object");
    for path in ["/api/posts", "/api/search", "/api/admin/posts/{id}", "/api/auth/login"] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert_eq!(json["components"]["securitySchemes"]["BearerAuth"]["scheme"], "bearer");
}
