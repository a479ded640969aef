use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;
use support::{admin_token, login, request, send, test_app, ADMIN_EMAIL};

#[tokio::test]
async fn register_then_login_and_fetch_me() {
    let app = test_app().await;

    let (status, user) = send(
        &app,
        request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "username": "reader_1",
                "email": "reader@example.com",
                "password": "reading-is-fun"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["username"], "reader_1");
    assert_eq!(user["is_superuser"], false);
    assert!(user.get("password_hash").is_none());

    let tokens = login(&app, "reader@example.com", "reading-is-fun").await;
    assert_eq!(tokens["token_type"], "bearer");
    let access = tokens["access_token"].as_str().unwrap();

    let (status, me) = send(&app, request(Method::GET, "/api/auth/me", Some(access), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "reader@example.com");
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "username": "someone",
                "email": ADMIN_EMAIL.to_uppercase(),
                "password": "password-123"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Email already registered");

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "username": "admin",
                "email": "other@example.com",
                "password": "password-123"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Username already taken");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_registrations_keep_email_unique() {
    let app = test_app().await;

    let attempts: Vec<_> = (0..4)
        .map(|n| {
            let app = app.clone();
            tokio::spawn(async move {
                let req = request(
                    Method::POST,
                    "/api/auth/register",
                    None,
                    Some(json!({
                        "username": format!("racer_{n}"),
                        "email": "dup@example.com",
                        "password": "password-123"
                    })),
                );
                send(&app, req).await.0
            })
        })
        .collect();

    let mut statuses = Vec::new();
    for attempt in attempts {
        statuses.push(attempt.await.expect("join register task"));
    }
    let created = statuses.iter().filter(|s| **s == StatusCode::CREATED).count();
    let conflicts = statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count();
    assert_eq!(created, 1, "{statuses:?}");
    assert_eq!(conflicts, 3, "{statuses:?}");

    login(&app, "dup@example.com", "password-123").await;
}

#[tokio::test]
async fn invalid_registration_payload_is_rejected() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "username": "bad name",
                "email": "nope",
                "password": "short"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["errors"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": ADMIN_EMAIL, "password": "not-it" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn refresh_keeps_refresh_token_and_rejects_access_token() {
    let app = test_app().await;
    let tokens = login(&app, ADMIN_EMAIL, "admin123").await;
    let refresh_token = tokens["refresh_token"].as_str().unwrap();

    let (status, refreshed) = send(
        &app,
        request(
            Method::POST,
            "/api/auth/refresh",
            None,
            Some(json!({ "refresh_token": refresh_token })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(refreshed["refresh_token"], refresh_token);
    assert!(refreshed["access_token"].is_string());

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/auth/refresh",
            None,
            Some(json!({ "refresh_token": tokens["access_token"] })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_token_cannot_authenticate_requests() {
    let app = test_app().await;
    let tokens = login(&app, ADMIN_EMAIL, "admin123").await;
    let refresh_token = tokens["refresh_token"].as_str().unwrap();

    let (status, _) = send(
        &app,
        request(Method::GET, "/api/auth/me", Some(refresh_token), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_requires_a_token() {
    let app = test_app().await;
    let (status, _) = send(&app, request(Method::POST, "/api/auth/logout", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = admin_token(&app).await;
    let (status, body) =
        send(&app, request(Method::POST, "/api/auth/logout", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully logged out");
}
