use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

mod support;
use support::{admin_token, request, send, test_app};

fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .expect("array")
        .iter()
        .map(|item| item["id"].as_i64().expect("id"))
        .collect()
}

#[tokio::test]
async fn list_supports_named_filters() {
    let app = test_app().await;

    let (status, all) = send(&app, request(Method::GET, "/api/projects", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&all), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(all[0]["status"], "in-progress");
    assert_eq!(all[0]["techStack"][0], "React");

    let (_, featured) = send(
        &app,
        request(Method::GET, "/api/projects?filter=featured", None, None),
    )
    .await;
    assert_eq!(ids(&featured), vec![1, 2]);

    let (_, in_progress) = send(
        &app,
        request(Method::GET, "/api/projects?filter=in-progress", None, None),
    )
    .await;
    assert_eq!(ids(&in_progress), vec![1]);

    let (_, combined) = send(
        &app,
        request(
            Method::GET,
            "/api/projects?status=completed&featured=false&limit=2",
            None,
            None,
        ),
    )
    .await;
    assert_eq!(ids(&combined), vec![3, 4]);
}

#[tokio::test]
async fn unknown_filter_is_a_bad_request() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        request(Method::GET, "/api/projects?filter=paused", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn detail_and_missing_project() {
    let app = test_app().await;
    let (status, body) = send(&app, request(Method::GET, "/api/projects/2", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "E-Commerce Platform");
    assert_eq!(body["teamSize"], 4);

    let (status, body) = send(&app, request(Method::GET, "/api/projects/42", None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Project not found");
}

#[tokio::test]
async fn admin_project_lifecycle() {
    let app = test_app().await;
    let token = admin_token(&app).await;

    let (status, created) = send(
        &app,
        request(
            Method::POST,
            "/api/admin/projects",
            Some(&token),
            Some(json!({
                "title": "Devlog",
                "description": "Blog and portfolio in Rust",
                "techStack": ["Rust", "Leptos", "Rust"],
                "role": "Solo Developer",
                "teamSize": 1,
                "githubUrl": "https://github.com/example/devlog",
                "startDate": "2025-11",
                "status": "in-progress",
                "featured": true
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(created["id"], 7);
    assert_eq!(created["techStack"], json!(["Rust", "Leptos"]));

    let (status, body) = send(
        &app,
        request(
            Method::PUT,
            "/api/admin/projects/7",
            Some(&token),
            Some(json!({ "endDate": "2025-01" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "endDate must not be before startDate");

    let (status, updated) = send(
        &app,
        request(
            Method::PUT,
            "/api/admin/projects/7",
            Some(&token),
            Some(json!({ "endDate": "2026-02", "status": "completed" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "completed");
    assert_eq!(updated["endDate"], "2026-02");

    let (status, reopened) = send(
        &app,
        request(
            Method::PUT,
            "/api/admin/projects/7",
            Some(&token),
            Some(json!({ "endDate": "", "status": "in-progress" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{reopened}");
    assert!(reopened["endDate"].is_null());

    let (_, found) = send(
        &app,
        request(Method::GET, "/api/admin/projects?search=devlog", Some(&token), None),
    )
    .await;
    assert_eq!(ids(&found), vec![7]);

    let (status, _) = send(
        &app,
        request(Method::DELETE, "/api/admin/projects/7", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, request(Method::GET, "/api/projects/7", None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_clears_optional_fields() {
    let app = test_app().await;
    let token = admin_token(&app).await;

    let (_, before) = send(&app, request(Method::GET, "/api/projects/1", None, None)).await;
    assert!(before["githubUrl"].is_string());

    let (status, body) = send(
        &app,
        request(
            Method::PUT,
            "/api/admin/projects/1",
            Some(&token),
            Some(json!({ "githubUrl": "not a url" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, cleared) = send(
        &app,
        request(
            Method::PUT,
            "/api/admin/projects/1",
            Some(&token),
            Some(json!({
                "githubUrl": "",
                "liveUrl": "",
                "detailContent": "",
                "teamSize": null
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{cleared}");
    assert!(cleared["githubUrl"].is_null());
    assert!(cleared["liveUrl"].is_null());
    assert!(cleared["detailContent"].is_null());
    assert!(cleared["teamSize"].is_null());
    assert_eq!(cleared["title"], before["title"]);

    let (status, kept) = send(
        &app,
        request(
            Method::PUT,
            "/api/admin/projects/1",
            Some(&token),
            Some(json!({ "teamSize": 3 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(kept["teamSize"], 3);
    assert!(kept["githubUrl"].is_null());
}

#[tokio::test]
async fn create_rejects_inverted_dates() {
    let app = test_app().await;
    let token = admin_token(&app).await;
    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/admin/projects",
            Some(&token),
            Some(json!({
                "title": "Backwards",
                "description": "Ends before it starts",
                "role": "Dev",
                "startDate": "2025-06",
                "endDate": "2025-05-31",
                "status": "completed"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
