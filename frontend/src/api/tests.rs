#![cfg(not(coverage))]

use super::*;
use serde_json::json;

fn post_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "title": "React 18 Concurrent Features",
        "excerpt": "What changed in rendering",
        "coverImage": "https://images.example.com/react.png",
        "category": "React",
        "tags": ["React", "Frontend"],
        "createdAt": "2025-10-10",
        "readTime": 8,
        "viewCount": 1234
    })
}

#[test]
fn post_list_item_parses_without_content() {
    let post: Post = serde_json::from_value(post_json(1)).unwrap();
    assert!(post.content.is_none());
    assert!(post.is_published());
    assert_eq!(post.created_at.to_string(), "2025-10-10");
    assert_eq!(post.view_count, Some(1234));
}

#[test]
fn post_detail_parses_neighbour_links() {
    let detail: PostDetail = serde_json::from_value(json!({
        "post": post_json(2),
        "previous": { "id": 1, "title": "Newer" },
        "next": null
    }))
    .unwrap();
    assert_eq!(detail.previous.map(|link| link.id), Some(1));
    assert!(detail.next.is_none());
}

#[test]
fn project_status_uses_kebab_case() {
    let project: Project = serde_json::from_value(json!({
        "id": 1,
        "title": "Tech Blog Platform",
        "description": "Blog",
        "thumbnail": "",
        "techStack": ["React", "FastAPI"],
        "role": "Full Stack",
        "startDate": "2025-10",
        "status": "in-progress",
        "featured": true
    }))
    .unwrap();
    assert_eq!(project.status, ProjectStatus::InProgress);
    assert_eq!(project.period(), "2025-10 ~ present");
    assert_eq!(ProjectStatus::parse("archived"), Some(ProjectStatus::Archived));
    assert_eq!(ProjectStatus::parse("paused"), None);
}

#[test]
fn project_payload_omits_unset_text_and_nulls_team_size() {
    let payload = ProjectPayload {
        title: "Devlog".into(),
        status: ProjectStatus::Completed,
        ..ProjectPayload::default()
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value.get("endDate").is_none());
    assert!(value.get("githubUrl").is_none());
    assert!(value["teamSize"].is_null());
    assert!(value.get("teamSize").is_some());
    assert_eq!(value["status"], "completed");
    assert_eq!(value["techStack"], json!([]));
}

#[test]
fn search_result_keeps_kind_specific_fields() {
    let hit: SearchResult = serde_json::from_value(json!({
        "kind": "project",
        "id": 5,
        "title": "Weather Dashboard",
        "description": "Forecasts",
        "url": "/projects/5",
        "techStack": ["Vue"],
        "date": "2024-10"
    }))
    .unwrap();
    assert_eq!(hit.kind, SearchKind::Project);
    assert!(hit.category.is_none());
    assert_eq!(hit.tech_stack.unwrap(), vec!["Vue".to_string()]);
}

#[test]
fn api_error_parses_server_envelope() {
    let error: ApiError = serde_json::from_value(json!({
        "error": "Post not found",
        "code": "NOT_FOUND"
    }))
    .unwrap();
    assert!(error.is_not_found());
    assert_eq!(error.to_string(), "Post not found");
}

#[test]
fn post_query_skips_blank_filters() {
    let query = PostQuery {
        category: Some("Backend".into()),
        search: Some("  ".into()),
        skip: Some(0),
        limit: Some(3),
    };
    assert_eq!(
        query.to_pairs(),
        vec![("category", "Backend".to_string()), ("limit", "3".to_string())]
    );
    assert!(posts::search_pairs(Some(" ")).is_empty());
}

#[test]
fn project_query_drops_all_and_sends_offsets() {
    let query = ProjectQuery {
        filter: Some("All".into()),
        skip: Some(100),
        limit: Some(PAGE_LIMIT),
    };
    assert_eq!(
        query.to_pairs(),
        vec![("skip", "100".to_string()), ("limit", "100".to_string())]
    );

    let featured = ProjectQuery {
        filter: Some("featured".into()),
        ..ProjectQuery::default()
    };
    assert_eq!(featured.to_pairs(), vec![("filter", "featured".to_string())]);
}

fn fake_pages(total: usize) -> impl FnMut(usize) -> std::future::Ready<Result<Vec<usize>, ApiError>> {
    move |skip| {
        let end = (skip + PAGE_LIMIT).min(total);
        std::future::ready(Ok((skip.min(end)..end).collect()))
    }
}

#[tokio::test]
async fn collect_pages_reads_past_the_first_page() {
    let items = collect_pages(fake_pages(230)).await.unwrap();
    assert_eq!(items.len(), 230);
    assert_eq!(items.first(), Some(&0));
    assert_eq!(items.last(), Some(&229));
}

#[tokio::test]
async fn collect_pages_stops_on_short_or_empty_page() {
    let mut offsets = Vec::new();
    let mut pages = fake_pages(200);
    let items = collect_pages(|skip| {
        offsets.push(skip);
        pages(skip)
    })
    .await
    .unwrap();
    assert_eq!(items.len(), 200);
    assert_eq!(offsets, vec![0, 100, 200]);

    assert!(collect_pages(fake_pages(0)).await.unwrap().is_empty());
}

#[tokio::test]
async fn collect_pages_stops_at_the_first_error() {
    let mut calls = 0;
    let result: Result<Vec<usize>, ApiError> = collect_pages(|_| {
        calls += 1;
        std::future::ready(Err(ApiError::new("HTTP_500", "boom")))
    })
    .await;
    assert_eq!(result.unwrap_err().code, "HTTP_500");
    assert_eq!(calls, 1);
}

#[tokio::test]
async fn unreachable_server_maps_to_network_error() {
    let api = ApiClient::new_with_base_url("http://127.0.0.1:9/api");
    let error = api.list_posts(&PostQuery::default()).await.unwrap_err();
    assert_eq!(error.code, NETWORK_ERROR);
}

#[tokio::test]
async fn refresh_without_stored_token_skips_the_request() {
    crate::utils::storage::clear_tokens();
    let api = ApiClient::new_with_base_url("http://127.0.0.1:9/api");
    let error = api.refresh_token().await.unwrap_err();
    assert_eq!(error.code, UNKNOWN_ERROR);
    assert_eq!(error.error, "No refresh token");
}

#[tokio::test]
async fn failed_refresh_keeps_stored_tokens() {
    use crate::utils::storage;

    storage::store_tokens("old-access", "old-refresh").unwrap();
    let api = ApiClient::new_with_base_url("http://127.0.0.1:9/api");
    let error = api.refresh_token().await.unwrap_err();
    assert_eq!(error.code, NETWORK_ERROR);
    assert_eq!(storage::access_token().as_deref(), Some("old-access"));
    assert_eq!(storage::refresh_token().as_deref(), Some("old-refresh"));
    storage::clear_tokens();
}
