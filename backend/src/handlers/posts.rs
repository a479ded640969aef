use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use crate::{
    error::AppError,
    models::{
        post::{
            CreatePostRequest, Post, PostDetailResponse, PostListQuery, PostSummary,
            PostViewResponse, TitleSearchQuery, UpdatePostRequest,
        },
        Pagination,
    },
    repositories::not_found,
    services::{
        authoring::{apply_post_update, new_post},
        search::{
            categories, filter_posts, paginate, post_neighbours, search_titles,
            sort_posts_newest_first, PostFilter,
        },
    },
    state::AppState,
    validation::validate_payload,
};

/// Published posts, newest first.
async fn published_posts(state: &AppState) -> Result<Vec<Post>, AppError> {
    let mut posts: Vec<Post> = state
        .posts
        .find_all()
        .await?
        .into_iter()
        .filter(Post::is_published)
        .collect();
    sort_posts_newest_first(&mut posts);
    Ok(posts)
}

pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<PostListQuery>,
) -> Result<Json<Vec<PostSummary>>, AppError> {
    let posts = published_posts(&state).await?;
    let filtered = filter_posts(
        &posts,
        &PostFilter {
            category: query.category,
            search: query.search,
        },
    );
    let page = paginate(filtered, Pagination::new(query.skip, query.limit));
    Ok(Json(page.iter().map(PostSummary::from).collect()))
}

pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let posts = published_posts(&state).await?;
    Ok(Json(categories(&posts)))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PostDetailResponse>, AppError> {
    let posts = published_posts(&state).await?;
    let (previous, next) = post_neighbours(&posts, id).ok_or_else(not_found::<Post>)?;
    let post = posts
        .into_iter()
        .find(|post| post.id == id)
        .ok_or_else(not_found::<Post>)?;

    Ok(Json(PostDetailResponse {
        post,
        previous,
        next,
    }))
}

pub async fn record_view(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PostViewResponse>, AppError> {
    let post = state
        .posts
        .update(
            id,
            Box::new(|post: &mut Post| {
                if !post.is_published() {
                    return Err(not_found::<Post>());
                }
                post.view_count = Some(post.views() + 1);
                Ok(())
            }),
        )
        .await?;

    Ok(Json(PostViewResponse {
        id: post.id,
        view_count: post.views(),
    }))
}

pub async fn admin_list_posts(
    State(state): State<AppState>,
    Query(query): Query<TitleSearchQuery>,
) -> Result<Json<Vec<PostSummary>>, AppError> {
    let mut posts = state.posts.find_all().await?;
    sort_posts_newest_first(&mut posts);
    let posts = search_titles(posts, query.search.as_deref(), |post| post.title.as_str());
    Ok(Json(posts.iter().map(PostSummary::from).collect()))
}

pub async fn admin_get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, AppError> {
    Ok(Json(state.posts.find_by_id(id).await?))
}

pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    validate_payload(&payload)?;
    let post = state
        .posts
        .create(new_post(payload, Utc::now().date_naive()))
        .await?;
    tracing::info!(post_id = post.id, title = %post.title, "created post");
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<Post>, AppError> {
    validate_payload(&payload)?;
    let post = state
        .posts
        .update(
            id,
            Box::new(move |post: &mut Post| {
                apply_post_update(post, payload);
                Ok(())
            }),
        )
        .await?;
    tracing::info!(post_id = post.id, "updated post");
    Ok(Json(post))
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.posts.delete(id).await?;
    tracing::info!(post_id = id, "deleted post");
    Ok(StatusCode::NO_CONTENT)
}
