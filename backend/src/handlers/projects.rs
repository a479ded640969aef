use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppError,
    models::{
        post::TitleSearchQuery,
        project::{
            CreateProjectRequest, Project, ProjectFilter, ProjectListQuery, ProjectStatus,
            UpdateProjectRequest,
        },
        Pagination,
    },
    services::{
        authoring::{apply_project_update, new_project},
        search::{filter_projects, paginate, search_titles},
    },
    state::AppState,
    validation::validate_payload,
};

fn bad_filter(err: impl std::fmt::Display) -> AppError {
    AppError::BadRequest(err.to_string())
}

/// `filter` wins when present; otherwise `status` and `featured` are ANDed.
fn select_projects(
    projects: Vec<Project>,
    query: &ProjectListQuery,
) -> Result<Vec<Project>, AppError> {
    if let Some(raw) = query.filter.as_deref() {
        let filter: ProjectFilter = raw.parse().map_err(bad_filter)?;
        return Ok(filter_projects(&projects, filter));
    }

    let status = query
        .status
        .as_deref()
        .map(str::parse::<ProjectStatus>)
        .transpose()
        .map_err(bad_filter)?;

    Ok(projects
        .into_iter()
        .filter(|project| status.map_or(true, |status| project.status == status))
        .filter(|project| {
            query
                .featured
                .map_or(true, |featured| project.featured == featured)
        })
        .collect())
}

pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectListQuery>,
) -> Result<Json<Vec<Project>>, AppError> {
    let projects = state.projects.find_all().await?;
    let selected = select_projects(projects, &query)?;
    Ok(Json(paginate(selected, Pagination::new(query.skip, query.limit))))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Project>, AppError> {
    Ok(Json(state.projects.find_by_id(id).await?))
}

pub async fn admin_list_projects(
    State(state): State<AppState>,
    Query(query): Query<TitleSearchQuery>,
) -> Result<Json<Vec<Project>>, AppError> {
    let projects = state.projects.find_all().await?;
    Ok(Json(search_titles(projects, query.search.as_deref(), |project| {
        project.title.as_str()
    })))
}

pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    validate_payload(&payload)?;
    let project = state.projects.create(new_project(payload)?).await?;
    tracing::info!(project_id = project.id, title = %project.title, "created project");
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, AppError> {
    validate_payload(&payload)?;
    let project = state
        .projects
        .update(
            id,
            Box::new(move |project: &mut Project| apply_project_update(project, payload)),
        )
        .await?;
    tracing::info!(project_id = project.id, "updated project");
    Ok(Json(project))
}

pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.projects.delete(id).await?;
    tracing::info!(project_id = id, "deleted project");
    Ok(StatusCode::NO_CONTENT)
}
