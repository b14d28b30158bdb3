//! User handlers
//!
//! CRUD endpoints for user records. Read endpoints include the derived age.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::{AgedUser, PageRequest};
use crate::domain::entities::{User, UserId};
use crate::error::AppError;
use crate::AppState;

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Request body for creating or replacing a user
///
/// Missing fields deserialize as empty strings so they are reported by
/// validation rather than as a malformed body.
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub name: String,
    /// Date of birth, `YYYY-MM-DD`
    #[serde(default)]
    pub dob: String,
}

/// Query parameters for listing users
///
/// Kept as strings so that garbage values fall back to defaults instead of
/// failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl ListUsersQuery {
    fn page_request(&self) -> PageRequest {
        let page = parse_or(self.page.as_deref(), 1);
        let page_size = parse_or(self.page_size.as_deref(), 10);
        PageRequest::new(page, page_size)
    }
}

fn parse_or(value: Option<&str>, default: i64) -> i64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub dob: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.0,
            dob: user.dob_string(),
            name: user.name,
            age: None,
        }
    }
}

impl From<AgedUser> for UserResponse {
    fn from(aged: AgedUser) -> Self {
        Self {
            age: Some(aged.age),
            ..UserResponse::from(aged.user)
        }
    }
}

fn parse_id(raw: &str) -> Result<UserId, AppError> {
    raw.parse().map_err(|_| AppError::InvalidId(raw.to_string()))
}

fn parse_body(
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<UserRequest, AppError> {
    payload.map(|Json(request)| request).map_err(|rejection| {
        tracing::warn!(error = %rejection, "Failed to parse request body");
        AppError::BadRequest(rejection.body_text())
    })
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let request = parse_body(payload)?;

    let user = state
        .user_service
        .create(&request.name, &request.dob)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_id(&id)?;

    let user = state.user_service.get(&id).await?;

    Ok(Json(user.into()))
}

/// GET /users
///
/// Returns a plain array; the total is in the `X-Total-Count` header.
pub async fn list_users(
    State(state): State<AppState>,
    query: Option<Query<ListUsersQuery>>,
) -> Result<([(&'static str, String); 1], Json<Vec<UserResponse>>), AppError> {
    let page = query.map(|Query(q)| q.page_request()).unwrap_or_default();

    let (users, total) = state.user_service.list(page).await?;

    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(([(TOTAL_COUNT_HEADER, total.to_string())], Json(body)))
}

/// PUT /users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_id(&id)?;
    let request = parse_body(payload)?;

    let user = state
        .user_service
        .update(&id, &request.name, &request.dob)
        .await?;

    Ok(Json(user.into()))
}

/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;

    state.user_service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
