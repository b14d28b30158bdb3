//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod health;
pub mod users;

use axum::http::Uri;

use crate::error::AppError;

pub use health::health;
pub use users::{create_user, delete_user, get_user, list_users, update_user};

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
