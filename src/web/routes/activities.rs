use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::database::ActivityDirectory;
use crate::models::ActivityListing;
use crate::services::signup_service;
use crate::web::error::detail;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_activities_handler(
    State(directory): State<Arc<ActivityDirectory>>,
) -> Json<ActivityListing> {
    Json(directory.list_activities())
}

pub async fn signup_handler(
    State(directory): State<Arc<ActivityDirectory>>,
    Path(activity_name): Path<String>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return missing_email(rejection),
    };
    match signup_service::signup(&directory, &activity_name, &query.email) {
        Ok(message) => Json(MessageResponse { message }).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn unregister_handler(
    State(directory): State<Arc<ActivityDirectory>>,
    Path(activity_name): Path<String>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return missing_email(rejection),
    };
    match signup_service::unregister(&directory, &activity_name, &query.email) {
        Ok(message) => Json(MessageResponse { message }).into_response(),
        Err(e) => e.into_response(),
    }
}

fn missing_email(rejection: QueryRejection) -> Response {
    tracing::warn!(error = %rejection, "signup_query_rejected");
    detail(StatusCode::BAD_REQUEST, "Query parameter `email` is required")
}
