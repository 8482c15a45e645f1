use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::database::ActivityStore;
use crate::models::Activity;
use crate::services::activities_service::{self, MessageResponse};
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn list_activities_handler(
    State(store): State<ActivityStore>,
) -> Json<IndexMap<String, Activity>> {
    Json(activities_service::list_activities(&store))
}

pub async fn signup_handler(
    State(store): State<ActivityStore>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let resp = activities_service::signup_for_activity(&store, &activity_name, &query.email)?;
    Ok(Json(resp))
}

pub async fn unregister_handler(
    State(store): State<ActivityStore>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let resp = activities_service::unregister_from_activity(&store, &activity_name, &query.email)?;
    Ok(Json(resp))
}
