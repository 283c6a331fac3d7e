use crate::modules::handlers::ValidatedParameter;
use atcoder_progress_libs::{
    api::{deserialize_optional_comma_separated, ApiResponse},
    view::CategoryBlock,
    DataSnapshot,
};
use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::sync::Arc;
use tokio::time::Instant;
use validator::Validate;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Validate, PartialEq, Eq, Clone, Default)]
pub struct CategoryParameter {
    #[validate(length(min = 1, max = 50))]
    pub user: String,
    #[validate(length(max = 20))]
    #[serde(default, deserialize_with = "deserialize_optional_comma_separated")]
    pub rivals: Option<Vec<String>>,
}

pub async fn category(
    ValidatedParameter(params): ValidatedParameter<CategoryParameter>,
    Extension(snapshot): Extension<Arc<DataSnapshot>>,
) -> (
    StatusCode,
    Json<ApiResponse<CategoryParameter, CategoryBlock>>,
) {
    let start_process = Instant::now();

    let rivals = params.rivals.clone().unwrap_or_default();
    let items = snapshot.category_view(&params.user, &rivals);

    let time: u32 = Instant::now().duration_since(start_process).as_millis() as u32;
    tracing::info!(
        target: "querylog",
        "elapsed_time={} endpoint=category params={}",
        time, serde_json::to_string(&params).unwrap_or(String::from(""))
    );

    (StatusCode::OK, Json(ApiResponse::ok(params, items, time)))
}
