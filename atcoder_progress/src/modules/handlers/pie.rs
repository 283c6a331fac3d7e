use crate::modules::handlers::ValidatedParameter;
use atcoder_progress_libs::{api::ApiResponse, view::PieChartEntry, DataSnapshot};
use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::time::Instant;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, PartialEq, Eq, Clone, Default)]
pub struct PieParameter {
    #[validate(length(min = 1, max = 50))]
    pub user: String,
}

pub async fn pie(
    ValidatedParameter(params): ValidatedParameter<PieParameter>,
    Extension(snapshot): Extension<Arc<DataSnapshot>>,
) -> (
    StatusCode,
    Json<ApiResponse<PieParameter, PieChartEntry>>,
) {
    let start_process = Instant::now();

    let items: Vec<PieChartEntry> = snapshot
        .category_counts(&params.user)
        .into_iter()
        .map(PieChartEntry::from)
        .collect();

    let time: u32 = Instant::now().duration_since(start_process).as_millis() as u32;
    tracing::info!(
        target: "querylog",
        "elapsed_time={} endpoint=pie params={}",
        time, serde_json::to_string(&params).unwrap_or(String::from(""))
    );

    (StatusCode::OK, Json(ApiResponse::ok(params, items, time)))
}
