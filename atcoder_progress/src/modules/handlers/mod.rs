pub mod category;
pub mod pie;

use atcoder_progress_libs::{api::ApiResponse, DataSnapshot};
use axum::{
    async_trait,
    extract::{Extension, FromRequestParts},
    http::StatusCode,
    Json,
};
use http::request::Parts;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use validator::Validate;

pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

pub async fn readiness(Extension(snapshot): Extension<Arc<DataSnapshot>>) -> StatusCode {
    if snapshot.contests.is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}

/// クエリ文字列をデシリアライズしてバリデーションまで行うエクストラクタ
pub struct ValidatedParameter<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedParameter<T>
where
    T: DeserializeOwned + Validate + Serialize + Default + Clone,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ApiResponse<T, Value>>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        let value: T = serde_structuredqs::from_str(query).map_err(|rejection| {
            tracing::error!("Parsing error: {}", rejection);
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(
                    T::default(),
                    format!("invalid format query string: [{}]", rejection),
                )),
            )
        })?;

        value.validate().map_err(|rejection| {
            tracing::error!("Validation error: {}", rejection);
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(
                    value.clone(),
                    format!("Validation error: [{}]", rejection).replace('\n', ", "),
                )),
            )
        })?;

        Ok(ValidatedParameter(value))
    }
}
