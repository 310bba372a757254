use axum::{
    extract::{rejection::QueryRejection, Query},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::{error::ApiError, services::row_labels, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rows/label", get(label_for_index))
        .route("/rows/index", get(index_for_label))
}

#[derive(Debug, Serialize)]
struct RowLabelResponse {
    index: u64,
    label: String,
}

// GET /api/rows/label?index=26
#[derive(Debug, Deserialize)]
struct LabelQuery {
    index: u64,
}

async fn label_for_index(
    query: Result<Query<LabelQuery>, QueryRejection>,
) -> Result<Json<RowLabelResponse>, ApiError> {
    let Query(params) = query?;
    Ok(Json(RowLabelResponse { index: params.index, label: row_labels::encode(params.index) }))
}

// GET /api/rows/index?label=AA
#[derive(Debug, Deserialize, Validate)]
struct IndexQuery {
    #[validate(length(max = 16))]
    label: String,
}

async fn index_for_label(
    query: Result<Query<IndexQuery>, QueryRejection>,
) -> Result<Json<RowLabelResponse>, ApiError> {
    let Query(params) = query?;
    // Пустую метку отклоняет decode (INVALID_LABEL), здесь только длина
    params.validate()?;

    let index = row_labels::decode(&params.label)?;
    Ok(Json(RowLabelResponse { index, label: params.label.to_ascii_uppercase() }))
}
