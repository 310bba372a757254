use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::ApiError,
    models::{Block, BlockKind, Rect},
    services::grid::expand_grid,
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/blocks/expand", post(expand_block))
        .route("/blocks/extent", post(block_extent))
}

#[derive(Debug, Deserialize)]
struct BlockRequest {
    block: Block,
}

// POST /api/blocks/expand
async fn expand_block(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BlockRequest>, JsonRejection>,
) -> Result<Json<Block>, ApiError> {
    let Json(req) = payload?;

    if let BlockKind::SeatedGrid { rows, columns, .. } = &req.block.kind {
        let seats = u64::from(*rows) * u64::from(*columns);
        let max = state.config.layout.max_grid_seats;
        if seats > max {
            return Err(ApiError::validation(format!(
                "grid {rows}x{columns} has {seats} seats, at most {max} can be expanded"
            )));
        }
    }

    let expanded = expand_grid(&req.block)?;
    tracing::info!("Блок {} развернут", expanded.id);
    Ok(Json(expanded))
}

// POST /api/blocks/extent - прямоугольник блока с учетом размеров по умолчанию
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtentResponse {
    block_id: String,
    #[serde(flatten)]
    rect: Rect,
}

async fn block_extent(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BlockRequest>, JsonRejection>,
) -> Result<Json<ExtentResponse>, ApiError> {
    let Json(req) = payload?;
    let rect = state.normalizer.extent(&req.block);
    Ok(Json(ExtentResponse { block_id: req.block.id, rect }))
}
