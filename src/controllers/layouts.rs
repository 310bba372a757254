//! Вычисления над схемой целиком: холст, доступность, проверка инвариантов.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::ApiError,
    models::{Block, Layout, Tier, TierPalette},
    services::{
        availability::{availability_percentage, representative_tier_color, AvailabilitySummary},
        normalizer::NormalizedLayout,
    },
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/layouts/normalize", post(normalize_layout))
        .route("/layouts/availability", post(layout_availability))
        .route("/layouts/validate", post(validate_layout))
}

/* ---------- helpers ---------- */

fn check_block_limit(state: &AppState, blocks: &[Block]) -> Result<(), ApiError> {
    let max = state.config.layout.max_blocks;
    if blocks.len() as u64 > max {
        return Err(ApiError::validation(format!(
            "layout has {} blocks, at most {} are accepted",
            blocks.len(),
            max
        )));
    }
    Ok(())
}

/* ---------- NORMALIZE ---------- */

// POST /api/layouts/normalize
#[derive(Debug, Deserialize)]
struct NormalizeRequest {
    #[serde(default)]
    blocks: Vec<Block>,
}

async fn normalize_layout(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NormalizeRequest>, JsonRejection>,
) -> Result<Json<NormalizedLayout>, ApiError> {
    let Json(req) = payload?;
    check_block_limit(&state, &req.blocks)?;

    Ok(Json(state.normalizer.normalize(req.blocks)))
}

/* ---------- AVAILABILITY ---------- */

// POST /api/layouts/availability
#[derive(Debug, Deserialize)]
struct AvailabilityRequest {
    #[serde(default)]
    blocks: Vec<Block>,
    #[serde(default)]
    tiers: Vec<Tier>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BlockAvailability {
    block_id: String,
    percentage: f64,
    tier_color: Option<String>,
    summary: AvailabilitySummary,
}

#[derive(Debug, Serialize)]
struct AvailabilityResponse {
    blocks: Vec<BlockAvailability>,
    summary: AvailabilitySummary,
}

async fn layout_availability(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AvailabilityRequest>, JsonRejection>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let Json(req) = payload?;
    check_block_limit(&state, &req.blocks)?;

    let palette = TierPalette::from_tiers(&req.tiers);
    let blocks = req
        .blocks
        .iter()
        .map(|block| BlockAvailability {
            block_id: block.id.clone(),
            percentage: availability_percentage(block),
            tier_color: representative_tier_color(block, &palette).map(str::to_string),
            summary: AvailabilitySummary::for_block(block),
        })
        .collect();

    let layout = Layout::new(req.blocks);
    let summary = AvailabilitySummary::for_layout(&layout);

    tracing::debug!(
        "Доступность схемы: {} мест, {} занято, {:.1}% свободно",
        summary.total_seats,
        summary.taken_seats(),
        summary.percentage
    );

    Ok(Json(AvailabilityResponse { blocks, summary }))
}

/* ---------- VALIDATE ---------- */

// POST /api/layouts/validate
#[derive(Debug, Deserialize)]
struct ValidateRequest {
    #[serde(default)]
    blocks: Vec<Block>,
    // true - проверяем как шаблон (места без статусов)
    #[serde(default)]
    template: bool,
}

async fn validate_layout(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(req) = payload?;
    check_block_limit(&state, &req.blocks)?;

    let layout = Layout::new(req.blocks);
    if req.template {
        layout.validate_template()?;
    } else {
        layout.validate()?;
    }

    Ok(StatusCode::NO_CONTENT)
}
