//! Приведение схемы к холсту для отрисовки.
//!
//! Холст - минимальный прямоугольник от начала координат, в который
//! помещаются все блоки, но не меньше минимального размера из конфигурации.
//! Функция чистая: вызывается на каждый рендер и должна давать один и тот же
//! результат для одного и того же входа.

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::models::{Block, BlockKind, Rect};

/// Блоки без изменений + размеры холста.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedLayout {
    pub blocks: Vec<Block>,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

#[derive(Debug, Clone, Default)]
pub struct LayoutNormalizer {
    config: LayoutConfig,
}

impl LayoutNormalizer {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Размер блока по его типу, если ширина/высота не заданы.
    pub fn default_size(&self, kind: &BlockKind) -> (f64, f64) {
        let c = &self.config;
        match kind {
            BlockKind::SeatedGrid { rows, columns, .. } => (
                f64::from(*columns) * c.seat_pitch + 2.0 * c.block_padding,
                f64::from(*rows) * c.seat_pitch + 2.0 * c.block_padding + c.header_height,
            ),
            BlockKind::StandingCapacity { .. } => (c.standing_width, c.standing_height),
            BlockKind::NonSellable => (c.non_sellable_width, c.non_sellable_height),
        }
    }

    /// Прямоугольник, который блок занимает на холсте.
    ///
    /// Некорректные размеры (NaN, бесконечность, <= 0) заменяются размером
    /// по умолчанию, некорректные координаты считаются нулем. Сам блок не
    /// меняется.
    pub fn extent(&self, block: &Block) -> Rect {
        let (default_width, default_height) = self.default_size(&block.kind);
        Rect {
            x: coordinate(block.position.x),
            y: coordinate(block.position.y),
            width: dimension(block.width, default_width),
            height: dimension(block.height, default_height),
        }
    }

    pub fn normalize(&self, blocks: Vec<Block>) -> NormalizedLayout {
        let (canvas_width, canvas_height) = blocks.iter().map(|block| self.extent(block)).fold(
            (self.config.min_canvas_width, self.config.min_canvas_height),
            |(width, height), rect| (width.max(rect.right()), height.max(rect.bottom())),
        );

        tracing::trace!(blocks = blocks.len(), canvas_width, canvas_height, "layout normalized");

        NormalizedLayout { blocks, canvas_width, canvas_height }
    }
}

fn coordinate(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn dimension(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => fallback,
    }
}
