use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LayoutError;
use super::{temp_id, wire::RawBlock, Position, Row, Seat};

/// Тип блока схемы без данных - для выбора размеров по умолчанию и т.п.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    SeatedGrid,
    StandingCapacity,
    NonSellable,
}

impl BlockType {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::SeatedGrid => "seated_grid",
            BlockType::StandingCapacity => "standing_capacity",
            BlockType::NonSellable => "non_sellable",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = LayoutError;

    // Принимаем seated_grid / SEATED_GRID / seatedGrid / seated-grid и короткие алиасы
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "seatedgrid" | "grid" | "seated" => Ok(BlockType::SeatedGrid),
            "standingcapacity" | "standing" | "ga" => Ok(BlockType::StandingCapacity),
            "nonsellable" | "decor" | "stage" => Ok(BlockType::NonSellable),
            _ => Err(LayoutError::UnknownBlockType(s.to_string())),
        }
    }
}

/// Данные блока, зависящие от его типа.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    #[serde(rename_all = "camelCase")]
    SeatedGrid {
        rows: u32,
        columns: u32,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        seat_rows: Vec<Row>,
        #[serde(skip_serializing_if = "Option::is_none")]
        start_row: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        start_column: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    StandingCapacity {
        #[serde(skip_serializing_if = "Option::is_none")]
        capacity: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        seats: Option<Vec<Seat>>,
    },
    NonSellable,
}

impl BlockKind {
    pub fn block_type(&self) -> BlockType {
        match self {
            BlockKind::SeatedGrid { .. } => BlockType::SeatedGrid,
            BlockKind::StandingCapacity { .. } => BlockType::StandingCapacity,
            BlockKind::NonSellable => BlockType::NonSellable,
        }
    }

    pub fn grid(rows: u32, columns: u32) -> Self {
        BlockKind::SeatedGrid {
            rows,
            columns,
            seat_rows: Vec::new(),
            start_row: None,
            start_column: None,
        }
    }
}

/// Прямоугольная область схемы зала.
///
/// Десериализация идет только через [`RawBlock`]: все варианты написания
/// полей, которые присылает сервис шаблонов, сводятся к одному виду здесь.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawBlock")]
pub struct Block {
    pub id: String,
    pub name: String,
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl Block {
    pub fn new(name: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: temp_id(),
            name: name.into(),
            position: Position::default(),
            width: None,
            height: None,
            kind,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn block_type(&self) -> BlockType {
        self.kind.block_type()
    }

    /// Список мест блока в порядке отображения.
    ///
    /// `None` - у блока нет посадочного списка (счетчик вместимости,
    /// декоративная область, сетка без развернутых рядов).
    pub fn seat_list(&self) -> Option<Vec<&Seat>> {
        match &self.kind {
            BlockKind::SeatedGrid { seat_rows, .. } if !seat_rows.is_empty() => {
                Some(seat_rows.iter().flat_map(|row| row.seats.iter()).collect())
            }
            BlockKind::StandingCapacity { seats: Some(seats), .. } => Some(seats.iter().collect()),
            _ => None,
        }
    }
}
