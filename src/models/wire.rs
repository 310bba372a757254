//! Граница с сервисом шаблонов.
//!
//! Апстрим присылает одни и те же поля под разными именами (camelCase,
//! snake_case, числовые и строковые id, `rows` как число или как массив).
//! Здесь все варианты один раз сводятся к каноническим типам из `models`,
//! дальше по коду неоднозначность не распространяется.

use serde::Deserialize;

use crate::error::LayoutError;
use super::{temp_id, Block, BlockKind, BlockType, Position, Row, Seat, SeatStatus};

/// id может прийти строкой или числом (в том числе больше i64::MAX или дробным)
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl RawId {
    fn into_id(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
            RawId::Float(n) => n.to_string(),
        }
    }
}

fn id_or_temp(id: Option<RawId>) -> String {
    id.map(RawId::into_id).unwrap_or_else(temp_id)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSeat {
    #[serde(default, alias = "seatId", alias = "seat_id")]
    id: Option<RawId>,
    #[serde(default, alias = "name")]
    label: Option<String>,
    #[serde(default, alias = "tier_id", alias = "tier")]
    tier_id: Option<RawId>,
    #[serde(default)]
    status: Option<SeatStatus>,
}

impl From<RawSeat> for Seat {
    fn from(raw: RawSeat) -> Self {
        Seat {
            id: id_or_temp(raw.id),
            label: raw.label.unwrap_or_default(),
            tier_id: raw.tier_id.map(RawId::into_id),
            status: raw.status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(default, alias = "rowId", alias = "row_id")]
    id: Option<RawId>,
    #[serde(default, alias = "name")]
    label: Option<String>,
    #[serde(default)]
    seats: Vec<Seat>,
}

impl From<RawRow> for Row {
    fn from(raw: RawRow) -> Self {
        Row {
            id: id_or_temp(raw.id),
            label: raw.label.unwrap_or_default(),
            seats: raw.seats,
        }
    }
}

/// `rows` у сетки - либо количество, либо уже развернутые ряды
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawRows {
    Count(u32),
    List(Vec<Row>),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    #[serde(default, alias = "blockId", alias = "block_id")]
    id: Option<RawId>,
    #[serde(default, alias = "label")]
    name: Option<String>,
    #[serde(rename = "type", alias = "blockType", alias = "block_type", alias = "kind")]
    block_type: String,
    #[serde(default)]
    position: Option<Position>,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    rows: Option<RawRows>,
    #[serde(default, alias = "cols")]
    columns: Option<u32>,
    #[serde(default, alias = "seat_rows", alias = "rowList", alias = "row_list")]
    seat_rows: Option<Vec<Row>>,
    #[serde(default, alias = "start_row", alias = "startRowLabel", alias = "start_row_label")]
    start_row: Option<String>,
    #[serde(default, alias = "start_column", alias = "startCol", alias = "start_col")]
    start_column: Option<u32>,
    #[serde(default)]
    capacity: Option<u32>,
    #[serde(default)]
    seats: Option<Vec<Seat>>,
}

impl TryFrom<RawBlock> for Block {
    type Error = LayoutError;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        let kind = match raw.block_type.parse::<BlockType>()? {
            BlockType::SeatedGrid => {
                let (rows, seat_rows) = match raw.rows {
                    // Развернутые ряды важнее счетчика: по ним рисует рендер
                    Some(RawRows::Count(n)) => match raw.seat_rows {
                        Some(list) if !list.is_empty() => (len_u32(list.len()), list),
                        _ => (n, Vec::new()),
                    },
                    Some(RawRows::List(list)) => (len_u32(list.len()), list),
                    None => {
                        let list = raw.seat_rows.unwrap_or_default();
                        (len_u32(list.len()), list)
                    }
                };
                // Если колонок нет - берем самый длинный ряд
                let columns = raw.columns.unwrap_or_else(|| {
                    seat_rows
                        .iter()
                        .map(|row| len_u32(row.seats.len()))
                        .max()
                        .unwrap_or(0)
                });
                BlockKind::SeatedGrid {
                    rows,
                    columns,
                    seat_rows,
                    start_row: raw.start_row,
                    start_column: raw.start_column,
                }
            }
            BlockType::StandingCapacity => BlockKind::StandingCapacity {
                capacity: raw.capacity,
                seats: raw.seats,
            },
            BlockType::NonSellable => BlockKind::NonSellable,
        };

        let position = raw.position.unwrap_or_else(|| Position {
            x: raw.x.unwrap_or(0.0),
            y: raw.y.unwrap_or(0.0),
        });

        Ok(Block {
            id: id_or_temp(raw.id),
            name: raw.name.unwrap_or_default(),
            position,
            width: raw.width,
            height: raw.height,
            kind,
        })
    }
}

fn len_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
