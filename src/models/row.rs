use serde::{Deserialize, Serialize};

use super::{wire::RawRow, Seat};

/// Ряд сидячего блока. Порядок мест - порядок отображения слева направо.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRow")]
pub struct Row {
    pub id: String,
    pub label: String,
    pub seats: Vec<Seat>,
}
