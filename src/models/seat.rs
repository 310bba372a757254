use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::error::LayoutError;
use super::{temp_id, wire::RawSeat};

/// Статус места в сценарии бронирования. В шаблонах статуса нет.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatStatus {
    Available,
    Reserved,
    Booked,
    Locked,
}

impl SeatStatus {
    /// Место занято (зарезервировано, продано или заблокировано)
    pub fn is_taken(self) -> bool {
        !matches!(self, SeatStatus::Available)
    }
}

impl FromStr for SeatStatus {
    type Err = LayoutError;

    // Бэкенд бронирования пишет SOLD/FREE, редактор - BOOKED/AVAILABLE
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AVAILABLE" | "FREE" => Ok(SeatStatus::Available),
            "RESERVED" => Ok(SeatStatus::Reserved),
            "BOOKED" | "SOLD" => Ok(SeatStatus::Booked),
            "LOCKED" => Ok(SeatStatus::Locked),
            _ => Err(LayoutError::UnknownSeatStatus(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for SeatStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSeat")]
pub struct Seat {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SeatStatus>,
}

impl Seat {
    pub fn new(label: impl Into<String>) -> Self {
        Self { id: temp_id(), label: label.into(), tier_id: None, status: None }
    }

    pub fn with_tier(mut self, tier_id: impl Into<String>) -> Self {
        self.tier_id = Some(tier_id.into());
        self
    }

    pub fn with_status(mut self, status: SeatStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_taken(&self) -> bool {
        self.status.is_some_and(SeatStatus::is_taken)
    }
}
