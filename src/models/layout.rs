use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{LayoutError, Result};
use super::{Block, Seat};

/// Схема зала: блоки в порядке добавления (важно для стабильного диффа в UI).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Layout {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.blocks
            .iter()
            .filter_map(Block::seat_list)
            .flatten()
    }

    /// Проверяет, что каждое место встречается в схеме ровно один раз.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for seat in self.seats() {
            if !seen.insert(seat.id.as_str()) {
                return Err(LayoutError::DuplicateSeat(seat.id.clone()));
            }
        }
        Ok(())
    }

    /// Шаблон - схема без бронирований: ни у одного места нет статуса.
    pub fn validate_template(&self) -> Result<()> {
        self.validate()?;
        match self.seats().find(|seat| seat.status.is_some()) {
            Some(seat) => Err(LayoutError::StatusInTemplate(seat.id.clone())),
            None => Ok(()),
        }
    }
}
