//! Доступность мест в блоке и подсказка цвета для отрисовки.
//!
//! Включает в себя:
//! - процент свободных мест блока (0..=100, без NaN);
//! - цвет ценовой категории для блока стоячих мест;
//! - сводку по статусам мест для блока и для всей схемы.

use serde::Serialize;

use crate::models::{Block, BlockKind, Layout, Seat, SeatStatus, TierPalette};

/// Блок без посадочного списка считается полностью свободным:
/// заполненность таких блоков учитывается в другом месте.
pub const FULLY_AVAILABLE: f64 = 100.0;

/// Процент свободных мест блока в диапазоне [0, 100].
///
/// Нет списка мест или он пуст - 100. Занятыми считаются места со статусом
/// RESERVED, BOOKED или LOCKED.
pub fn availability_percentage(block: &Block) -> f64 {
    match block.seat_list() {
        Some(seats) => {
            let taken = seats.iter().filter(|seat| seat.is_taken()).count();
            percentage(seats.len(), taken)
        }
        None => FULLY_AVAILABLE,
    }
}

fn percentage(total: usize, taken: usize) -> f64 {
    if total == 0 {
        return FULLY_AVAILABLE;
    }
    let free = total.saturating_sub(taken) as f64;
    (100.0 * free / total as f64).clamp(0.0, 100.0)
}

/// Цвет первой (по порядку списка) категории, найденной среди мест блока.
///
/// Только для блоков стоячих мест; для остальных и для блоков без мест
/// с категорией - `None`.
pub fn representative_tier_color<'p>(block: &Block, palette: &'p TierPalette) -> Option<&'p str> {
    let BlockKind::StandingCapacity { seats: Some(seats), .. } = &block.kind else {
        return None;
    };
    seats
        .iter()
        .filter_map(|seat| seat.tier_id.as_deref())
        .find_map(|tier_id| palette.color_of(tier_id))
}

/// Статистика по местам: сколько всего, сколько в каждом статусе.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySummary {
    pub total_seats: usize,
    pub available_seats: usize,
    pub reserved_seats: usize,
    pub booked_seats: usize,
    pub locked_seats: usize,
    pub percentage: f64,
}

impl AvailabilitySummary {
    pub fn from_seats<'a>(seats: impl IntoIterator<Item = &'a Seat>) -> Self {
        let mut summary = Self::default();
        for seat in seats {
            summary.total_seats += 1;
            match seat.status {
                None | Some(SeatStatus::Available) => summary.available_seats += 1,
                Some(SeatStatus::Reserved) => summary.reserved_seats += 1,
                Some(SeatStatus::Booked) => summary.booked_seats += 1,
                Some(SeatStatus::Locked) => summary.locked_seats += 1,
            }
        }
        summary.recompute();
        summary
    }

    pub fn for_block(block: &Block) -> Self {
        Self::from_seats(block.seat_list().unwrap_or_default())
    }

    /// Сводка по всем блокам схемы, у которых есть список мест.
    pub fn for_layout(layout: &Layout) -> Self {
        Self::from_seats(layout.seats())
    }

    pub fn taken_seats(&self) -> usize {
        self.reserved_seats + self.booked_seats + self.locked_seats
    }

    fn recompute(&mut self) {
        self.percentage = percentage(self.total_seats, self.taken_seats());
    }
}
