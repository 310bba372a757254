pub mod geometry;
pub mod seat;
pub mod row;
pub mod block;
pub mod layout;
pub mod tier;
pub mod wire;

pub use geometry::{Position, Rect};
pub use seat::{Seat, SeatStatus};
pub use row::Row;
pub use block::{Block, BlockKind, BlockType};
pub use layout::Layout;
pub use tier::{Tier, TierPalette};

use uuid::Uuid;

// Временный идентификатор для объектов, созданных на клиенте до сохранения
pub fn temp_id() -> String {
    format!("tmp-{}", Uuid::new_v4())
}

pub fn is_temp_id(id: &str) -> bool {
    id.starts_with("tmp-")
}
