use serde::{Deserialize, Serialize};

/// Смещение левого верхнего угла блока на холсте (в пикселях схемы).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Прямоугольник, который блок занимает на холсте.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    // Сумма двух конечных f64 может уйти в бесконечность, край держим конечным
    pub fn right(&self) -> f64 {
        (self.x + self.width).min(f64::MAX)
    }

    pub fn bottom(&self) -> f64 {
        (self.y + self.height).min(f64::MAX)
    }
}
