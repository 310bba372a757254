pub mod row_labels;
pub mod normalizer;
pub mod availability;
pub mod grid;
