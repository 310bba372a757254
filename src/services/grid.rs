use crate::error::{LayoutError, Result};
use crate::models::{temp_id, Block, BlockKind, Row, Seat};
use crate::services::row_labels;

/// Разворачивает сидячую сетку `rows x columns` в явные ряды с местами.
///
/// Ряды получают метки начиная с `start_row` (по умолчанию "A"), места -
/// `"{ряд}{номер}"` с номерами от `start_column` (по умолчанию 1). Уже
/// развернутые ряды заменяются. Идентификаторы рядов и мест временные.
pub fn expand_grid(block: &Block) -> Result<Block> {
    let BlockKind::SeatedGrid { rows, columns, start_row, start_column, .. } = &block.kind else {
        return Err(LayoutError::NotSeatedGrid(block.id.clone()));
    };

    let first_row = match start_row {
        Some(label) => row_labels::decode(label)?,
        None => 0,
    };
    let first_column = u64::from(start_column.unwrap_or(1));

    let seat_rows = (0..u64::from(*rows))
        .map(|i| -> Result<Row> {
            let index = first_row
                .checked_add(i)
                .ok_or_else(|| LayoutError::LabelOverflow(start_row.clone().unwrap_or_default()))?;
            let label = row_labels::encode(index);
            let seats = (0..u64::from(*columns))
                .map(|j| Seat::new(format!("{label}{}", first_column + j)))
                .collect();
            Ok(Row { id: temp_id(), label, seats })
        })
        .collect::<Result<Vec<Row>>>()?;

    tracing::debug!(block_id = %block.id, rows = *rows, columns = *columns, "grid expanded");

    Ok(Block {
        kind: BlockKind::SeatedGrid {
            rows: *rows,
            columns: *columns,
            seat_rows,
            start_row: start_row.clone(),
            start_column: *start_column,
        },
        ..block.clone()
    })
}
