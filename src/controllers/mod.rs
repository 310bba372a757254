pub mod rows;
pub mod layouts;
pub mod blocks;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(rows::routes())
        .merge(layouts::routes())
        .merge(blocks::routes())
}
