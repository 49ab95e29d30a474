use std::sync::Arc;

pub mod dataset;
pub mod extractors;
pub mod handlers;
pub mod names;
pub mod rejections;
pub mod statics;
pub mod utils;
pub mod views;

use axum::Router;

use dataset::DatasetStore;

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<DatasetStore>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::viewer::routes())
        .nest("/static", statics::routes())
        .with_state(state)
}
