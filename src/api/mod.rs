pub mod handlers;
pub mod response;

use crate::adapters::{AppsScriptEndpoint, CsvSheetSource, OpenAiModel};
use crate::core::QueryRouter;
use axum::routing::get;
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeFile;

/// 每個請求共用的依賴。全部無狀態,請求之間不共享任何可變資料
pub struct AppState {
    pub sheet: CsvSheetSource,
    pub writer: AppsScriptEndpoint,
    pub model: OpenAiModel,
    pub router: QueryRouter,
}

pub fn build_router(state: Arc<AppState>, static_dir: &str) -> Router {
    let index = Path::new(static_dir).join("index.html");

    Router::new()
        .route_service("/", ServeFile::new(index))
        .route("/data", get(handlers::get_data))
        .route("/add", get(handlers::add_row))
        .route("/delete", get(handlers::delete_row))
        .route("/query", get(handlers::query_sheet))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
