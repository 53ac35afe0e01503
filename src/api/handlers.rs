use super::response::{relay, ApiResult};
use super::AppState;
use crate::core::{answer, filter};
use crate::domain::model::{QueryIntent, Record};
use crate::domain::ports::{SheetSource, WriteEndpoint};
use crate::utils::error::GatewayError;
use axum::extract::{Query, State};
use axum::response::Response;
use axum::Json;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

/// GET /data — 完整快照,缺值以 null 表示
pub async fn get_data(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Record>>> {
    let snapshot = state.sheet.fetch().await?;
    Ok(Json(snapshot.records))
}

/// GET /add — 任意參數轉發給寫入端點,至少要帶一個參數
pub async fn add_row(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Response> {
    if params.is_empty() {
        return Err(GatewayError::MissingParameters.into());
    }

    let reply = state.writer.propagate("add", &params).await?;
    Ok(relay(reply))
}

/// GET /delete — key 必填且去空白後不得為空;驗證沒過不碰寫入端點
pub async fn delete_row(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Response> {
    let key = params.get("key").map(|k| k.trim()).unwrap_or("");
    if key.is_empty() {
        return Err(GatewayError::MissingKey.into());
    }

    let mut forward = HashMap::new();
    forward.insert("key".to_string(), key.to_string());

    let reply = state.writer.propagate("delete", &forward).await?;
    Ok(relay(reply))
}

/// GET /query — 結構化命中走過濾,否則整段丟給語言模型
pub async fn query_sheet(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<serde_json::Value>> {
    let q = params.get("q").map(|q| q.trim()).unwrap_or("");
    if q.is_empty() {
        return Err(GatewayError::MissingQuery.into());
    }

    let snapshot = state.sheet.fetch().await?;

    match state.router.classify(q) {
        QueryIntent::Filter(filter_query) => {
            tracing::info!(
                "Structured query: {} {} {} projecting {:?}",
                filter_query.field,
                filter_query.comparison.symbol(),
                filter_query.threshold,
                filter_query.columns
            );
            let rows = filter::evaluate(&snapshot, &filter_query)?;
            Ok(Json(json!({ "result": rows })))
        }
        QueryIntent::FreeForm(text) => {
            tracing::info!("Free-form query, delegating to model");
            let reply = answer::answer(&state.model, &snapshot, &text).await?;
            Ok(Json(json!({ "answer": reply })))
        }
    }
}
