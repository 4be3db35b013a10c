//! Config API Handlers

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::core::ServerState;

/// GET /api/config - 预约页运行时配置 (公开)
///
/// 出站 WhatsApp 号码和地图 key。key 未配置时为 null，
/// 客户端据此把定位预览降级为纯坐标。
pub async fn client_config(State(state): State<ServerState>) -> Json<Value> {
    Json(json!({
        "whatsappNumber": state.config.whatsapp_number,
        "googleMapsApiKey": state.config.google_maps_api_key,
    }))
}
