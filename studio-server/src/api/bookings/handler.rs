//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;
use serde_json::{Value, json};

use shared::{
    AppError, AppResult, Booking, BookingCreate, BookingStatusUpdate, GeoPoint, InvoiceNumber,
};

use crate::auth::CurrentAdmin;
use crate::core::ServerState;
use crate::db::repository::{BookingRepository, PackageRepository};

/// POST /api/bookings - 创建预约 (公开)
///
/// 必填字段缺失返回 400 "Missing required fields"；发票号由服务端铸造。
pub async fn create(
    State(state): State<ServerState>,
    Json(mut payload): Json<BookingCreate>,
) -> AppResult<Json<Value>> {
    if !payload.has_required_fields() {
        return Err(AppError::validation("Missing required fields"));
    }

    // has_required_fields 已保证 Some
    let event_date: NaiveDate = payload
        .event_date
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|_| AppError::validation("Invalid event date"))?;

    // 经纬度成对出现，且必须在有效坐标域内
    match (payload.location_lat, payload.location_lng) {
        (None, None) => {}
        (Some(lat), Some(lng)) => {
            if !GeoPoint::new(lat, lng).in_bounds() {
                return Err(AppError::validation("Coordinates out of range"));
            }
        }
        _ => return Err(AppError::validation("Incomplete coordinates")),
    }

    // 冗余存一份套餐名，套餐之后被改名/删除也能展示
    if payload.package_name.as_deref().is_none_or(|n| n.is_empty())
        && let Some(package_id) = payload.package_id.as_deref()
    {
        let package_repo = PackageRepository::new(state.db.clone());
        if let Ok(Some(package)) = package_repo.find_by_id(package_id).await {
            payload.package_name = Some(package.name);
        }
    }

    let invoice_number = InvoiceNumber::mint_now();

    let repo = BookingRepository::new(state.db.clone());
    let booking = repo
        .create(payload, event_date, invoice_number.as_str().to_string())
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    tracing::info!(
        invoice_number = %invoice_number,
        client = %booking.client_name,
        "Booking created"
    );

    Ok(Json(json!({
        "success": true,
        "booking": booking,
        "invoiceNumber": invoice_number,
    })))
}

/// GET /api/bookings - 获取所有预约 (管理员，按创建时间倒序)
pub async fn list(
    _admin: CurrentAdmin,
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<Booking>>> {
    let repo = BookingRepository::new(state.db.clone());
    let bookings = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(bookings))
}

/// GET /api/bookings/:id - 获取单个预约 (管理员)
pub async fn get_by_id(
    _admin: CurrentAdmin,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Booking>> {
    let repo = BookingRepository::new(state.db.clone());
    let booking = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found(format!("Booking {}", id)))?;
    Ok(Json(booking))
}

/// PATCH /api/bookings/:id/status - 改写预约状态 (管理员)
pub async fn update_status(
    _admin: CurrentAdmin,
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BookingStatusUpdate>,
) -> AppResult<Json<Booking>> {
    let repo = BookingRepository::new(state.db.clone());
    let booking = repo
        .update_status(&id, payload.status)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found(format!("Booking {}", id)))?;
    Ok(Json(booking))
}

