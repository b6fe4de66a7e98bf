use crate::application::rental::{
    RentalContext, availability_report, available_vehicles as query_available_vehicles,
    find_vehicle, fleet_summary, get_booking as query_get_booking,
    list_bookings as query_list_bookings, list_vehicles as query_list_vehicles,
    register_booking as execute_register_booking, rented_vehicles as query_rented_vehicles,
};
use crate::domain::{BookingId, LicensePlate};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::{
    error::ApiError,
    types::{
        AvailabilityResponse, BookingCreatedResponse, BookingResponse, DateRangeQuery,
        FleetSummaryResponse, RegisterBookingRequest, VehicleResponse,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
pub struct AppState {
    pub rental: RentalContext,
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /bookings - 新しい予約を作成
///
/// 強制されるビジネスルール:
/// - 顧客の必須項目が空でなく、最大文字数以内であること
/// - 終了日が開始日より後で、開始日が今日以降であること
/// - 車両が存在すること
/// - 指定期間に車両が貸出可能であること
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterBookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingCreatedResponse>), ApiError> {
    let Json(req) = payload?;
    let now = Utc::now();
    let cmd = req.to_command(now.date_naive(), now)?;

    let booking_id = execute_register_booking(&state.rental, cmd)?;

    // 作成された予約を取得して完全な情報を返す
    let view = query_get_booking(&state.rental, booking_id)?;

    Ok((StatusCode::CREATED, Json(BookingCreatedResponse::from(view))))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /vehicles - 全車両を登録順に取得
pub async fn list_vehicles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VehicleResponse>>, ApiError> {
    let vehicles = query_list_vehicles(&state.rental)?;
    Ok(Json(vehicles.into_iter().map(VehicleResponse::from).collect()))
}

/// GET /vehicles/:plate - ナンバープレートで車両を取得
pub async fn get_vehicle(
    State(state): State<Arc<AppState>>,
    Path(plate): Path<String>,
) -> Result<Json<VehicleResponse>, ApiError> {
    let vehicle = find_vehicle(&state.rental, &LicensePlate::new(plate))?;
    Ok(Json(VehicleResponse::from(vehicle)))
}

/// GET /vehicles/available?start_date=..&end_date=.. - 指定期間に貸出可能な車両
pub async fn available_vehicles(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Result<Json<Vec<VehicleResponse>>, ApiError> {
    let Query(query) = query?;
    let period = query.to_period()?;
    let vehicles = query_available_vehicles(&state.rental, &period)?;
    Ok(Json(vehicles.into_iter().map(VehicleResponse::from).collect()))
}

/// GET /vehicles/rented - 貸出中の車両
pub async fn rented_vehicles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VehicleResponse>>, ApiError> {
    let vehicles = query_rented_vehicles(&state.rental)?;
    Ok(Json(vehicles.into_iter().map(VehicleResponse::from).collect()))
}

/// GET /availability?start_date=..&end_date=.. - 空き状況（貸出不可の理由付き）
pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let Query(query) = query?;
    let period = query.to_period()?;
    let report = availability_report(&state.rental, &period)?;
    Ok(Json(AvailabilityResponse::from(report)))
}

/// GET /bookings - 予約を登録順に取得
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let bookings = query_list_bookings(&state.rental)?;
    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}

/// GET /bookings/:id - 予約票をIDで取得
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    booking_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<BookingResponse>, ApiError> {
    let Path(booking_id) = booking_id?;
    let view = query_get_booking(&state.rental, BookingId::from_uuid(booking_id))?;
    Ok(Json(BookingResponse::from(view)))
}

/// GET /summary - フリート全体の集計
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FleetSummaryResponse>, ApiError> {
    let summary = fleet_summary(&state.rental)?;
    Ok(Json(FleetSummaryResponse::from(summary)))
}
