use crate::application::rental::RentalApplicationError;
use crate::domain::DateRangeError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーと、コアに渡す前の入力チェックのエラーを
/// HTTPレスポンスにマッピングする。
#[derive(Debug)]
pub enum ApiError {
    Application(RentalApplicationError),
    /// リクエストを解釈できない（JSON・クエリ・パスの形式不正）
    InvalidRequest(String),
    /// 必須項目が空
    MissingField(&'static str),
    /// 項目が最大文字数を超えている
    FieldTooLong(&'static str, usize),
    /// 終了日が開始日より後ではない
    InvalidDateRange,
    /// 開始日が今日より前
    StartDateInPast,
}

impl From<RentalApplicationError> for ApiError {
    fn from(err: RentalApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl From<DateRangeError> for ApiError {
    fn from(err: DateRangeError) -> Self {
        match err {
            DateRangeError::EndNotAfterStart => ApiError::InvalidDateRange,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 400 Bad Request - 入力値の不備
            ApiError::InvalidRequest(detail) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", detail)
            }
            ApiError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                "MISSING_FIELD",
                format!("Field '{}' is required", field),
            ),
            ApiError::FieldTooLong(field, limit) => (
                StatusCode::BAD_REQUEST,
                "FIELD_TOO_LONG",
                format!("Field '{}' must be at most {} characters", field, limit),
            ),
            ApiError::InvalidDateRange => (
                StatusCode::BAD_REQUEST,
                "INVALID_DATE_RANGE",
                "End date must be after start date".to_string(),
            ),
            ApiError::StartDateInPast => (
                StatusCode::BAD_REQUEST,
                "START_DATE_IN_PAST",
                "Start date cannot be in the past".to_string(),
            ),

            // 404 Not Found - リクエストされたリソースが存在しない
            ApiError::Application(RentalApplicationError::VehicleNotFound(plate)) => (
                StatusCode::NOT_FOUND,
                "VEHICLE_NOT_FOUND",
                format!("Vehicle {} not found", plate),
            ),
            ApiError::Application(RentalApplicationError::BookingNotFound) => (
                StatusCode::NOT_FOUND,
                "BOOKING_NOT_FOUND",
                "Booking not found".to_string(),
            ),

            // 409 Conflict - 既存の予約と重なる
            ApiError::Application(RentalApplicationError::VehicleNotAvailable(plate)) => (
                StatusCode::CONFLICT,
                "VEHICLE_NOT_AVAILABLE",
                format!("Vehicle {} is not available for the requested dates", plate),
            ),

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Application(ref e @ RentalApplicationError::LockPoisoned(_)) => {
                tracing::error!("Rental state error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LicensePlate;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            status_of(ApiError::MissingField("name")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DateRangeError::EndNotAfterStart.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::FieldTooLong("phone", 15)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::InvalidRequest("bad".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(RentalApplicationError::VehicleNotFound(LicensePlate::new("X")).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(RentalApplicationError::BookingNotFound.into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(RentalApplicationError::VehicleNotAvailable(LicensePlate::new("X")).into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(RentalApplicationError::LockPoisoned("write").into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
