use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::rental::{
    AvailabilityReport, BookingView, FleetSummary, UnavailableVehicle, VehicleSummary,
};
use crate::domain::{
    Customer, DateRange, DateRangeError, LicensePlate, Vehicle, commands::RegisterBooking,
};

use super::error::ApiError;

/// 日付（YYYY-MM-DD）をその日の0時（UTC）に変換する
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// 期間指定のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRangeQuery {
    pub fn to_period(&self) -> Result<DateRange, DateRangeError> {
        DateRange::new(start_of_day(self.start_date), start_of_day(self.end_date))
    }
}

fn default_payment_method() -> String {
    "card".to_string()
}

/// 予約登録リクエスト（POST /bookings）
///
/// 文字列項目は省略時に空文字になり、`to_command`で`MissingField`として報告される。
#[derive(Debug, Deserialize)]
pub struct RegisterBookingRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
    #[serde(default)]
    pub plate: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RegisterBookingRequest {
    /// 入力チェックをしてコマンドに変換する
    ///
    /// コアは入力値を信用するため、必須項目と文字数の上限、日付の前後関係、
    /// 開始日が過去でないことはここで確認する。
    pub fn to_command(
        self,
        today: NaiveDate,
        registered_at: DateTime<Utc>,
    ) -> Result<RegisterBooking, ApiError> {
        // (項目名, 値, 最大文字数)
        let required: [(&'static str, &str, Option<usize>); 7] = [
            ("name", &self.name, Some(50)),
            ("surname", &self.surname, Some(80)),
            ("national_id", &self.national_id, Some(12)),
            ("email", &self.email, Some(100)),
            ("phone", &self.phone, Some(15)),
            ("address", &self.address, Some(150)),
            ("plate", &self.plate, None),
        ];
        if let Some((field, _, _)) = required.iter().find(|(_, value, _)| value.trim().is_empty()) {
            return Err(ApiError::MissingField(*field));
        }
        for (field, value, limit) in required {
            if let Some(limit) = limit.filter(|&limit| value.chars().count() > limit) {
                return Err(ApiError::FieldTooLong(field, limit));
            }
        }

        let period = DateRange::new(start_of_day(self.start_date), start_of_day(self.end_date))?;
        if self.start_date < today {
            return Err(ApiError::StartDateInPast);
        }

        Ok(RegisterBooking {
            customer: Customer {
                name: self.name,
                surname: self.surname,
                address: self.address,
                national_id: self.national_id,
                email: self.email,
                phone: self.phone,
                payment_method: self.payment_method,
            },
            plate: LicensePlate::new(self.plate),
            period,
            registered_at,
        })
    }
}

/// 車両レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleResponse {
    pub brand: String,
    pub model: String,
    pub plate: String,
    pub engine_type: String,
    /// "available" または "rented"
    pub status: String,
    pub current_booking_id: Option<Uuid>,
    pub label: String,
    /// 予約フォームの車両選択肢に使うキー
    pub selection_key: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        let status = if vehicle.is_rented() { "rented" } else { "available" };
        Self {
            label: vehicle.to_string(),
            selection_key: vehicle.selection_key(),
            current_booking_id: vehicle.current_booking().map(|id| id.value()),
            status: status.to_string(),
            engine_type: vehicle.engine_type.as_str().to_string(),
            brand: vehicle.brand,
            model: vehicle.model,
            plate: vehicle.plate.to_string(),
        }
    }
}

/// 予約作成レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingCreatedResponse {
    pub booking_id: Uuid,
    pub customer_name: String,
    pub plate: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_days: i64,
}

impl From<BookingView> for BookingCreatedResponse {
    fn from(view: BookingView) -> Self {
        Self {
            booking_id: view.booking_id.value(),
            customer_name: view.customer.full_name(),
            plate: view.plate.to_string(),
            start: view.start,
            end: view.end,
            duration_days: view.duration_days,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub full_name: String,
    pub name: String,
    pub surname: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub payment_method: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            full_name: customer.full_name(),
            name: customer.name,
            surname: customer.surname,
            national_id: customer.national_id,
            email: customer.email,
            phone: customer.phone,
            address: customer.address,
            payment_method: customer.payment_method,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleSummaryResponse {
    pub brand: String,
    pub model: String,
    pub plate: String,
    pub engine_type: String,
}

impl From<VehicleSummary> for VehicleSummaryResponse {
    fn from(summary: VehicleSummary) -> Self {
        Self {
            brand: summary.brand,
            model: summary.model,
            plate: summary.plate.to_string(),
            engine_type: summary.engine_type.as_str().to_string(),
        }
    }
}

/// 予約レスポンス（GET /bookings と GET /bookings/:id）
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingResponse {
    pub number: usize,
    pub booking_id: Uuid,
    pub customer: CustomerResponse,
    pub plate: String,
    pub vehicle: Option<VehicleSummaryResponse>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_days: i64,
    pub registered_at: DateTime<Utc>,
}

impl From<BookingView> for BookingResponse {
    fn from(view: BookingView) -> Self {
        Self {
            number: view.number,
            booking_id: view.booking_id.value(),
            customer: CustomerResponse::from(view.customer),
            plate: view.plate.to_string(),
            vehicle: view.vehicle.map(VehicleSummaryResponse::from),
            start: view.start,
            end: view.end,
            duration_days: view.duration_days,
            registered_at: view.registered_at,
        }
    }
}

/// 集計レスポンス（GET /summary）
#[derive(Debug, Serialize, Deserialize)]
pub struct FleetSummaryResponse {
    pub total_vehicles: usize,
    pub available_vehicles: usize,
    pub rented_vehicles: usize,
    pub registered_bookings: usize,
}

impl From<FleetSummary> for FleetSummaryResponse {
    fn from(summary: FleetSummary) -> Self {
        Self {
            total_vehicles: summary.total_vehicles,
            available_vehicles: summary.available_vehicles,
            rented_vehicles: summary.rented_vehicles,
            registered_bookings: summary.registered_bookings,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UnavailableVehicleResponse {
    pub vehicle: VehicleResponse,
    pub current_booking: Option<BookingResponse>,
}

impl From<UnavailableVehicle> for UnavailableVehicleResponse {
    fn from(unavailable: UnavailableVehicle) -> Self {
        Self {
            vehicle: VehicleResponse::from(unavailable.vehicle),
            current_booking: unavailable.current_booking.map(BookingResponse::from),
        }
    }
}

/// 空き状況レスポンス（GET /availability）
#[derive(Debug, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub total_vehicles: usize,
    pub available: Vec<VehicleResponse>,
    pub unavailable: Vec<UnavailableVehicleResponse>,
}

impl From<AvailabilityReport> for AvailabilityResponse {
    fn from(report: AvailabilityReport) -> Self {
        Self {
            start: report.period.start(),
            end: report.period.end(),
            total_vehicles: report.total_vehicles,
            available: report.available.into_iter().map(VehicleResponse::from).collect(),
            unavailable: report
                .unavailable
                .into_iter()
                .map(UnavailableVehicleResponse::from)
                .collect(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
