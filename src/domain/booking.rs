use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookVehicleError, BookingId, Customer, DateRange, LicensePlate, Vehicle};

/// 予約 - 1人の顧客による1台の車両の1回の貸出
///
/// 作成後は変更されない。車両への参照はナンバープレートのみ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: BookingId,
    pub customer: Customer,
    pub plate: LicensePlate,
    pub period: DateRange,
    pub registered_at: DateTime<Utc>,
}

impl Booking {
    pub fn start(&self) -> DateTime<Utc> {
        self.period.start()
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.period.end()
    }

    pub fn duration_days(&self) -> i64 {
        self.period.duration_days()
    }
}

/// 純粋関数：指定期間に車両が貸出可能か
///
/// ビジネスルール：
/// - 貸出中でない車両は常に貸出可能
/// - 貸出中の車両は、現在の予約1件とだけ重なり判定する（過去の予約履歴は見ない）
/// - 貸出中なのに現在の予約が見つからない場合は貸出不可として扱う
///
/// `active_booking`には`vehicle.current_booking()`が指す予約を渡す。
pub fn is_available(vehicle: &Vehicle, active_booking: Option<&Booking>, period: &DateRange) -> bool {
    if !vehicle.is_rented() {
        return true;
    }

    match active_booking {
        Some(active) => !active.period.overlaps(period),
        None => false,
    }
}

/// 純粋関数：車両を予約する
///
/// ビジネスルール：
/// - 指定期間が現在の予約と重なる場合は予約不可
///
/// 副作用なし。新しいBookingを返す。台帳への追記と車両の状態変更は呼び出し側が行う。
pub fn book_vehicle(
    vehicle: &Vehicle,
    active_booking: Option<&Booking>,
    customer: Customer,
    period: DateRange,
    registered_at: DateTime<Utc>,
) -> Result<Booking, BookVehicleError> {
    if !is_available(vehicle, active_booking, &period) {
        return Err(BookVehicleError::VehicleNotAvailable);
    }

    Ok(Booking {
        booking_id: BookingId::new(),
        customer,
        plate: vehicle.plate.clone(),
        period,
        registered_at,
    })
}
