use chrono::{DateTime, Utc};

use crate::domain::{
    self, Booking, BookingId, Customer, DateRange, EngineType, LicensePlate, Vehicle,
};

use super::errors::{RentalApplicationError, Result};
use super::rental_service::{RentalContext, ServiceDependencies};

/// 車両の概要（予約一覧・予約票用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleSummary {
    pub brand: String,
    pub model: String,
    pub plate: LicensePlate,
    pub engine_type: EngineType,
}

impl From<&Vehicle> for VehicleSummary {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            plate: vehicle.plate.clone(),
            engine_type: vehicle.engine_type,
        }
    }
}

/// 予約ビュー
///
/// 台帳の1件を表示用に非正規化したもの。`number`は台帳内の1始まりの位置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingView {
    pub number: usize,
    pub booking_id: BookingId,
    pub customer: Customer,
    pub plate: LicensePlate,
    /// フリートに存在しないプレートを参照している場合は`None`
    pub vehicle: Option<VehicleSummary>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_days: i64,
    pub registered_at: DateTime<Utc>,
}

/// フリート全体の集計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetSummary {
    pub total_vehicles: usize,
    pub available_vehicles: usize,
    pub rented_vehicles: usize,
    pub registered_bookings: usize,
}

/// 貸出不可の車両と、その原因になっている現在の予約
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnavailableVehicle {
    pub vehicle: Vehicle,
    /// 参照先の予約が台帳にない場合は`None`
    pub current_booking: Option<BookingView>,
}

/// 指定期間の空き状況
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityReport {
    pub period: DateRange,
    pub total_vehicles: usize,
    pub available: Vec<Vehicle>,
    pub unavailable: Vec<UnavailableVehicle>,
}

fn build_booking_view(deps: &ServiceDependencies, number: usize, booking: &Booking) -> BookingView {
    BookingView {
        number,
        booking_id: booking.booking_id,
        customer: booking.customer.clone(),
        plate: booking.plate.clone(),
        vehicle: deps
            .fleet_registry
            .find_by_plate(&booking.plate)
            .map(VehicleSummary::from),
        start: booking.start(),
        end: booking.end(),
        duration_days: booking.duration_days(),
        registered_at: booking.registered_at,
    }
}

/// 台帳内の位置（1始まり）を添えて予約ビューを作る
fn view_by_id(deps: &ServiceDependencies, booking_id: BookingId) -> Option<BookingView> {
    deps.booking_ledger
        .all()
        .iter()
        .enumerate()
        .find(|(_, booking)| booking.booking_id == booking_id)
        .map(|(i, booking)| build_booking_view(deps, i + 1, booking))
}

/// すべての予約を登録順に取得する
pub fn list_bookings(ctx: &RentalContext) -> Result<Vec<BookingView>> {
    let deps = ctx.read()?;
    Ok(deps
        .booking_ledger
        .all()
        .iter()
        .enumerate()
        .map(|(i, booking)| build_booking_view(&deps, i + 1, booking))
        .collect())
}

/// IDで予約票を取得する
///
/// # エラー
/// - BookingNotFound: 台帳に存在しない
pub fn get_booking(ctx: &RentalContext, booking_id: BookingId) -> Result<BookingView> {
    let deps = ctx.read()?;
    view_by_id(&deps, booking_id).ok_or(RentalApplicationError::BookingNotFound)
}

/// フリート全体の集計を取得する
///
/// 貸出可能数は「全車両数 − 貸出中フラグの立っている車両数」。
pub fn fleet_summary(ctx: &RentalContext) -> Result<FleetSummary> {
    let deps = ctx.read()?;
    let vehicles = deps.fleet_registry.list_all();
    let total_vehicles = vehicles.len();
    let rented_vehicles = vehicles.iter().filter(|v| v.is_rented()).count();

    Ok(FleetSummary {
        total_vehicles,
        available_vehicles: total_vehicles - rented_vehicles,
        rented_vehicles,
        registered_bookings: deps.booking_ledger.len(),
    })
}

/// 指定期間の空き状況を取得する
///
/// 貸出可能な車両と、貸出不可の車両（現在の予約の情報付き）に分ける。
/// どちらもフリート登録順。
pub fn availability_report(ctx: &RentalContext, period: &DateRange) -> Result<AvailabilityReport> {
    let deps = ctx.read()?;
    let vehicles = deps.fleet_registry.list_all();

    let (available, unavailable): (Vec<&Vehicle>, Vec<&Vehicle>) = vehicles
        .iter()
        .partition(|v| domain::booking::is_available(v, deps.active_booking(v), period));

    let unavailable = unavailable
        .into_iter()
        .map(|vehicle| UnavailableVehicle {
            vehicle: vehicle.clone(),
            current_booking: vehicle
                .current_booking()
                .and_then(|booking_id| view_by_id(&deps, booking_id)),
        })
        .collect();

    Ok(AvailabilityReport {
        period: *period,
        total_vehicles: vehicles.len(),
        available: available.into_iter().cloned().collect(),
        unavailable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::rental::register_booking;
    use crate::domain::commands::RegisterBooking;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, d, 0, 0, 0).unwrap()
    }

    fn range(start: u32, end: u32) -> DateRange {
        DateRange::new(day(start), day(end)).unwrap()
    }

    fn command(name: &str, plate: &str, start: u32, end: u32) -> RegisterBooking {
        RegisterBooking {
            customer: Customer {
                name: name.to_string(),
                surname: "Fernández".to_string(),
                address: "Calle Luna 7".to_string(),
                national_id: "33333333P".to_string(),
                email: "cliente@example.com".to_string(),
                phone: "644555666".to_string(),
                payment_method: "card".to_string(),
            },
            plate: LicensePlate::new(plate),
            period: range(start, end),
            registered_at: day(1),
        }
    }

    #[test]
    fn test_list_bookings_empty() {
        let ctx = RentalContext::in_memory();
        assert!(list_bookings(&ctx).unwrap().is_empty());
    }

    #[test]
    fn test_list_bookings_numbered_in_registration_order() {
        let ctx = RentalContext::in_memory();
        register_booking(&ctx, command("Luis", "0003CDE", 2, 9)).unwrap();
        register_booking(&ctx, command("Elena", "0001ABC", 10, 15)).unwrap();

        let bookings = list_bookings(&ctx).unwrap();

        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].number, 1);
        assert_eq!(bookings[0].customer.full_name(), "Luis Fernández");
        assert_eq!(bookings[0].duration_days, 7);
        assert_eq!(
            bookings[0].vehicle.as_ref().map(|v| v.model.as_str()),
            Some("Golf")
        );
        assert_eq!(bookings[1].number, 2);
        assert_eq!(bookings[1].plate, LicensePlate::new("0001ABC"));
        assert_eq!(bookings[1].start, day(10));
        assert_eq!(bookings[1].end, day(15));
    }

    #[test]
    fn test_get_booking() {
        let ctx = RentalContext::in_memory();
        register_booking(&ctx, command("Luis", "0003CDE", 2, 9)).unwrap();
        let booking_id = register_booking(&ctx, command("Elena", "0004DEF", 10, 15)).unwrap();

        let view = get_booking(&ctx, booking_id).unwrap();

        assert_eq!(view.number, 2);
        assert_eq!(view.booking_id, booking_id);
        assert_eq!(view.customer.name, "Elena");
        assert_eq!(
            view.vehicle.map(|v| v.engine_type),
            Some(EngineType::Electric)
        );
    }

    #[test]
    fn test_get_booking_not_found() {
        let ctx = RentalContext::in_memory();
        let result = get_booking(&ctx, BookingId::new());
        assert!(matches!(result, Err(RentalApplicationError::BookingNotFound)));
    }

    #[test]
    fn test_fleet_summary() {
        let ctx = RentalContext::in_memory();
        register_booking(&ctx, command("Luis", "0001ABC", 2, 9)).unwrap();
        register_booking(&ctx, command("Luis", "0001ABC", 10, 12)).unwrap();
        register_booking(&ctx, command("Elena", "0002BCD", 10, 15)).unwrap();

        let summary = fleet_summary(&ctx).unwrap();

        assert_eq!(
            summary,
            FleetSummary {
                total_vehicles: 4,
                available_vehicles: 2,
                rented_vehicles: 2,
                registered_bookings: 3,
            }
        );
    }

    #[test]
    fn test_availability_report_annotates_unavailable_vehicles() {
        let ctx = RentalContext::in_memory();
        let booking_id = register_booking(&ctx, command("Elena", "0002BCD", 10, 15)).unwrap();

        let report = availability_report(&ctx, &range(12, 14)).unwrap();

        assert_eq!(report.total_vehicles, 4);
        assert_eq!(report.available.len(), 3);
        assert_eq!(report.unavailable.len(), 1);

        let blocked = &report.unavailable[0];
        assert_eq!(blocked.vehicle.plate, LicensePlate::new("0002BCD"));
        let current = blocked.current_booking.as_ref().unwrap();
        assert_eq!(current.booking_id, booking_id);
        assert_eq!(current.customer.full_name(), "Elena Fernández");
    }

    #[test]
    fn test_availability_report_after_active_booking() {
        let ctx = RentalContext::in_memory();
        register_booking(&ctx, command("Elena", "0002BCD", 10, 15)).unwrap();

        let report = availability_report(&ctx, &range(15, 20)).unwrap();

        assert_eq!(report.available.len(), 4);
        assert!(report.unavailable.is_empty());
    }
}
