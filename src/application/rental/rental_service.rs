use crate::adapters::in_memory;
use crate::domain::{
    self, BookVehicleError, Booking, BookingId, DateRange, LicensePlate, Vehicle,
    commands::RegisterBooking,
};
use crate::ports::*;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{RentalApplicationError, Result};

/// サービスの依存関係
///
/// フリート登録簿と予約台帳。車両の貸出状態は両者で共有されるため、
/// 必ず`RentalContext`のロック越しに扱う。
pub struct ServiceDependencies {
    pub fleet_registry: Box<dyn FleetRegistry>,
    pub booking_ledger: Box<dyn BookingLedger>,
}

impl ServiceDependencies {
    /// 固定フリートと空の台帳で初期化する
    pub fn in_memory() -> Self {
        Self {
            fleet_registry: Box::new(in_memory::FleetRegistry::standard()),
            booking_ledger: Box::new(in_memory::BookingLedger::new()),
        }
    }

    /// 車両が参照している現在の予約を台帳から引く
    pub(super) fn active_booking(&self, vehicle: &Vehicle) -> Option<&Booking> {
        vehicle
            .current_booking()
            .and_then(|booking_id| self.booking_ledger.get(booking_id))
    }

    /// 指定期間に貸出可能な車両（フリート登録順）
    pub(super) fn available_vehicles(&self, period: &DateRange) -> Vec<&Vehicle> {
        self.fleet_registry
            .list_all()
            .iter()
            .filter(|v| domain::booking::is_available(v, self.active_booking(v), period))
            .collect()
    }
}

/// 予約管理のコンテキスト
///
/// プロセスごとに1つ作成し、すべての操作に明示的に渡す。
/// 参照系は読み取りロックを共有し、予約登録は書き込みロックを
/// 「検索 → 貸出可能性確認 → 追記 + 状態更新」の間ずっと保持する。
pub struct RentalContext {
    deps: RwLock<ServiceDependencies>,
}

impl RentalContext {
    pub fn new(deps: ServiceDependencies) -> Self {
        Self {
            deps: RwLock::new(deps),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(ServiceDependencies::in_memory())
    }

    pub(super) fn read(&self) -> Result<RwLockReadGuard<'_, ServiceDependencies>> {
        self.deps
            .read()
            .map_err(|_| RentalApplicationError::LockPoisoned("read"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ServiceDependencies>> {
        self.deps
            .write()
            .map_err(|_| RentalApplicationError::LockPoisoned("write"))
    }
}

impl Default for RentalContext {
    fn default() -> Self {
        Self::in_memory()
    }
}

/// すべての車両を作成順に取得する
pub fn list_vehicles(ctx: &RentalContext) -> Result<Vec<Vehicle>> {
    let deps = ctx.read()?;
    Ok(deps.fleet_registry.list_all().to_vec())
}

/// ナンバープレートで車両を取得する
///
/// # エラー
/// - VehicleNotFound: 完全一致する車両がない
pub fn find_vehicle(ctx: &RentalContext, plate: &LicensePlate) -> Result<Vehicle> {
    let deps = ctx.read()?;
    deps.fleet_registry
        .find_by_plate(plate)
        .cloned()
        .ok_or_else(|| RentalApplicationError::VehicleNotFound(plate.clone()))
}

/// 指定期間に貸出可能な車両を取得する
///
/// ビジネスルール：
/// - 貸出中でない車両は含める
/// - 貸出中の車両は、現在の予約1件と重ならなければ含める
///
/// 結果はフリート登録順。
pub fn available_vehicles(ctx: &RentalContext, period: &DateRange) -> Result<Vec<Vehicle>> {
    let deps = ctx.read()?;
    let vehicles: Vec<Vehicle> = deps
        .available_vehicles(period)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(
        start = %period.start(),
        end = %period.end(),
        available = vehicles.len(),
        "Computed vehicle availability"
    );

    Ok(vehicles)
}

/// 貸出中フラグが立っている車両を取得する（フリート登録順）
pub fn rented_vehicles(ctx: &RentalContext) -> Result<Vec<Vehicle>> {
    let deps = ctx.read()?;
    Ok(deps
        .fleet_registry
        .list_all()
        .iter()
        .filter(|v| v.is_rented())
        .cloned()
        .collect())
}

/// 車両を予約する
///
/// ビジネスルール：
/// - 車両が存在すること
/// - 指定期間に車両が貸出可能であること（UIで表示した一覧は信用せず、ここで再計算する）
///
/// # 一貫性保証
///
/// 検索から状態更新まで書き込みロックを保持するため、同じ車両・重なる期間への
/// 同時登録はどちらか一方だけが成功する。台帳への追記と車両状態の更新は
/// 失敗しうる処理をすべて終えてから行う。
///
/// # 戻り値
/// 成功時は作成された予約のID
pub fn register_booking(ctx: &RentalContext, cmd: RegisterBooking) -> Result<BookingId> {
    let mut guard = ctx.write()?;
    let deps = &mut *guard;

    // 1. 車両の存在確認
    let Some(vehicle) = deps.fleet_registry.find_by_plate(&cmd.plate) else {
        tracing::warn!(plate = %cmd.plate, "Booking rejected: vehicle not found");
        return Err(RentalApplicationError::VehicleNotFound(cmd.plate));
    };

    // 2. 貸出可能性の再確認とドメイン層の純粋関数の呼び出し
    //    (available_vehicles に含まれる ⇔ is_available が真)
    let booking = domain::booking::book_vehicle(
        vehicle,
        deps.active_booking(vehicle),
        cmd.customer,
        cmd.period,
        cmd.registered_at,
    )
    .map_err(|e| match e {
        BookVehicleError::VehicleNotAvailable => {
            tracing::warn!(
                plate = %cmd.plate,
                start = %cmd.period.start(),
                end = %cmd.period.end(),
                "Booking rejected: vehicle not available"
            );
            RentalApplicationError::VehicleNotAvailable(cmd.plate.clone())
        }
    })?;

    // 3. 台帳への追記と車両状態の更新
    let booking_id = booking.booking_id;
    let vehicle = deps
        .fleet_registry
        .find_by_plate_mut(&booking.plate)
        .ok_or_else(|| RentalApplicationError::VehicleNotFound(booking.plate.clone()))?;

    tracing::info!(
        booking_id = %booking_id.value(),
        plate = %booking.plate,
        start = %booking.start(),
        end = %booking.end(),
        "Booking registered"
    );

    deps.booking_ledger.append(booking);
    vehicle.mark_rented(booking_id);

    Ok(booking_id)
}
