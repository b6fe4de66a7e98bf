use thiserror::Error;

use crate::domain::LicensePlate;

/// 予約管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum RentalApplicationError {
    /// ナンバープレートに一致する車両がない
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(LicensePlate),

    /// 指定期間は貸出不可
    #[error("Vehicle {0} is not available for the requested dates")]
    VehicleNotAvailable(LicensePlate),

    /// 予約が見つからない
    #[error("Booking not found")]
    BookingNotFound,

    /// 共有状態のロックが汚染されている
    #[error("Rental state lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, RentalApplicationError>;
