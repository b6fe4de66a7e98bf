use std::fmt;

/// 期間のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// 終了日時が開始日時より後ではない
    EndNotAfterStart,
}

impl fmt::Display for DateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRangeError::EndNotAfterStart => f.write_str("end must be after start"),
        }
    }
}

/// 予約作成のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookVehicleError {
    /// 指定期間が現在の予約と重なっている
    VehicleNotAvailable,
}
