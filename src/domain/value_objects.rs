use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::DateRangeError;

/// 予約ID - 予約台帳の中で予約を一意に識別する
///
/// 車両は予約そのものではなく、このIDだけを保持する（弱参照）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(Uuid);

impl BookingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

/// ナンバープレート - 車両の識別子
///
/// 比較は文字列の完全一致。正規化（大文字化・空白除去）は行わない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicensePlate(String);

impl LicensePlate {
    pub fn new(plate: impl Into<String>) -> Self {
        Self(plate.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LicensePlate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LicensePlate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// 貸出期間 `[start, end)`
///
/// 不変条件：end は start より厳密に後。
/// コンストラクタでこの制約を強制し、不正な期間を作成できないようにする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// デシリアライズ時もコンストラクタを通すための中間型
#[derive(Deserialize)]
struct RawDateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = DateRangeError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// # エラー
    /// end が start 以前の場合は`DateRangeError::EndNotAfterStart`を返す
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, DateRangeError> {
        if end <= start {
            return Err(DateRangeError::EndNotAfterStart);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// 期間の長さ（日数、端数切り捨て）
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// 半開区間同士の重なり判定
    ///
    /// 重ならない ⇔ `other.end <= self.start || other.start >= self.end`。
    /// 終了日と開始日が一致するだけなら重ならない。
    pub fn overlaps(&self, other: &DateRange) -> bool {
        !(other.end <= self.start || other.start >= self.end)
    }
}
