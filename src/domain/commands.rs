use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Customer, DateRange, LicensePlate};

/// コマンド：車両を予約する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterBooking {
    pub customer: Customer,
    pub plate: LicensePlate,
    pub period: DateRange,
    pub registered_at: DateTime<Utc>,
}
