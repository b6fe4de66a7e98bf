use serde::{Deserialize, Serialize};

/// 顧客 - 予約ごとに新しく作成される
///
/// 重複排除や書式チェックは行わない。入力値の検証は呼び出し側（API層）の責務。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub surname: String,
    pub address: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub payment_method: String,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}
