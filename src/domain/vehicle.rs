use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BookingId, LicensePlate};

/// エンジン種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineType {
    Petrol,
    Hybrid,
    Electric,
}

impl EngineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineType::Petrol => "petrol",
            EngineType::Hybrid => "hybrid",
            EngineType::Electric => "electric",
        }
    }
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 車両の貸出状態
///
/// 不変条件：貸出中のときだけ現在の予約への参照を持つ。
/// 参照の有無と貸出フラグが食い違う状態は型で表現できない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    Rented { booking_id: BookingId },
}

/// 車両 - 固定フリートの1台
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub brand: String,
    pub model: String,
    pub plate: LicensePlate,
    pub engine_type: EngineType,
    #[serde(flatten)]
    pub status: VehicleStatus,
}

impl Vehicle {
    /// 新規作成（貸出可能状態）
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        plate: impl Into<LicensePlate>,
        engine_type: EngineType,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            plate: plate.into(),
            engine_type,
            status: VehicleStatus::Available,
        }
    }

    pub fn is_rented(&self) -> bool {
        matches!(self.status, VehicleStatus::Rented { .. })
    }

    /// 現在の予約ID（貸出中のときのみ）
    pub fn current_booking(&self) -> Option<BookingId> {
        match self.status {
            VehicleStatus::Available => None,
            VehicleStatus::Rented { booking_id } => Some(booking_id),
        }
    }

    /// 貸出中にし、現在の予約を差し替える
    ///
    /// 貸出中から貸出可能に戻す操作は存在しない。
    pub fn mark_rented(&mut self, booking_id: BookingId) {
        self.status = VehicleStatus::Rented { booking_id };
    }

    /// 選択肢用のキー（例: `Renault Clio | 0001ABC`）
    pub fn selection_key(&self) -> String {
        format!("{} {} | {}", self.brand, self.model, self.plate)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) - {}",
            self.brand, self.model, self.plate, self.engine_type
        )
    }
}

/// 固定フリート（起動時に一度だけ作成される4台）
pub fn standard_fleet() -> Vec<Vehicle> {
    vec![
        Vehicle::new("Renault", "Clio", "0001ABC", EngineType::Petrol),
        Vehicle::new("Seat", "Ibiza", "0002BCD", EngineType::Petrol),
        Vehicle::new("Volkswagen", "Golf", "0003CDE", EngineType::Hybrid),
        Vehicle::new("Toyota", "Corolla", "0004DEF", EngineType::Electric),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_fleet_has_four_available_vehicles() {
        let fleet = standard_fleet();
        assert_eq!(fleet.len(), 4);
        assert!(fleet.iter().all(|v| !v.is_rented()));
        assert!(fleet.iter().all(|v| v.current_booking().is_none()));
    }

    #[test]
    fn test_standard_fleet_order_and_plates() {
        let fleet = standard_fleet();
        let plates: Vec<&str> = fleet.iter().map(|v| v.plate.as_str()).collect();
        assert_eq!(plates, vec!["0001ABC", "0002BCD", "0003CDE", "0004DEF"]);
    }

    #[test]
    fn test_mark_rented_sets_reference() {
        let mut vehicle = Vehicle::new("Seat", "Ibiza", "0002BCD", EngineType::Petrol);
        let booking_id = BookingId::new();

        vehicle.mark_rented(booking_id);

        assert!(vehicle.is_rented());
        assert_eq!(vehicle.current_booking(), Some(booking_id));
    }

    #[test]
    fn test_mark_rented_replaces_previous_reference() {
        let mut vehicle = Vehicle::new("Seat", "Ibiza", "0002BCD", EngineType::Petrol);
        let first = BookingId::new();
        let second = BookingId::new();

        vehicle.mark_rented(first);
        vehicle.mark_rented(second);

        assert_eq!(vehicle.current_booking(), Some(second));
    }

    #[test]
    fn test_display_and_selection_key() {
        let vehicle = Vehicle::new("Toyota", "Corolla", "0004DEF", EngineType::Electric);
        assert_eq!(vehicle.to_string(), "Toyota Corolla (0004DEF) - electric");
        assert_eq!(vehicle.selection_key(), "Toyota Corolla | 0004DEF");
    }
}
