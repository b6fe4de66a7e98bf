use crate::domain::{LicensePlate, Vehicle, vehicle::standard_fleet};
use crate::ports::fleet_registry::FleetRegistry as FleetRegistryTrait;

/// FleetRegistryのインメモリ実装
///
/// 起動時に渡された車両を作成順のまま保持する。
pub struct FleetRegistry {
    vehicles: Vec<Vehicle>,
}

impl FleetRegistry {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    /// 固定の4台で初期化する
    pub fn standard() -> Self {
        Self::new(standard_fleet())
    }
}

impl Default for FleetRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl FleetRegistryTrait for FleetRegistry {
    fn list_all(&self) -> &[Vehicle] {
        &self.vehicles
    }

    fn find_by_plate(&self, plate: &LicensePlate) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| &v.plate == plate)
    }

    fn find_by_plate_mut(&mut self, plate: &LicensePlate) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| &v.plate == plate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookingId;

    #[test]
    fn test_standard_registry_lists_four_vehicles_in_order() {
        let registry = FleetRegistry::standard();
        let brands: Vec<&str> = registry.list_all().iter().map(|v| v.brand.as_str()).collect();
        assert_eq!(brands, vec!["Renault", "Seat", "Volkswagen", "Toyota"]);
    }

    #[test]
    fn test_find_by_plate_found() {
        let registry = FleetRegistry::standard();
        let vehicle = registry.find_by_plate(&LicensePlate::new("0003CDE"));
        assert_eq!(vehicle.map(|v| v.model.as_str()), Some("Golf"));
    }

    #[test]
    fn test_find_by_plate_not_found() {
        let registry = FleetRegistry::standard();
        assert!(registry.find_by_plate(&LicensePlate::new("9999ZZZ")).is_none());
        // 完全一致のみ
        assert!(registry.find_by_plate(&LicensePlate::new("0003cde")).is_none());
    }

    #[test]
    fn test_find_by_plate_mut_updates_status() {
        let mut registry = FleetRegistry::standard();
        let plate = LicensePlate::new("0002BCD");
        let booking_id = BookingId::new();

        registry.find_by_plate_mut(&plate).unwrap().mark_rented(booking_id);

        let vehicle = registry.find_by_plate(&plate).unwrap();
        assert_eq!(vehicle.current_booking(), Some(booking_id));
    }
}
