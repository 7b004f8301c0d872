use crate::define_index_newtype;

use super::units::LitersPerKm;

define_index_newtype!(VehicleIdx, Vehicle);

#[derive(Debug, Clone)]
pub struct Vehicle {
    external_id: String,
    name: String,
    capacity: f64,
    fuel_rate: LitersPerKm,
}

impl Vehicle {
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Capacity in the same units as delivery demand.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn fuel_rate(&self) -> LitersPerKm {
        self.fuel_rate
    }
}

#[derive(Default)]
pub struct VehicleBuilder {
    external_id: Option<String>,
    name: Option<String>,
    capacity: Option<f64>,
    fuel_rate: Option<f64>,
}

impl VehicleBuilder {
    pub fn set_vehicle_id(&mut self, external_id: String) -> &mut VehicleBuilder {
        self.external_id = Some(external_id);
        self
    }

    pub fn set_name(&mut self, name: String) -> &mut VehicleBuilder {
        self.name = Some(name);
        self
    }

    pub fn set_capacity(&mut self, capacity: f64) -> &mut VehicleBuilder {
        self.capacity = Some(capacity);
        self
    }

    pub fn set_fuel_rate(&mut self, fuel_rate: f64) -> &mut VehicleBuilder {
        self.fuel_rate = Some(fuel_rate);
        self
    }

    pub fn build(self) -> Vehicle {
        let external_id = self.external_id.expect("External ID is required");
        let name = self.name.unwrap_or_else(|| external_id.clone());

        Vehicle {
            external_id,
            name,
            capacity: self.capacity.unwrap_or(0.0),
            fuel_rate: LitersPerKm::new(self.fuel_rate.unwrap_or(0.0)),
        }
    }
}
