use crate::define_index_newtype;

use super::{location::Location, time_window::TimeWindow};

define_index_newtype!(DeliveryIdx, Delivery);

/// A delivery point with the demand it places on whichever vehicle serves it.
#[derive(Debug, Clone)]
pub struct Delivery {
    external_id: String,
    location: Location,
    demand: f64,
    label: Option<String>,
    time_window: Option<TimeWindow>,
}

impl Delivery {
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn demand(&self) -> f64 {
        self.demand
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn time_window(&self) -> Option<&TimeWindow> {
        self.time_window.as_ref()
    }
}

#[derive(Default)]
pub struct DeliveryBuilder {
    external_id: Option<String>,
    location: Option<Location>,
    demand: Option<f64>,
    label: Option<String>,
    time_window: Option<TimeWindow>,
}

impl DeliveryBuilder {
    pub fn set_external_id(&mut self, external_id: String) -> &mut DeliveryBuilder {
        self.external_id = Some(external_id);
        self
    }

    pub fn set_location(&mut self, location: Location) -> &mut DeliveryBuilder {
        self.location = Some(location);
        self
    }

    pub fn set_demand(&mut self, demand: f64) -> &mut DeliveryBuilder {
        self.demand = Some(demand);
        self
    }

    pub fn set_label(&mut self, label: String) -> &mut DeliveryBuilder {
        self.label = Some(label);
        self
    }

    pub fn set_time_window(&mut self, time_window: TimeWindow) -> &mut DeliveryBuilder {
        self.time_window = Some(time_window);
        self
    }

    pub fn build(self) -> Delivery {
        Delivery {
            external_id: self.external_id.expect("External ID is required"),
            location: self.location.expect("Location is required"),
            demand: self.demand.unwrap_or(0.0),
            label: self.label,
            time_window: self.time_window,
        }
    }
}
