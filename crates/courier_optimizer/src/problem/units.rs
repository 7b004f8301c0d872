use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Meters(f64);

impl Meters {
    pub const ZERO: Meters = Meters(0.0);

    pub fn new(value: f64) -> Self {
        Meters(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn kilometers(&self) -> f64 {
        self.0 / 1000.0
    }
}

impl PartialOrd for Meters {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Meters {
    type Output = Meters;

    fn add(self, other: Meters) -> Meters {
        Meters(self.0 + other.0)
    }
}

impl AddAssign for Meters {
    fn add_assign(&mut self, other: Meters) {
        self.0 += other.0;
    }
}

impl Sum for Meters {
    fn sum<I: Iterator<Item = Meters>>(iter: I) -> Meters {
        iter.fold(Meters::ZERO, |acc, x| acc + x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Liters(f64);

impl Liters {
    pub const ZERO: Liters = Liters(0.0);

    pub fn new(value: f64) -> Self {
        Liters(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Add for Liters {
    type Output = Liters;

    fn add(self, other: Liters) -> Liters {
        Liters(self.0 + other.0)
    }
}

impl AddAssign for Liters {
    fn add_assign(&mut self, other: Liters) {
        self.0 += other.0;
    }
}

impl Sum for Liters {
    fn sum<I: Iterator<Item = Liters>>(iter: I) -> Liters {
        iter.fold(Liters::ZERO, |acc, x| acc + x)
    }
}

/// Fuel consumption rate in liters per kilometer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LitersPerKm(f64);

impl LitersPerKm {
    pub fn new(value: f64) -> Self {
        LitersPerKm(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn fuel_for(&self, distance: Meters) -> Liters {
        Liters(distance.kilometers() * self.0)
    }
}
