mod humidity;
mod recommendation;

use serde::Serialize;

use crate::core::unit::{DegreeCelsius, GramPerCubicMeter, Percent};

pub use humidity::{absolute_humidity, rescale_exterior_to_interior_temperature, with_absolute_humidity};
pub use recommendation::{Amount, MightGetMore, Recommendation, VentilationDuration, recommend};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    pub temperature: DegreeCelsius,
    pub relative_humidity: Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReadingWithAbsoluteHumidity {
    pub temperature: DegreeCelsius,
    pub relative_humidity: Percent,
    pub absolute_humidity: GramPerCubicMeter,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemValues<T> {
    pub interior: T,
    pub exterior: T,
}

pub type SystemState = SystemValues<ReadingWithAbsoluteHumidity>;

impl Reading {
    pub fn new(temperature: DegreeCelsius, relative_humidity: Percent) -> Self {
        Self {
            temperature,
            relative_humidity,
        }
    }
}

impl ReadingWithAbsoluteHumidity {
    pub fn reading(&self) -> Reading {
        Reading::new(self.temperature, self.relative_humidity)
    }
}

impl<T> SystemValues<T> {
    pub fn map<U>(self, f: impl Fn(T) -> U) -> SystemValues<U> {
        SystemValues {
            interior: f(self.interior),
            exterior: f(self.exterior),
        }
    }
}

impl SystemState {
    pub fn from_readings(readings: SystemValues<Reading>) -> Self {
        readings.map(with_absolute_humidity)
    }

    pub fn readings(&self) -> SystemValues<Reading> {
        SystemValues {
            interior: self.interior.reading(),
            exterior: self.exterior.reading(),
        }
    }
}
