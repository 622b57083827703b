use std::fmt::Display;

use derive_more::derive::AsRef;
use serde::{Deserialize, Serialize};

const ZERO_CELSIUS_IN_KELVIN: f64 = 273.15;

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, AsRef, Serialize, Deserialize)]
pub struct DegreeCelsius(pub f64);

impl DegreeCelsius {
    pub fn to_kelvin(self) -> f64 {
        self.0 + ZERO_CELSIUS_IN_KELVIN
    }
}

impl From<&DegreeCelsius> for f64 {
    fn from(value: &DegreeCelsius) -> Self {
        value.0
    }
}

impl From<f64> for DegreeCelsius {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<DegreeCelsius> for f64 {
    fn from(value: DegreeCelsius) -> Self {
        value.0
    }
}

impl Display for DegreeCelsius {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} °C", self.0)
    }
}

impl std::ops::Sub for DegreeCelsius {
    type Output = DegreeCelsius;

    fn sub(self, rhs: Self) -> Self::Output {
        DegreeCelsius(self.0 - rhs.0)
    }
}
