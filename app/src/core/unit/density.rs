use std::fmt::Display;

use derive_more::AsRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsRef, Serialize, Deserialize)]
pub struct GramPerCubicMeter(pub f64);

impl GramPerCubicMeter {
    pub fn abs_diff(self, other: Self) -> f64 {
        (self.0 - other.0).abs()
    }
}

impl From<&GramPerCubicMeter> for f64 {
    fn from(value: &GramPerCubicMeter) -> Self {
        value.0
    }
}

impl From<f64> for GramPerCubicMeter {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<GramPerCubicMeter> for f64 {
    fn from(value: GramPerCubicMeter) -> Self {
        value.0
    }
}

impl Display for GramPerCubicMeter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} g/m³", self.0)
    }
}
