use std::{
    f64,
    fmt::Display,
    ops::{Mul, Sub},
};

use derive_more::derive::AsRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsRef, Serialize, Deserialize)]
pub struct Percent(pub f64);

impl Percent {
    /// Rounds to the nearest whole percent, halfway cases away from zero.
    pub fn round(self) -> Self {
        Self(self.0.round())
    }
}

impl From<&Percent> for f64 {
    fn from(value: &Percent) -> Self {
        value.0
    }
}

impl From<f64> for Percent {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Percent> for f64 {
    fn from(value: Percent) -> Self {
        value.0
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} %", self.0)
    }
}

impl std::ops::Add for Percent {
    type Output = Percent;

    fn add(self, rhs: Self) -> Self::Output {
        Percent(self.0 + rhs.0)
    }
}

impl Sub for Percent {
    type Output = Percent;

    fn sub(self, rhs: Self) -> Self::Output {
        Percent(self.0 - rhs.0)
    }
}

impl Mul<f64> for Percent {
    type Output = Percent;

    fn mul(self, rhs: f64) -> Self::Output {
        Percent(self.0 * rhs)
    }
}

impl Mul<Percent> for f64 {
    type Output = Percent;

    fn mul(self, rhs: Percent) -> Self::Output {
        Percent(self * rhs.0)
    }
}
