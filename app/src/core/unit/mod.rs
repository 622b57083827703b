mod degree_celsius;
mod density;
mod percent;

pub use degree_celsius::DegreeCelsius;
pub use density::GramPerCubicMeter;
pub use percent::Percent;

#[cfg(test)]
macro_rules! v {
    ($x:literal C) => {
        $crate::core::unit::DegreeCelsius($x as f64)
    };
    ($x:literal %) => {
        $crate::core::unit::Percent($x as f64)
    };
    ($x:literal g) => {
        $crate::core::unit::GramPerCubicMeter($x as f64)
    };
}

#[cfg(test)]
pub(crate) use v;
