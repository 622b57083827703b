use crate::core::unit::{DegreeCelsius, GramPerCubicMeter, Percent};

use super::{Reading, ReadingWithAbsoluteHumidity, SystemValues};

// Molecular weight of water vapor (kg/kmol)
const MW: f64 = 18.016;
// Universal gas constant (J/(kmol*K))
const GK: f64 = 8314.3;
// Saturation vapor pressure at 0°C (hPa)
const SDD_0: f64 = 6.1078;

/// Magnus coefficients `(a, b)`, over water at or above 0°C and over ice below.
fn magnus_coefficients(temperature: DegreeCelsius) -> (f64, f64) {
    if temperature.0 >= 0.0 { (7.5, 237.3) } else { (7.6, 240.7) }
}

/// Temperature dependent factor of the saturation vapor pressure, `10^(a*T/(b+T))`.
fn saturation_factor(temperature: DegreeCelsius) -> f64 {
    let (a, b) = magnus_coefficients(temperature);
    let t = temperature.0;

    10f64.powf((a * t) / (b + t))
}

/// Absolute humidity in g/m³ using the Magnus approximation.
///
/// c.f. https://www.wetterochs.de/wetter/feuchte.html
pub fn absolute_humidity(reading: &Reading) -> GramPerCubicMeter {
    let r: f64 = reading.relative_humidity.into();

    // Saturation Vapor Pressure (hPa)
    let sdd = SDD_0 * saturation_factor(reading.temperature);

    // Vapor Pressure (hPa)
    let dd = sdd * (r / 100.0);

    let v = 10f64.powi(5) * MW / GK * dd / reading.temperature.to_kelvin();
    GramPerCubicMeter(v)
}

pub fn with_absolute_humidity(reading: Reading) -> ReadingWithAbsoluteHumidity {
    ReadingWithAbsoluteHumidity {
        temperature: reading.temperature,
        relative_humidity: reading.relative_humidity,
        absolute_humidity: absolute_humidity(&reading),
    }
}

/// Relative humidity the exterior air would have when brought to interior
/// temperature, keeping its absolute humidity.
pub fn rescale_exterior_to_interior_temperature(system: &SystemValues<Reading>) -> Percent {
    let interior = &system.interior;
    let exterior = &system.exterior;

    let pressure_ratio = saturation_factor(exterior.temperature) / saturation_factor(interior.temperature);
    let kelvin_ratio = interior.temperature.to_kelvin() / exterior.temperature.to_kelvin();

    exterior.relative_humidity * pressure_ratio * kelvin_ratio
}
