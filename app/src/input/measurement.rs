use super::{InputErrorKind, Measurement};

const MIN_TEMPERATURE: f64 = -20.0;
const MAX_TEMPERATURE: f64 = 60.0;

/// Parses a raw value and checks it against the accepted range of the
/// measurement: temperature within [-20, 60] °C, relative humidity strictly
/// between 0 and 100 %.
pub fn parse_measurement(value: Option<&str>, measurement: Measurement) -> Result<f64, InputErrorKind> {
    let value = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(InputErrorKind::Missing),
    };

    let parsed: f64 = match value.parse() {
        Ok(v) if f64::is_finite(v) => v,
        _ => return Err(InputErrorKind::NotANumber(value.to_string())),
    };

    let in_range = match measurement {
        Measurement::Temperature => (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&parsed),
        Measurement::Humidity => parsed > 0.0 && parsed < 100.0,
    };

    if in_range {
        Ok(parsed)
    } else {
        Err(InputErrorKind::OutOfRange(parsed))
    }
}
