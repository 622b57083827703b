mod measurement;

use derive_more::derive::{Display, Error};
use r#macro::EnumVariants;
use serde::Deserialize;

use crate::climate::{Reading, SystemValues};
use crate::core::unit::{DegreeCelsius, Percent};

pub use measurement::parse_measurement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumVariants, Display)]
pub enum Location {
    Interior,
    Exterior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumVariants, Display)]
pub enum Measurement {
    Temperature,
    Humidity,
}

/// Unparsed values as they come from the settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawReadings {
    pub interior: RawReading,
    pub exterior: RawReading,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawReading {
    pub temperature: Option<String>,
    pub humidity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum InputErrorKind {
    #[display("no value")]
    Missing,
    #[display("'{_0}' is not a number")]
    NotANumber(String),
    #[display("{_0} is out of range")]
    OutOfRange(f64),
}

#[derive(Debug, Clone, PartialEq, Display, Error)]
#[display("{location} {measurement}: {kind}")]
pub struct InputError {
    pub location: Location,
    pub measurement: Measurement,
    pub kind: InputErrorKind,
}

#[derive(Debug, Clone, PartialEq, Display, Error)]
#[display("invalid input: {}", join_errors(errors))]
pub struct InputErrors {
    #[error(not(source))]
    pub errors: Vec<InputError>,
}

fn join_errors(errors: &[InputError]) -> String {
    errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(", ")
}

impl InputError {
    /// Only values that were entered but are unusable get reported, a missing
    /// value silently suppresses the result.
    pub fn is_reportable(&self) -> bool {
        !matches!(self.kind, InputErrorKind::Missing)
    }
}

impl InputErrors {
    pub fn reportable(&self) -> impl Iterator<Item = &InputError> {
        self.errors.iter().filter(|e| e.is_reportable())
    }

    pub fn has_reportable(&self) -> bool {
        self.reportable().next().is_some()
    }
}

impl RawReadings {
    pub fn get(&self, location: Location, measurement: Measurement) -> Option<&str> {
        let reading = match location {
            Location::Interior => &self.interior,
            Location::Exterior => &self.exterior,
        };

        let value = match measurement {
            Measurement::Temperature => &reading.temperature,
            Measurement::Humidity => &reading.humidity,
        };

        value.as_deref()
    }
}

/// Validates all fields and builds both readings. Any invalid field
/// suppresses the whole result.
pub fn acquire(raw: &RawReadings) -> Result<SystemValues<Reading>, InputErrors> {
    let mut errors = vec![];
    let mut values = [[0.0; 2]; 2];

    for (li, location) in Location::variants().iter().enumerate() {
        for (mi, measurement) in Measurement::variants().iter().enumerate() {
            match parse_measurement(raw.get(*location, *measurement), *measurement) {
                Ok(value) => values[li][mi] = value,
                Err(kind) => {
                    tracing::debug!("Rejected {} {}: {}", location, measurement, kind);
                    errors.push(InputError {
                        location: *location,
                        measurement: *measurement,
                        kind,
                    });
                }
            }
        }
    }

    if !errors.is_empty() {
        return Err(InputErrors { errors });
    }

    let reading = |li: usize| Reading::new(DegreeCelsius(values[li][0]), Percent(values[li][1]));

    Ok(SystemValues {
        interior: reading(0),
        exterior: reading(1),
    })
}
