use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::climate::{ReadingWithAbsoluteHumidity, Recommendation, SystemState};
use crate::localization::{Language, Localization, LocalizedString};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub language: Language,
    pub message: String,
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub interior: ReadingWithAbsoluteHumidity,
    pub exterior: ReadingWithAbsoluteHumidity,
    #[serde(skip)]
    labels: Labels,
}

/// Text of the active language, resolved once when the report is built.
#[derive(Debug, Clone)]
struct Labels {
    site_title: &'static str,
    language_selectors: String,
    interior: &'static str,
    exterior: &'static str,
    temperature: &'static str,
    humidity: &'static str,
    absolute_humidity: &'static str,
}

impl Labels {
    fn new(localization: &Localization) -> Self {
        Self {
            site_title: localization.label(LocalizedString::SiteTitle),
            language_selectors: localization.language_selectors(),
            interior: localization.label(LocalizedString::Interior),
            exterior: localization.label(LocalizedString::Exterior),
            temperature: localization.label(LocalizedString::Temperature),
            humidity: localization.label(LocalizedString::Humidity),
            absolute_humidity: localization.label(LocalizedString::AbsoluteHumidity),
        }
    }
}

impl Report {
    pub fn new(localization: &Localization, state: &SystemState, recommendation: Recommendation) -> Self {
        Self {
            language: localization.language(),
            message: localization.recommendation_message(&recommendation),
            recommendation,
            interior: state.interior,
            exterior: state.exterior,
            labels: Labels::new(localization),
        }
    }

    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()?),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn to_text(&self) -> Result<String, std::fmt::Error> {
        let mut text = String::new();

        writeln!(text, "{}", self.labels.site_title)?;
        writeln!(text, "{}", self.labels.language_selectors)?;
        writeln!(text)?;
        writeln!(text, "{}", self.message)?;

        for (location, reading) in [
            (self.labels.interior, &self.interior),
            (self.labels.exterior, &self.exterior),
        ] {
            writeln!(text)?;
            writeln!(text, "{location}")?;
            self.write_reading(&mut text, reading)?;
        }

        Ok(text)
    }

    fn write_reading(&self, text: &mut String, reading: &ReadingWithAbsoluteHumidity) -> std::fmt::Result {
        writeln!(text, "  {}: {}", self.labels.temperature, reading.temperature)?;
        writeln!(text, "  {}: {:.1} %RH", self.labels.humidity, reading.relative_humidity.0)?;
        writeln!(text, "  {}: {}", self.labels.absolute_humidity, reading.absolute_humidity)
    }
}
