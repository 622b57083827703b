use crate::climate::{Amount, MightGetMore, Recommendation, VentilationDuration};
use crate::input::{InputError, InputErrorKind, Location, Measurement};

use super::{Language, Localization, LocalizedString};

impl Localization {
    pub fn recommendation_message(&self, recommendation: &Recommendation) -> String {
        match self.language {
            Language::En => english_recommendation(recommendation),
            Language::De => german_recommendation(recommendation),
        }
    }

    pub fn input_error_message(&self, error: &InputError) -> String {
        let location = self.label(match error.location {
            Location::Interior => LocalizedString::Interior,
            Location::Exterior => LocalizedString::Exterior,
        });
        let measurement = self.label(match error.measurement {
            Measurement::Temperature => LocalizedString::Temperature,
            Measurement::Humidity => LocalizedString::Humidity,
        });

        let problem = match (self.language, &error.kind) {
            (Language::En, InputErrorKind::Missing) => "no value".to_string(),
            (Language::De, InputErrorKind::Missing) => "kein Wert".to_string(),
            (Language::En, InputErrorKind::NotANumber(raw)) => format!("'{raw}' is not a number"),
            (Language::De, InputErrorKind::NotANumber(raw)) => format!("'{raw}' ist keine Zahl"),
            (Language::En, InputErrorKind::OutOfRange(value)) => {
                format!("{value} is out of range ({})", allowed_range(self.language, error.measurement))
            }
            (Language::De, InputErrorKind::OutOfRange(value)) => {
                format!(
                    "{value} liegt außerhalb des gültigen Bereichs ({})",
                    allowed_range(self.language, error.measurement)
                )
            }
        };

        format!("{location} {measurement}: {problem}")
    }
}

fn allowed_range(language: Language, measurement: Measurement) -> &'static str {
    match (language, measurement) {
        (Language::En, Measurement::Temperature) => "-20 to 60 °C",
        (Language::En, Measurement::Humidity) => "above 0 and below 100 %RH",
        (Language::De, Measurement::Temperature) => "-20 bis 60 °C",
        (Language::De, Measurement::Humidity) => "über 0 und unter 100 %RH",
    }
}

fn english_recommendation(recommendation: &Recommendation) -> String {
    match recommendation {
        Recommendation::NotRequired => "No (no ventilating needed)".to_string(),
        Recommendation::NotUseful => "No (ventilating would not be useful)".to_string(),
        Recommendation::ShouldVentilate {
            might_get_more,
            might_get_more_amount,
            duration,
        } => {
            let mut message = "Should ventilate".to_string();

            match duration {
                VentilationDuration::Brief => message.push_str(" (briefly)"),
                VentilationDuration::VeryBrief => message.push_str(" (very briefly)"),
                VentilationDuration::Normal => {}
            }

            match might_get_more {
                MightGetMore::Humid => {
                    let amount = match might_get_more_amount {
                        Amount::ALot => "a lot",
                        _ => "somewhat",
                    };
                    message.push_str(&format!(" (but it might get {amount} more humid)"));
                }
                MightGetMore::Warm => message.push_str(" (but it might get warmer)"),
                MightGetMore::None => {}
            }

            message
        }
    }
}

fn german_recommendation(recommendation: &Recommendation) -> String {
    match recommendation {
        Recommendation::NotRequired => "Nein (etwa gleiche Feuchtigkeiten innen und außen)".to_string(),
        Recommendation::NotUseful => "Nicht lüften".to_string(),
        Recommendation::ShouldVentilate {
            might_get_more,
            might_get_more_amount,
            duration,
        } => {
            let mut message = match duration {
                VentilationDuration::Brief => "Kurzes Lüften möglich",
                VentilationDuration::VeryBrief => "Sehr kurzes Lüften möglich",
                VentilationDuration::Normal => "Lüften",
            }
            .to_string();

            match might_get_more {
                MightGetMore::Humid => {
                    let amount = match might_get_more_amount {
                        Amount::ALot => "viel",
                        _ => "etwas",
                    };
                    message.push_str(&format!(", aber es wird dadurch {amount} feuchter"));
                }
                MightGetMore::Warm => message.push_str(", aber es wird dadurch wärmer"),
                MightGetMore::None => {}
            }

            message
        }
    }
}
