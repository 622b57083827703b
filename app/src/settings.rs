use anyhow::bail;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use infrastructure::MonitoringConfig;
use serde::Deserialize;

use crate::adapter::PreferencesConfig;
use crate::input::RawReadings;
use crate::report::OutputFormat;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Option<String>,
    pub output: OutputFormat,
    pub readings: RawReadings,
    pub preferences: PreferencesConfig,
    pub monitoring: MonitoringConfig,
}

impl Settings {
    pub fn new(overrides: &[(String, String)]) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("lueften").required(false))
            .add_source(environment());

        Self::with_overrides(builder, overrides)
    }

    fn with_overrides(
        mut builder: ConfigBuilder<DefaultState>,
        overrides: &[(String, String)],
    ) -> Result<Self, ConfigError> {
        for (key, value) in overrides {
            builder = builder.set_override(key.as_str(), value.as_str())?;
        }

        builder.build()?.try_deserialize()
    }
}

/// `LUEFTEN_READINGS__INTERIOR__TEMPERATURE` maps to `readings.interior.temperature`.
fn environment() -> Environment {
    Environment::with_prefix("LUEFTEN")
        .prefix_separator("_")
        .separator("__")
}

/// Turns `key=value` arguments into config overrides. `interior.*` and
/// `exterior.*` are shorthands for `readings.interior.*` and
/// `readings.exterior.*`.
pub fn parse_overrides<I>(args: I) -> anyhow::Result<Vec<(String, String)>>
where
    I: IntoIterator<Item = String>,
{
    let mut overrides = vec![];

    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            bail!("Invalid argument '{}', expected key=value", arg);
        };

        let key = key.trim().to_lowercase();
        if key.is_empty() {
            bail!("Invalid argument '{}', key is empty", arg);
        }

        let key = if key.starts_with("interior.") || key.starts_with("exterior.") {
            format!("readings.{key}")
        } else {
            key
        };

        overrides.push((key, value.to_string()));
    }

    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;
    use crate::input::{Location, Measurement};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_configuration_uses_defaults() {
        let settings = Settings::with_overrides(Config::builder(), &[]).unwrap();

        assert_eq!(settings.language, None);
        assert_eq!(settings.output, OutputFormat::Text);
        assert_eq!(settings.readings.get(Location::Interior, Measurement::Temperature), None);
        assert_eq!(settings.monitoring.logs.default_level, "warn");
        assert!(!settings.monitoring.json);
    }

    #[test]
    fn test_config_file_values() {
        let toml = r#"
            language = "de"
            output = "json"

            [readings.interior]
            temperature = 22
            humidity = "60"

            [preferences]
            file = "/tmp/lueften/language"

            [monitoring.logs]
            default_level = "debug"
            filters = ["config=warn"]
        "#;

        let builder = Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
        let settings = Settings::with_overrides(builder, &[]).unwrap();

        assert_eq!(settings.language.as_deref(), Some("de"));
        assert_eq!(settings.output, OutputFormat::Json);
        assert_eq!(settings.readings.get(Location::Interior, Measurement::Temperature), Some("22"));
        assert_eq!(settings.readings.get(Location::Interior, Measurement::Humidity), Some("60"));
        assert_eq!(settings.readings.get(Location::Exterior, Measurement::Humidity), None);
        assert_eq!(settings.preferences.file.to_str(), Some("/tmp/lueften/language"));
        assert_eq!(settings.monitoring.logs.filters, vec!["config=warn".to_string()]);
    }

    #[test]
    fn test_overrides_win_over_file() {
        let toml = r#"
            [readings.exterior]
            temperature = "5"
        "#;

        let overrides = parse_overrides(args(&["exterior.temperature=7.5", "Language=en"])).unwrap();
        let builder = Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
        let settings = Settings::with_overrides(builder, &overrides).unwrap();

        assert_eq!(settings.readings.get(Location::Exterior, Measurement::Temperature), Some("7.5"));
        assert_eq!(settings.language.as_deref(), Some("en"));
    }

    #[test]
    fn test_environment_variables() {
        let toml = r#"
            [readings.interior]
            temperature = "22"
        "#;

        let mut env = config::Map::new();
        env.insert("LUEFTEN_READINGS__INTERIOR__TEMPERATURE".to_string(), "18".to_string());
        env.insert("LUEFTEN_READINGS__EXTERIOR__HUMIDITY".to_string(), "75".to_string());
        env.insert("LUEFTEN_LANGUAGE".to_string(), "de".to_string());
        env.insert("READINGS__EXTERIOR__TEMPERATURE".to_string(), "3".to_string());

        let builder = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .add_source(environment().source(Some(env)));
        let settings = Settings::with_overrides(builder, &[]).unwrap();

        assert_eq!(settings.readings.get(Location::Interior, Measurement::Temperature), Some("18"));
        assert_eq!(settings.readings.get(Location::Exterior, Measurement::Humidity), Some("75"));
        assert_eq!(settings.readings.get(Location::Exterior, Measurement::Temperature), None);
        assert_eq!(settings.language.as_deref(), Some("de"));
    }

    #[test]
    fn test_parse_overrides() {
        let overrides = parse_overrides(args(&["interior.humidity=55", "output=json", "readings.exterior.humidity= 80"])).unwrap();

        assert_eq!(
            overrides,
            vec![
                ("readings.interior.humidity".to_string(), "55".to_string()),
                ("output".to_string(), "json".to_string()),
                ("readings.exterior.humidity".to_string(), " 80".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_overrides_rejects_malformed_arguments() {
        assert!(parse_overrides(args(&["interior.humidity"])).is_err());
        assert!(parse_overrides(args(&["=55"])).is_err());
    }
}
