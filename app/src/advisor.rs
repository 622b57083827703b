use std::io::Write;

use anyhow::{Context as _, Result, anyhow};

use crate::climate::{Recommendation, SystemState, recommend};
use crate::input::acquire;
use crate::localization::{Language, Localization};
use crate::port::LanguagePreferenceStore;
use crate::report::{OutputFormat, Report};
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Recommended(Recommendation),
    /// At least one value was not provided, nothing to show.
    Incomplete,
    /// At least one provided value could not be used.
    InvalidInput,
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Recommended(_) | Outcome::Incomplete => 0,
            Outcome::InvalidInput => 2,
        }
    }
}

/// Picks the explicitly requested language, else the stored preference, else
/// the default. Language changes from here on are written to the store.
pub fn resolve_language<S>(requested: Option<&str>, store: S) -> Result<Localization>
where
    S: LanguagePreferenceStore + 'static,
{
    let requested = requested
        .map(|code| Language::from_code(code).ok_or_else(|| anyhow!("Unsupported language '{}'", code)))
        .transpose()?;

    let stored = store.load()?;
    let mut localization = Localization::new(stored.unwrap_or_default());

    localization.add_listener(move |language| store.save(language));

    if let Some(language) = requested {
        if stored != Some(language) {
            localization
                .set_language(language)
                .context("Error persisting language preference")?;
        }
    }

    Ok(localization)
}

pub fn run<S, O, E>(settings: &Settings, store: S, out: &mut O, err: &mut E) -> Result<Outcome>
where
    S: LanguagePreferenceStore + 'static,
    O: Write,
    E: Write,
{
    let localization = resolve_language(settings.language.as_deref(), store)?;

    let readings = match acquire(&settings.readings) {
        Ok(readings) => readings,
        Err(errors) => {
            if !errors.has_reportable() {
                tracing::info!("Not all values provided, skipping computation");
                return Ok(Outcome::Incomplete);
            }

            for error in errors.reportable() {
                writeln!(err, "{}", localization.input_error_message(error))?;
            }
            return Ok(Outcome::InvalidInput);
        }
    };

    let state = SystemState::from_readings(readings);
    let recommendation = recommend(&state);

    tracing::debug!(
        "Interior {}/{}/{}, exterior {}/{}/{}: {:?}",
        state.interior.temperature,
        state.interior.relative_humidity,
        state.interior.absolute_humidity,
        state.exterior.temperature,
        state.exterior.relative_humidity,
        state.exterior.absolute_humidity,
        recommendation
    );

    let report = Report::new(&localization, &state, recommendation);
    write!(out, "{}", report.render(settings.output)?)?;
    if settings.output == OutputFormat::Json {
        writeln!(out)?;
    }

    Ok(Outcome::Recommended(recommendation))
}
