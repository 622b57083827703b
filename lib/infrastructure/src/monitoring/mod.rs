use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

//Logs go to stderr, stdout is reserved for the computed result

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub logs: EnvFilterConfig,
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnvFilterConfig {
    pub default_level: String,
    pub filters: Vec<String>,
}

impl Default for EnvFilterConfig {
    fn default() -> Self {
        Self {
            default_level: "warn".to_string(),
            filters: vec![],
        }
    }
}

impl TryInto<EnvFilter> for EnvFilterConfig {
    type Error = tracing_subscriber::filter::ParseError;

    fn try_into(self) -> Result<EnvFilter, Self::Error> {
        EnvFilter::builder()
            .with_default_directive(self.default_level.parse()?)
            .parse(self.filters.join(","))
    }
}

impl MonitoringConfig {
    pub fn init(&self) -> anyhow::Result<()> {
        let logging_filter: EnvFilter = self.logs.clone().try_into()?;

        if self.json {
            let fmt_layer = tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(fmt_layer)
                .with(logging_filter)
                .try_init()?;
        } else {
            let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(fmt_layer)
                .with(logging_filter)
                .try_init()?;
        }

        tracing::debug!("Logging initialized with {:?}", self.logs);
        Ok(())
    }
}
