mod monitoring;

pub use monitoring::{EnvFilterConfig, MonitoringConfig};
