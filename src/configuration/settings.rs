use crate::configuration::constants::environment;
use crate::configuration::constants::report;
use config::{Config, ConfigError, Environment};
use serde_derive::Deserialize;

/// Process-wide switches consumed by the extension. The only source is the
/// environment: `TESTCASES_REPORT_ENABLED` maps to the `report.enabled` key.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    #[serde(
        default = "ReportSettings::enabled_by_default",
        deserialize_with = "crate::configuration::deserialize::boolean_string::deserialize"
    )]
    pub enabled: bool,
}

impl Settings {
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Config::new();
        config.set_default(report::ENABLED_KEY, report::ENABLED_DEFAULT)?;
        config.merge(
            Environment::with_prefix(environment::PREFIX).separator(environment::SEPARATOR),
        )?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.try_into()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            report: ReportSettings::default(),
        }
    }
}

impl ReportSettings {
    fn enabled_by_default() -> bool {
        true
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod test {
    use super::Settings;
    use crate::configuration::constants::report;
    use config::Config;

    fn settings_with(value: &str) -> Settings {
        let mut config = Config::new();
        config.set(report::ENABLED_KEY, value).unwrap();
        Settings::from_config(config).unwrap()
    }

    #[test]
    fn test_reporting_is_enabled_by_default() {
        let mut config = Config::new();
        config
            .set_default(report::ENABLED_KEY, report::ENABLED_DEFAULT)
            .unwrap();
        let settings = Settings::from_config(config).unwrap();

        assert!(settings.report.enabled);
    }

    #[test]
    fn test_boolean_parsing_ignores_case() {
        assert!(settings_with("true").report.enabled);
        assert!(settings_with("TRUE").report.enabled);
        assert!(settings_with("True").report.enabled);
        assert!(!settings_with("false").report.enabled);
        assert!(!settings_with("FALSE").report.enabled);
    }

    #[test]
    fn test_unrecognized_value_disables_reporting() {
        assert!(!settings_with("yes").report.enabled);
        assert!(!settings_with("1").report.enabled);
        assert!(!settings_with("").report.enabled);
    }

    #[test]
    fn test_default_settings_enable_reporting() {
        assert!(Settings::default().report.enabled);
    }
}
