use crate::dates::parse_date;
use crate::guidelines::Region;
use chrono::NaiveDate;
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub assessment: AssessmentConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let reference_date = match env::var("APP_REFERENCE_DATE") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                parse_date(raw.trim()).ok_or(ConfigError::InvalidReferenceDate { value: raw })?,
            ),
            _ => None,
        };

        let default_region = match env::var("APP_DEFAULT_REGION") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                Region::from_value(&raw)
                    .map_err(|_| ConfigError::UnknownRegion { value: raw.clone() })?
                    .value
                    .to_string(),
            ),
            _ => None,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            assessment: AssessmentConfig {
                reference_date,
                default_region,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings applied to each assessment.
#[derive(Debug, Clone, Default)]
pub struct AssessmentConfig {
    /// Pins "today" instead of reading the local clock.
    pub reference_date: Option<NaiveDate>,
    /// Region selector value used when none is given.
    pub default_region: Option<String>,
}

impl AssessmentConfig {
    pub fn today_or(&self, fallback: NaiveDate) -> NaiveDate {
        self.reference_date.unwrap_or(fallback)
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidReferenceDate { value: String },
    UnknownRegion { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidReferenceDate { value } => {
                write!(
                    f,
                    "APP_REFERENCE_DATE must be a DD/MM/YYYY date, got '{value}'"
                )
            }
            ConfigError::UnknownRegion { value } => {
                write!(f, "APP_DEFAULT_REGION '{value}' is not a supported region")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_REFERENCE_DATE");
        env::remove_var("APP_DEFAULT_REGION");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.assessment.reference_date, None);
        assert_eq!(config.assessment.default_region, None);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn reads_reference_date_and_region() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("APP_REFERENCE_DATE", "15/06/2025");
        env::set_var("APP_DEFAULT_REGION", "Slovakia");

        let config = AppConfig::load().expect("config loads");

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(
            config.assessment.reference_date,
            NaiveDate::from_ymd_opt(2025, 6, 15)
        );
        assert_eq!(
            config.assessment.default_region.as_deref(),
            Some("slovakia")
        );
        reset_env();
    }

    #[test]
    fn rejects_malformed_reference_date() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_REFERENCE_DATE", "2025-06-15");

        let err = AppConfig::load().expect_err("iso date is rejected");

        assert!(matches!(err, ConfigError::InvalidReferenceDate { .. }));
        reset_env();
    }

    #[test]
    fn rejects_unknown_default_region() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_DEFAULT_REGION", "narnia");

        let err = AppConfig::load().expect_err("unknown region is rejected");

        assert_eq!(
            err.to_string(),
            "APP_DEFAULT_REGION 'narnia' is not a supported region"
        );
        reset_env();
    }
}
