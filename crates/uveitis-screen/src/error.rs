use crate::config::ConfigError;
use crate::guidelines::{GuidelineError, IntakeError};
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Guideline(GuidelineError),
    Intake(IntakeError),
    Usage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Json(err) => write!(f, "invalid patient record: {}", err),
            AppError::Guideline(err) => write!(f, "guideline error: {}", err),
            AppError::Intake(err) => write!(f, "incomplete assessment: {}", err),
            AppError::Usage(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Guideline(err) => Some(err),
            AppError::Intake(err) => Some(err),
            AppError::Usage(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<GuidelineError> for AppError {
    fn from(value: GuidelineError) -> Self {
        Self::Guideline(value)
    }
}

impl From<IntakeError> for AppError {
    fn from(value: IntakeError) -> Self {
        Self::Intake(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidelines::QuestionKey;
    use std::error::Error;

    #[test]
    fn wraps_domain_errors_with_context() {
        let err = AppError::from(IntakeError::Missing(QuestionKey::AnaPositive));
        assert_eq!(
            err.to_string(),
            "incomplete assessment: Antinuclear Antibody (ANA) is required"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn unknown_region_reads_naturally() {
        let err = AppError::from(GuidelineError::UnknownRegion("mars".to_string()));
        assert_eq!(err.to_string(), "guideline error: unknown region 'mars'");
    }
}
