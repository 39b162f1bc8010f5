use thiserror::Error;

/// Ошибки обработки пользовательского ввода в шапке дашборда
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("slider value '{0}' is not a non-negative integer")]
    InvalidSliderValue(String),

    #[error("'{0}' is not a recognised date")]
    InvalidDate(String),

    #[error("date index {index} is out of range for {len} available dates")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("country '{0}' is not in the selector entries")]
    UnknownCountry(String),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
