use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the booking library
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Invalid time label: {0:?}")]
    #[diagnostic(
        code(cita::invalid_format),
        help("expected a label like \"9:00 AM\" or \"1:00 PM\"")
    )]
    InvalidFormat(String),

    #[error("Invalid date: {0:?}")]
    #[diagnostic(code(cita::invalid_date), help("dates use the YYYY-MM-DD format"))]
    InvalidDate(String),

    #[error("Date {0} is in the past")]
    #[diagnostic(code(cita::date_in_past))]
    DateInPast(String),

    #[error("Missing required fields: {}", .0.join(", "))]
    #[diagnostic(code(cita::missing_fields))]
    MissingFields(Vec<&'static str>),

    #[error("Unknown service: {0}")]
    #[diagnostic(code(cita::unknown_service))]
    UnknownService(String),

    #[error("Backend error ({status}): {message}")]
    #[diagnostic(code(cita::backend))]
    Backend { status: u16, message: String },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(cita::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(cita::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(cita::serialization))]
    Serialization(String),
}

impl Error {
    /// Message shown to the person filling in the booking form
    pub fn user_message(&self) -> String {
        match self {
            Error::MissingFields(_) => MISSING_FIELDS_MESSAGE.to_string(),
            Error::Backend { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Shown when any booking form field is left empty
pub const MISSING_FIELDS_MESSAGE: &str = "Favor de llenar todos los campos requeridos.";

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type BookingResult<T> = Result<T, Error>;

/// Helper to create time label errors
pub fn invalid_format_error(label: &str) -> Error {
    Error::InvalidFormat(label.to_string())
}

/// Helper to create backend errors
pub fn backend_error(status: u16, message: &str) -> Error {
    Error::Backend {
        status,
        message: message.to_string(),
    }
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}
