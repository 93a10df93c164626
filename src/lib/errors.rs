use std::fmt;

/// Frontend error taxonomy. `Config` covers programmer and setup mistakes
/// (an accessor used outside its provider, a broken request builder); the
/// remaining variants map network and API failures. Per-field validation
/// problems are plain strings and never reach this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Configuration error: {message}"),
            AppError::Network(message) => write!(formatter, "{message}"),
            AppError::Timeout(message) => write!(formatter, "{message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => write!(formatter, "Request error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn display_includes_http_status() {
        let err = AppError::Http {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (401): Invalid credentials");
    }
}
