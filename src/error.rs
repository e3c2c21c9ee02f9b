use reqwest::StatusCode;
use thiserror::Error;

pub const DEFAULT_FAILURE_MESSAGE: &str = "Gagal membuat jadwal";

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("{message}")]
    Server { status: StatusCode, message: String },

    #[error("respons bukan JSON yang valid: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("respons tidak berisi jadwal")]
    MissingSchedule,

    #[error("konfigurasi tidak valid: {0}")]
    Config(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl ScheduleError {
    /// Builds the error for a non-2xx response, falling back to the generic
    /// message when the body has no usable `error` string.
    pub fn server(status: StatusCode, message: Option<&str>) -> Self {
        let message = match message {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => DEFAULT_FAILURE_MESSAGE.to_string(),
        };
        ScheduleError::Server { status, message }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ScheduleError::Server { status, .. } => Some(*status),
            ScheduleError::Network(e) => e.status(),
            _ => None,
        }
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_uses_body_message() {
        let err = ScheduleError::server(StatusCode::BAD_REQUEST, Some("Invalid goal"));
        assert_eq!(err.to_string(), "Invalid goal");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn server_error_falls_back_to_generic_message() {
        let err = ScheduleError::server(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(err.to_string(), DEFAULT_FAILURE_MESSAGE);

        let err = ScheduleError::server(StatusCode::INTERNAL_SERVER_ERROR, Some(""));
        assert_eq!(err.to_string(), DEFAULT_FAILURE_MESSAGE);
    }
}
