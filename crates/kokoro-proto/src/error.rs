//! Error types shared by the client, the journal store and the mood selector.

use std::fmt;

/// Which external service a request went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Chat,
    Predict,
}

impl Service {
    pub fn name(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Predict => "predict",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chat => f.write_str("Chat"),
            Self::Predict => f.write_str("Predict"),
        }
    }
}

/// A failed call to the chat or prediction service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The service answered with a non-2xx status.
    #[error("{service} API error: {status}")]
    Status { service: Service, status: u16 },

    /// The request never produced a response (refused, reset, timed out).
    #[error("{service} API unreachable: {source}")]
    Transport {
        service: Service,
        #[source]
        source: reqwest::Error,
    },

    /// The body could not be read as the expected JSON shape.
    #[error("{service} API returned an unreadable response: {source}")]
    Decode {
        service: Service,
        #[source]
        source: reqwest::Error,
    },

    /// The prediction service answered `success: false`.
    #[error("Failed to get music recommendations")]
    Rejected { service: Service },
}

impl ServiceError {
    pub fn service(&self) -> Service {
        match self {
            Self::Status { service, .. }
            | Self::Transport { service, .. }
            | Self::Decode { service, .. }
            | Self::Rejected { service } => *service,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error on {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("Please write something before adding!")]
    Empty,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoodError {
    #[error("Please select a mood first!")]
    NothingSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_mentions_code() {
        let err = ServiceError::Status {
            service: Service::Chat,
            status: 500,
        };
        assert_eq!(err.to_string(), "Chat API error: 500");
        assert_eq!(err.service(), Service::Chat);
    }

    #[test]
    fn test_rejected_is_predict_failure() {
        let err = ServiceError::Rejected {
            service: Service::Predict,
        };
        assert_eq!(err.service().name(), "predict");
        assert!(err.to_string().contains("music recommendations"));
    }
}
