use thiserror::Error;

/// Errors raised inside the AI-access layer.
///
/// These never reach UI callers of [`crate::GenAi`]; they are reduced to a
/// [`FailureReason`] for diagnostics and the caller sees an empty list.
#[derive(Debug, Error)]
pub enum GenaiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No API key was configured, so the request was never sent.
    #[error("no Gemini API key configured")]
    MissingApiKey,

    /// The provider rejected the credential (401/403).
    #[error("Gemini rejected the API key (HTTP {status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// Any other non-2xx status from the provider.
    #[error("unexpected HTTP status {status} from Gemini: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// A body could not be parsed as JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON that does not have the requested shape.
    #[error("response for {context} does not match the expected shape: {reason}")]
    ShapeMismatch { context: String, reason: String },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Coarse classification of a [`GenaiError`], logged when a call degrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    Transport,
    Auth,
    Malformed,
    ShapeMismatch,
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::Transport => write!(f, "transport"),
            FailureReason::Auth => write!(f, "auth"),
            FailureReason::Malformed => write!(f, "malformed"),
            FailureReason::ShapeMismatch => write!(f, "shape_mismatch"),
        }
    }
}

impl GenaiError {
    #[must_use]
    pub fn reason(&self) -> FailureReason {
        match self {
            GenaiError::Http(_)
            | GenaiError::UnexpectedStatus { .. }
            | GenaiError::InvalidBaseUrl { .. } => FailureReason::Transport,
            GenaiError::MissingApiKey | GenaiError::Unauthorized { .. } => FailureReason::Auth,
            GenaiError::Deserialize { .. } => FailureReason::Malformed,
            GenaiError::ShapeMismatch { .. } => FailureReason::ShapeMismatch,
        }
    }
}
