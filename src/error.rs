/// All errors that can occur while talking to the results service or
/// preparing data for it.
#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read or decode the response body.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// Season or client configuration is unusable.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The service refused a registration.
    #[error("registration rejected: {message}")]
    Rejected { message: String },

    /// A registration form failed validation before being sent.
    #[error("invalid registration field `{field}`: {reason}")]
    InvalidRegistration {
        field: &'static str,
        reason: &'static str,
    },
}

pub(crate) const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
pub(crate) const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

impl ResultsError {
    /// Whether the error came from the transport rather than from the data.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            ResultsError::Http { .. }
                | ResultsError::UnexpectedStatus { .. }
                | ResultsError::ResponseBody { .. }
        )
    }

    /// The message to show next to the control that triggered the failure.
    pub fn user_message(&self) -> String {
        match self {
            ResultsError::Rejected { message } => message.clone(),
            ResultsError::InvalidRegistration { reason, .. } => (*reason).to_string(),
            ResultsError::Configuration(message) => message.clone(),
            _ => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResultsError>;
