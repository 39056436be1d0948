use thiserror::Error;

/// Message shown to the user for any failed generation attempt.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate menu. Please try again.";

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Missing credential for provider {provider}: set {env_var} or provider.api_key")]
    MissingCredential { provider: String, env_var: String },

    #[error("Provider request failed: {0}")]
    ProviderError(#[from] reqwest::Error),

    #[error("Provider returned HTTP {status}: {message}")]
    RemoteError { status: u16, message: String },

    #[error("Malformed provider response at '{field}': {reason}")]
    MalformedResponse { field: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration '{field}'")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Credential,
    Provider,
    Response,
    Io,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MenuError {
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        MenuError::MalformedResponse {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            MenuError::MissingCredential { .. } => ErrorCategory::Credential,
            MenuError::ProviderError(_) | MenuError::RemoteError { .. } => ErrorCategory::Provider,
            MenuError::MalformedResponse { .. } => ErrorCategory::Response,
            MenuError::IoError(_) | MenuError::SerializationError(_) => ErrorCategory::Io,
            MenuError::ConfigValidationError { .. }
            | MenuError::InvalidConfigValueError { .. }
            | MenuError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Provider | ErrorCategory::Response => ErrorSeverity::Medium,
            ErrorCategory::Credential | ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// True for the three ways a generation attempt can fail.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Credential | ErrorCategory::Provider | ErrorCategory::Response
        )
    }

    pub fn user_friendly_message(&self) -> String {
        if self.is_generation_failure() {
            return GENERATION_FAILED_MESSAGE.to_string();
        }
        match self {
            MenuError::IoError(e) => format!("Could not write menu output: {}", e),
            MenuError::SerializationError(e) => format!("Could not serialize menu: {}", e),
            other => format!("Invalid configuration: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MenuError::MissingCredential { .. } => {
                "Export GEMINI_API_KEY (or API_KEY) or set provider.api_key in the config file"
            }
            MenuError::ProviderError(_) => "Check network connectivity and the provider endpoint",
            MenuError::RemoteError { status, .. } if *status == 401 || *status == 403 => {
                "Verify that the API key is valid and has access to the model"
            }
            MenuError::RemoteError { .. } => "The provider rejected the request; try again later",
            MenuError::MalformedResponse { .. } => {
                "The provider returned an unexpected payload; generate again"
            }
            MenuError::IoError(_) => "Check that the output directory is writable",
            MenuError::SerializationError(_) => "Check the menu file for invalid JSON",
            MenuError::ConfigValidationError { .. }
            | MenuError::InvalidConfigValueError { .. }
            | MenuError::MissingConfigError { .. } => "Fix the configuration file or CLI flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
