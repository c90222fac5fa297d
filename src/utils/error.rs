use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Provider request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("{message}")]
    InvalidRequest { message: String },

    #[error("Invalid {field}. Allowed: {}", .allowed.join(", "))]
    InvalidOption {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("{message}")]
    EmptyGeneration { message: String },

    #[error("{message}")]
    ProviderError { message: String },

    #[error("Failed to generate {what}: {message}")]
    GenerationFailed { what: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Provider,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::InvalidRequest { .. } | AppError::InvalidOption { .. } => {
                ErrorCategory::Request
            }
            AppError::HttpError(_)
            | AppError::EmptyGeneration { .. }
            | AppError::ProviderError { .. }
            | AppError::GenerationFailed { .. } => ErrorCategory::Provider,
            AppError::ConfigError { .. }
            | AppError::MissingConfigError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            AppError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::Provider => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Caller's fault, reported as a 4xx.
    pub fn is_client_error(&self) -> bool {
        self.category() == ErrorCategory::Request
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AppError::InvalidRequest { .. } => {
                "Check that every required field is present and is a string".to_string()
            }
            AppError::InvalidOption { field, allowed, .. } => {
                format!("Use one of the allowed {} values: {}", field, allowed.join(", "))
            }
            AppError::EmptyGeneration { .. } => {
                "The provider returned no text; try again or simplify the input".to_string()
            }
            AppError::HttpError(_) | AppError::ProviderError { .. } | AppError::GenerationFailed { .. } => {
                "Check GOOGLE_API_KEY, the model name and network access to the provider"
                    .to_string()
            }
            AppError::MissingConfigError { field } => {
                format!("Set {} via flag, environment variable or config file", field)
            }
            AppError::ConfigError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::ConfigValidationError { .. } => {
                "Review the configuration file and command-line flags".to_string()
            }
            AppError::IoError(_) => "Check file paths and permissions".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Request => format!("Invalid request: {}", self),
            ErrorCategory::Provider => format!("Text generation failed: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
