use thiserror::Error;

/// 非 2xx 回應且沒有可用 `message` 時顯示的訊息
pub const FALLBACK_SERVICE_MESSAGE: &str = "Failed to generate schedule from backend.";

/// 無法連線或請求未完成時的前綴訊息
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[derive(Error, Debug)]
pub enum PlannerError {
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

    #[error("Unknown subject '{subject}'. Options: {options}")]
    UnknownSubject { subject: String, options: String },

    #[error("A schedule request is already in flight")]
    RequestInFlight,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl PlannerError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PlannerError::IoError(e) => format!("Could not read a file: {}", e),
            PlannerError::ConfigError { message } => format!("Configuration problem: {}", message),
            PlannerError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
            PlannerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            PlannerError::UnknownSubject { .. } | PlannerError::RequestInFlight => self.to_string(),
            PlannerError::Validation(e) => e.to_string(),
            PlannerError::Service(e) => e.message(),
        }
    }
}

/// 前端表單驗證錯誤，不會送出任何請求
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingField,

    #[error("Preparation days must be a positive number.")]
    InvalidDays,

    #[error("Target score must be between 1 and 100.")]
    InvalidScore,
}

/// 排程請求失敗
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("An unexpected error occurred. Please try again. ({0})")]
    Transport(String),

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid response from scheduling service: {0}")]
    MalformedResponse(String),
}

impl ServiceError {
    /// 錯誤橫幅上顯示的文字
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
