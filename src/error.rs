use thiserror::Error;

/// Main error type for the planning pipeline
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Weather lookup error: {0}")]
    Weather(String),

    #[error("Geocoding error: {0}")]
    Geocoding(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::InvalidInput(_) => "INVALID_INPUT",
            PlannerError::Http(_) => "HTTP_ERROR",
            PlannerError::Llm(_) => "LLM_ERROR",
            PlannerError::Weather(_) => "WEATHER_ERROR",
            PlannerError::Geocoding(_) => "GEOCODING_ERROR",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::Template(_) => "TEMPLATE_ERROR",
            PlannerError::Render(_) => "RENDER_ERROR",
            PlannerError::Io(_) => "IO_ERROR",
        }
    }

    /// Whether the error was caused by the caller's input rather than a collaborator
    pub fn is_user_error(&self) -> bool {
        matches!(self, PlannerError::InvalidInput(_))
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "user_error": self.is_user_error()
            }
        })
    }
}

impl From<handlebars::TemplateError> for PlannerError {
    fn from(err: handlebars::TemplateError) -> Self {
        PlannerError::Template(Box::new(err))
    }
}
