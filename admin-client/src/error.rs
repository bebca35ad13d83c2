use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminClientError {
    // Сетевые ошибки
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    // Бэкенд ответил success: false
    #[error("Request rejected by server: {0}")]
    Rejected(String),

    // Бизнес-логика ошибки
    #[error("Resource not found")]
    NotFound,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // Транспортные ошибки
    #[error("Transport error: {0}")]
    TransportError(String),

    // Ошибки сериализации/десериализации
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl AdminClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AdminClientError::NotFound)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AdminClientError::Unauthorized(_))
    }

    /// The backend processed the request and reported `success: false`.
    pub fn is_rejected(&self) -> bool {
        matches!(self, AdminClientError::Rejected(_))
    }

    /// The request never produced a usable HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AdminClientError::HttpError(_) | AdminClientError::TransportError(_)
        )
    }
}

impl From<serde_json::Error> for AdminClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AdminClientError>;
