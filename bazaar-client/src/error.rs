use thiserror::Error;

#[derive(Debug, Error)]
pub enum BazaarClientError {
    // HTTP ошибки
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

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

impl BazaarClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, BazaarClientError::NotFound)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, BazaarClientError::Unauthorized(_))
    }
}
