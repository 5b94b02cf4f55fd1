use thiserror::Error;

/// Ошибки операций каталога
///
/// Все ошибки восстанавливаются в месте вызова; неудачная операция
/// оставляет хранилище в прежнем состоянии.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Обязательное поле пустое или состоит из пробелов
    #[error("VALIDATION: {0}")]
    Validation(String),

    /// Запись с таким ключом отсутствует
    #[error("NOT_FOUND: {0}")]
    NotFound(String),

    #[error("UNKNOWN_CATEGORY: {0}")]
    UnknownCategory(String),

    #[error("INVALID_SELECTOR: {0}")]
    InvalidSelector(String),

    #[error("STORAGE: {0}")]
    Storage(String),

    #[error("SERIALIZATION: {0}")]
    Serialization(String),
}

impl CatalogError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Storage(value.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value.to_string())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
