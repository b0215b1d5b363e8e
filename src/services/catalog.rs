use crate::models::BreedProfile;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when reading the breed catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unsupported catalog file format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid catalog record {id}: {reason}")]
    InvalidRecord { id: i64, reason: String },
}

/// Source of breed profiles for the matcher
///
/// Always hands back the whole catalog, unfiltered and unpaginated; all
/// selection happens in the matcher.
#[async_trait]
pub trait BreedCatalog: Send + Sync {
    /// Fetch every breed in the catalog
    async fn list_all_breeds(&self) -> Result<Vec<BreedProfile>, CatalogError>;

    /// Check the catalog backend is reachable
    async fn health_check(&self) -> Result<bool, CatalogError> {
        Ok(true)
    }
}

/// Validate a 0-5 rating read from an external store
pub(crate) fn checked_rating(id: i64, column: &str, value: i64) -> Result<u8, CatalogError> {
    match u8::try_from(value) {
        Ok(rating) if rating <= 5 => Ok(rating),
        _ => Err(CatalogError::InvalidRecord {
            id,
            reason: format!("{} rating {} is outside 0-5", column, value),
        }),
    }
}
