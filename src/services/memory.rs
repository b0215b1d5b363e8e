use crate::models::BreedProfile;
use crate::services::catalog::{checked_rating, BreedCatalog, CatalogError};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// Layout of a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    breeds: Vec<BreedProfile>,
}

/// Breed catalog held in memory
///
/// Loaded once from a TOML or JSON file (or built directly from a list of
/// breeds) and shared read-only between requests.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    breeds: Arc<Vec<BreedProfile>>,
}

impl MemoryCatalog {
    pub fn new(breeds: Vec<BreedProfile>) -> Self {
        Self {
            breeds: Arc::new(breeds),
        }
    }

    /// Load a catalog file, picking the format from its extension
    ///
    /// The file holds a top-level `breeds` array of breed records.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let file: CatalogFile = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&contents)?,
            Some("json") => serde_json::from_str(&contents)?,
            other => {
                return Err(CatalogError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        for breed in &file.breeds {
            validate_breed(breed)?;
        }

        tracing::info!("Loaded {} breeds from {}", file.breeds.len(), path.display());

        Ok(Self::new(file.breeds))
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}

#[async_trait]
impl BreedCatalog for MemoryCatalog {
    async fn list_all_breeds(&self) -> Result<Vec<BreedProfile>, CatalogError> {
        Ok(self.breeds.as_ref().clone())
    }
}

fn validate_breed(breed: &BreedProfile) -> Result<(), CatalogError> {
    let ratings = [
        ("size", breed.size),
        ("playfulness", breed.playfulness),
        ("energy", breed.energy),
        ("movement_intensity", breed.movement_intensity),
        ("active", breed.active),
        ("coat_care", breed.coat_care),
        ("dribbling", breed.dribbling),
        ("moulting", breed.moulting),
        ("devotion", breed.devotion),
        ("human_friendly", breed.human_friendly),
        ("social", breed.social),
        ("small_animals_friendly", breed.small_animals_friendly),
        ("child_friendly", breed.child_friendly),
        ("trainability", breed.trainability),
        ("training_experience", breed.training_experience),
        ("home", breed.home),
        ("barking", breed.barking),
        ("loneliness", breed.loneliness),
        ("hunting_instinct", breed.hunting_instinct),
    ];

    for (column, value) in ratings {
        checked_rating(breed.id, column, i64::from(value))?;
    }

    Ok(())
}
