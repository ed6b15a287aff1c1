use super::domain::{Disease, DiseaseId};
pub use crate::repository::RepositoryError;

/// Storage abstraction for the disease reference catalog.
pub trait DiseaseRepository: Send + Sync {
    /// Store `disease`, replacing any record with the same id. Returns the replaced record.
    fn insert(&self, disease: Disease) -> Result<Option<Disease>, RepositoryError>;
    fn fetch(&self, id: &DiseaseId) -> Result<Option<Disease>, RepositoryError>;
    fn all(&self) -> Result<Vec<Disease>, RepositoryError>;
}
