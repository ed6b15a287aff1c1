use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{Disease, DiseaseId};
use super::query::{DiseasePage, DiseaseQuery};
use super::repository::{DiseaseRepository, RepositoryError};
use super::stats::{overview, CatalogStats};

/// Counts reported after merging a batch into the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub replaced: usize,
}

/// Read-mostly view over the disease repository.
pub struct DiseaseCatalog<R> {
    repository: Arc<R>,
}

impl<R> DiseaseCatalog<R>
where
    R: DiseaseRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Merge `diseases` by id; later entries win.
    pub fn seed(&self, diseases: Vec<Disease>) -> Result<SeedReport, RepositoryError> {
        let mut report = SeedReport::default();
        for disease in diseases {
            debug!(disease_id = %disease.disease_id, "seeding disease");
            match self.repository.insert(disease)? {
                Some(_) => report.replaced += 1,
                None => report.inserted += 1,
            }
        }
        info!(
            inserted = report.inserted,
            replaced = report.replaced,
            "disease catalog seeded"
        );
        Ok(report)
    }

    pub fn list(&self, query: &DiseaseQuery) -> Result<DiseasePage, RepositoryError> {
        Ok(query.apply(self.repository.all()?))
    }

    pub fn get(&self, id: &DiseaseId) -> Result<Disease, RepositoryError> {
        self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)
    }

    pub fn stats(&self) -> Result<CatalogStats, RepositoryError> {
        Ok(overview(&self.repository.all()?))
    }
}
