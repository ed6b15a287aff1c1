//! Classical disease reference catalog and the `/api/diseases` routes.

pub mod domain;
pub mod import;
pub mod query;
pub mod repository;
pub mod router;
pub mod service;
pub mod stats;


pub use domain::{DietGuidance, Disease, DiseaseId, Treatment};
pub use import::{from_path, from_reader, seed_diseases, DiseaseImportError};
pub use query::{DiseasePage, DiseaseQuery, Pagination};
pub use repository::DiseaseRepository;
pub use router::disease_router;
pub use service::{DiseaseCatalog, SeedReport};
pub use stats::{overview, CatalogStats, StatGroup};
