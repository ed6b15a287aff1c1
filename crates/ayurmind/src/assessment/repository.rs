use super::domain::{AssessmentId, AssessmentRecord};
pub use crate::repository::RepositoryError;

/// Storage abstraction for completed assessments. Records are append-only.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    /// Every record stored for `user_id`, in any order.
    fn for_user(&self, user_id: &str) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}
