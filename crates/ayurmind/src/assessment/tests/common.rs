use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::assessment::domain::{AnswerMap, AssessmentId, AssessmentRecord, AssessmentRequest};
use crate::assessment::repository::{AssessmentRepository, RepositoryError};
use crate::assessment::{assessment_router, AssessmentService};

pub(super) fn answers(pairs: &[(&str, &str)]) -> AnswerMap {
    pairs
        .iter()
        .map(|(question, answer)| (question.to_string(), answer.to_string()))
        .collect()
}

/// A full questionnaire leaning Vata with Pitta second.
pub(super) fn vata_pitta_answers() -> AnswerMap {
    answers(&[
        ("body_frame", "vata"),
        ("weight_tendency", "vata"),
        ("appetite_pattern", "pitta"),
        ("learning_style", "vata"),
        ("sleep_pattern", "pitta"),
    ])
}

pub(super) fn kapha_answers() -> AnswerMap {
    answers(&[
        ("body_frame", "kapha"),
        ("weight_tendency", "kapha"),
        ("appetite_pattern", "kapha"),
        ("learning_style", "pitta"),
        ("sleep_pattern", "kapha"),
    ])
}

pub(super) fn request_for(user: &str, answers: AnswerMap) -> AssessmentRequest {
    AssessmentRequest {
        answers,
        photos: Vec::new(),
        user_id: Some(user.to_string()),
    }
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .len()
    }
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn for_user(&self, user_id: &str) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_user(&self, _user_id: &str) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: AssessmentService<MemoryRepository>) -> axum::Router {
    assessment_router(Arc::new(service))
}
