use ayurmind::assessment::{AnswerMap, AssessmentId, AssessmentRecord, AssessmentRepository};
use ayurmind::config::AppEnvironment;
use ayurmind::diseases::{
    from_path, seed_diseases, Disease, DiseaseCatalog, DiseaseId, DiseaseRepository,
};
use ayurmind::error::AppError;
use ayurmind::repository::RepositoryError;
use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) environment: AppEnvironment,
    pub(crate) health_check_secret: Option<String>,
    pub(crate) started_at: DateTime<Utc>,
}

impl AppState {
    pub(crate) fn uptime_seconds(&self, now: DateTime<Utc>) -> i64 {
        (now - self.started_at).num_seconds().max(0)
    }

    /// The detailed status probe is only guarded in production with a configured secret.
    pub(crate) fn status_authorised(&self, provided: Option<&str>) -> bool {
        match (&self.environment, self.health_check_secret.as_deref()) {
            (AppEnvironment::Production, Some(secret)) => provided == Some(secret),
            _ => true,
        }
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
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

#[derive(Default, Clone)]
pub(crate) struct InMemoryDiseaseRepository {
    records: Arc<Mutex<HashMap<DiseaseId, Disease>>>,
}

impl DiseaseRepository for InMemoryDiseaseRepository {
    fn insert(&self, disease: Disease) -> Result<Option<Disease>, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.insert(disease.disease_id.clone(), disease))
    }

    fn fetch(&self, id: &DiseaseId) -> Result<Option<Disease>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn all(&self) -> Result<Vec<Disease>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

/// Bundled seed first, then the optional CSV merged over it by disease id.
pub(crate) fn load_catalog(
    csv: Option<&Path>,
) -> Result<DiseaseCatalog<InMemoryDiseaseRepository>, AppError> {
    let catalog = DiseaseCatalog::new(Arc::new(InMemoryDiseaseRepository::default()));
    catalog.seed(seed_diseases()?)?;

    if let Some(path) = csv {
        let imported = from_path(path)?;
        info!(path = %path.display(), records = imported.len(), "importing disease CSV");
        catalog.seed(imported)?;
    }

    Ok(catalog)
}

/// Answers file: a JSON object of question id to option id, optionally wrapped in `answers`.
pub(crate) fn read_answers(path: &Path) -> Result<AnswerMap, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&raw).map_err(std::io::Error::from)?;
    let answers = match value.get("answers") {
        Some(inner) => inner.clone(),
        None => value,
    };
    let answers = serde_json::from_value(answers).map_err(std::io::Error::from)?;
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    pub(crate) fn state(environment: AppEnvironment, secret: Option<&str>) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(recorder.handle()),
            environment,
            health_check_secret: secret.map(str::to_string),
            started_at: Utc::now(),
        }
    }

    #[test]
    fn secret_only_enforced_in_production() {
        let dev = state(AppEnvironment::Development, Some("s3cret"));
        assert!(dev.status_authorised(None));

        let prod = state(AppEnvironment::Production, Some("s3cret"));
        assert!(!prod.status_authorised(None));
        assert!(!prod.status_authorised(Some("wrong")));
        assert!(prod.status_authorised(Some("s3cret")));

        let open_prod = state(AppEnvironment::Production, None);
        assert!(open_prod.status_authorised(None));
    }

    #[test]
    fn catalog_loads_bundled_seed() {
        let catalog = load_catalog(None).expect("seed loads");
        assert_eq!(catalog.stats().expect("stats").total_diseases, 8);
    }

    #[test]
    fn answers_accept_wrapped_and_bare_maps() {
        let dir = std::env::temp_dir();
        let bare = dir.join("ayurmind-bare-answers.json");
        let wrapped = dir.join("ayurmind-wrapped-answers.json");
        std::fs::write(&bare, r#"{"body_frame":"vata"}"#).expect("write");
        std::fs::write(&wrapped, r#"{"answers":{"body_frame":"kapha"}}"#).expect("write");

        let bare_answers = read_answers(&bare).expect("bare parses");
        let wrapped_answers = read_answers(&wrapped).expect("wrapped parses");
        assert_eq!(
            bare_answers.get("body_frame").map(String::as_str),
            Some("vata")
        );
        assert_eq!(
            wrapped_answers.get("body_frame").map(String::as_str),
            Some("kapha")
        );

        std::fs::remove_file(bare).ok();
        std::fs::remove_file(wrapped).ok();
    }
}

#[cfg(test)]
pub(crate) use tests::state as test_state;
