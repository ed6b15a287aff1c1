//! Dosha questionnaire scoring, assessment persistence, and the `/api/dosha` routes.

pub mod domain;
pub mod pattern;
pub mod recommendations;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod visual;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerMap, AnsweredQuestion, AssessmentId, AssessmentRecord, AssessmentRequest,
    AssessmentResults, AssessmentSummary, AssessmentType, CategorisedAnswers, HistoryEntry,
    Prakriti, TextUsage, Vikriti, ANONYMOUS_USER, ASSESSMENT_VERSION,
};
pub use pattern::{PatternAnalysis, PatternAnalyzer, Severity, SubtypeStatus};
pub use recommendations::{recommendations_for, Recommendations};
pub use repository::{AssessmentRepository, RepositoryError};
pub use router::assessment_router;
pub use scoring::{DoshaAnalysis, MatchedReference, ScoringEngine};
pub use service::{AssessmentService, AssessmentServiceError, QuickAssessment};
pub use visual::{analyze_photos, VisualAnalysis};
