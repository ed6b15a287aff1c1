use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::{
    AnswerMap, AnsweredQuestion, AssessmentId, AssessmentRecord, AssessmentRequest,
    AssessmentResults, AssessmentType, CategorisedAnswers, CategoryAnswers, HistoryEntry,
    TextUsage, Vikriti, ASSESSMENT_VERSION, VIKRITI_PLACEHOLDER,
};
use super::recommendations::recommendations_for;
use super::repository::{AssessmentRepository, RepositoryError};
use super::scoring::{DoshaAnalysis, MatchedReference, ScoringEngine};
use super::visual::analyze_photos;
use crate::knowledge::subtypes::subtypes_of;
use crate::knowledge::{Dosha, DoshaSubtype, QuestionBank, QuestionCategory};

pub const QUICK_ASSESSMENT_NOTE: &str =
    "This is a preliminary assessment. For comprehensive analysis, complete the full assessment.";

/// Service composing the scorer, recommendation lookup, and assessment storage.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asm-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_bank(repository, QuestionBank::classical())
    }

    pub fn with_bank(repository: Arc<R>, bank: QuestionBank) -> Self {
        Self {
            repository,
            engine: Arc::new(ScoringEngine::new(bank)),
        }
    }

    pub fn bank(&self) -> QuestionBank {
        self.engine.bank()
    }

    /// Score a complete questionnaire, persist it, and return the stored record.
    pub fn assess(
        &self,
        request: AssessmentRequest,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        self.validate_complete(&request.answers)?;

        let analysis = self.engine.score(&request.answers);
        let recommendations = recommendations_for(analysis.primary_dosha);
        let visual_analysis = if request.photos.is_empty() {
            None
        } else {
            Some(analyze_photos(&request.photos, &mut rand::thread_rng()))
        };

        let vikriti = Vikriti {
            current_imbalance: VIKRITI_PLACEHOLDER,
            symptoms: self.symptoms(&request.answers),
            recommendations: recommendations.lifestyle_practices(),
        };

        let record = AssessmentRecord {
            id: next_assessment_id(),
            user_id: request.resolved_user(),
            assessed_at: Utc::now(),
            assessment_type: AssessmentType::Comprehensive,
            answers: self.categorise(&request.answers),
            visual_analysis,
            classical_texts_used: texts_used(&analysis.classical_references),
            confidence_score: analysis.confidence_score,
            results: AssessmentResults {
                prakriti: analysis.prakriti(),
                vikriti,
                classical_references: analysis.classical_references,
                recommendations,
            },
            assessment_version: ASSESSMENT_VERSION,
        };

        let stored = self.repository.insert(record)?;
        info!(
            assessment_id = %stored.id,
            user_id = %stored.user_id,
            constitution = %stored.results.prakriti.constitution,
            "assessment recorded"
        );
        Ok(stored)
    }

    /// Score whatever subset was answered without persisting anything.
    pub fn quick_assess(
        &self,
        answers: &AnswerMap,
    ) -> Result<QuickAssessment, AssessmentServiceError> {
        if answers.is_empty() {
            return Err(AssessmentServiceError::MissingAnswers);
        }

        let analysis = self.engine.score(answers);
        debug!(constitution = %analysis.constitution, "quick assessment scored");
        Ok(QuickAssessment {
            analysis,
            assessment_type: AssessmentType::Quick,
            note: QUICK_ASSESSMENT_NOTE,
        })
    }

    /// Assessments of one user, newest first.
    pub fn history(&self, user_id: &str) -> Result<Vec<HistoryEntry>, AssessmentServiceError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(AssessmentServiceError::MissingUserId);
        }

        let mut records = self.repository.for_user(user_id)?;
        records.sort_by(|a, b| {
            b.assessed_at
                .cmp(&a.assessed_at)
                .then_with(|| b.id.sequence().cmp(&a.id.sequence()))
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(records
            .iter()
            .map(AssessmentRecord::history_entry)
            .collect())
    }

    pub fn get(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(assessment_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn subtypes(&self, dosha: Dosha) -> Vec<&'static DoshaSubtype> {
        subtypes_of(dosha)
    }

    fn validate_complete(&self, answers: &AnswerMap) -> Result<(), AssessmentServiceError> {
        let bank = self.engine.bank();
        let missing: Vec<String> = bank
            .ids()
            .filter(|id| !answers.contains_key(*id))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            warn!(missing = ?missing, "incomplete assessment rejected");
            return Err(AssessmentServiceError::Incomplete { missing });
        }

        for (question_id, answer) in answers {
            if let Some(question) = bank.find(question_id) {
                if question.option(answer).is_none() {
                    warn!(question = %question_id, answer = %answer, "unknown option rejected");
                    return Err(AssessmentServiceError::InvalidAnswer {
                        question: question_id.clone(),
                        answer: answer.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    fn categorise(&self, answers: &AnswerMap) -> CategorisedAnswers {
        let bank = self.engine.bank();
        let mapped = |category: QuestionCategory| -> CategoryAnswers {
            bank.in_category(category)
                .filter_map(|question| {
                    let option = question.option(answers.get(question.id)?)?;
                    Some((
                        question.id.to_string(),
                        AnsweredQuestion {
                            answer: option.text,
                            score: option.weights(),
                            classical_reference: option.classical_reference,
                        },
                    ))
                })
                .collect()
        };

        CategorisedAnswers {
            physical: mapped(QuestionCategory::Physical),
            physiological: mapped(QuestionCategory::Physiological),
            mental: mapped(QuestionCategory::Mental),
            lifestyle: mapped(QuestionCategory::Lifestyle),
        }
    }

    fn symptoms(&self, answers: &AnswerMap) -> Vec<&'static str> {
        let bank = self.engine.bank();
        let mut symptoms: Vec<&'static str> = Vec::new();
        for (question_id, answer) in answers {
            let Some(option) = bank.find(question_id).and_then(|q| q.option(answer)) else {
                continue;
            };
            for &symptom in option.symptoms {
                if !symptoms.contains(&symptom) {
                    symptoms.push(symptom);
                }
            }
        }
        symptoms
    }
}

/// Texts cited by the matched answers, each with its distinct chapters and verses in first-seen
/// order.
fn texts_used(references: &[MatchedReference]) -> Vec<TextUsage> {
    let mut order: Vec<&'static str> = Vec::new();
    let mut usage: BTreeMap<&'static str, TextUsage> = BTreeMap::new();

    for matched in references {
        let reference = matched.reference;
        let entry = usage.entry(reference.text).or_insert_with(|| {
            order.push(reference.text);
            TextUsage {
                text: reference.text,
                chapters: Vec::new(),
                verses: Vec::new(),
            }
        });
        if let Some(chapter) = reference.chapter {
            if !entry.chapters.contains(&chapter) {
                entry.chapters.push(chapter);
            }
        }
        if !entry.verses.contains(&reference.verse) {
            entry.verses.push(reference.verse);
        }
    }

    order
        .into_iter()
        .filter_map(|text| usage.remove(text))
        .collect()
}

/// Unpersisted scorer output for a partial questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct QuickAssessment {
    #[serde(flatten)]
    pub analysis: DoshaAnalysis,
    pub assessment_type: AssessmentType,
    pub note: &'static str,
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("please answer all required questions (missing: {})", .missing.join(", "))]
    Incomplete { missing: Vec<String> },
    #[error("question '{question}' has no option '{answer}'")]
    InvalidAnswer { question: String, answer: String },
    #[error("please provide assessment answers")]
    MissingAnswers,
    #[error("please provide a valid user id")]
    MissingUserId,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl AssessmentServiceError {
    /// True for errors caused by the caller's input rather than storage.
    pub fn is_validation(&self) -> bool {
        !matches!(self, AssessmentServiceError::Repository(_))
    }
}
