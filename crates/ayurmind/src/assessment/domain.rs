use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::recommendations::Recommendations;
use super::scoring::MatchedReference;
use super::visual::VisualAnalysis;
use crate::knowledge::{Citation, Dosha, DoshaPercentages, DoshaScores};

/// Question id to the selected option key.
pub type AnswerMap = BTreeMap<String, String>;

pub const ANONYMOUS_USER: &str = "anonymous";
pub const ASSESSMENT_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentId(pub String);

impl AssessmentId {
    /// Numeric part of a generated `asm-` id.
    pub fn sequence(&self) -> Option<u64> {
        self.0.strip_prefix("asm-")?.parse().ok()
    }
}

impl fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body accepted by the comprehensive assessment endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AssessmentRequest {
    pub answers: AnswerMap,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default, alias = "userId")]
    pub user_id: Option<String>,
}

impl AssessmentRequest {
    pub fn new(answers: AnswerMap) -> Self {
        Self {
            answers,
            ..Self::default()
        }
    }

    /// Blank or missing user ids fall back to the anonymous bucket.
    pub fn resolved_user(&self) -> String {
        self.user_id
            .as_deref()
            .map(str::trim)
            .filter(|user| !user.is_empty())
            .unwrap_or(ANONYMOUS_USER)
            .to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentType {
    Comprehensive,
    Quick,
}

/// The selected option of one question as stored on the record.
#[derive(Debug, Clone, Serialize)]
pub struct AnsweredQuestion {
    pub answer: &'static str,
    pub score: DoshaScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classical_reference: Option<Citation>,
}

pub type CategoryAnswers = BTreeMap<String, AnsweredQuestion>;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CategorisedAnswers {
    pub physical: CategoryAnswers,
    pub physiological: CategoryAnswers,
    pub mental: CategoryAnswers,
    pub lifestyle: CategoryAnswers,
}

impl CategorisedAnswers {
    pub fn len(&self) -> usize {
        self.physical.len() + self.physiological.len() + self.mental.len() + self.lifestyle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Innate constitution derived from the questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prakriti {
    pub primary_dosha: Dosha,
    pub secondary_dosha: Dosha,
    pub constitution: String,
    pub scores: DoshaScores,
    pub percentages: Option<DoshaPercentages>,
}

/// Current-state imbalance summary attached to comprehensive results.
#[derive(Debug, Clone, Serialize)]
pub struct Vikriti {
    pub current_imbalance: &'static str,
    pub symptoms: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
}

pub const VIKRITI_PLACEHOLDER: &str = "Based on your responses, you may have some current imbalances. Consult with an Ayurvedic practitioner for detailed vikriti analysis.";

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResults {
    pub prakriti: Prakriti,
    pub vikriti: Vikriti,
    pub classical_references: Vec<MatchedReference>,
    pub recommendations: Recommendations,
}

/// Classical text cited by an assessment with the chapters and verses it drew on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextUsage {
    pub text: &'static str,
    pub chapters: Vec<&'static str>,
    pub verses: Vec<&'static str>,
}

/// Persisted comprehensive assessment. Never mutated after insertion.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub user_id: String,
    pub assessed_at: DateTime<Utc>,
    pub assessment_type: AssessmentType,
    pub answers: CategorisedAnswers,
    pub visual_analysis: Option<VisualAnalysis>,
    pub results: AssessmentResults,
    pub assessment_version: &'static str,
    pub classical_texts_used: Vec<TextUsage>,
    pub confidence_score: f64,
}

impl AssessmentRecord {
    pub fn summary(&self) -> AssessmentSummary {
        AssessmentSummary {
            assessment_id: self.id.clone(),
            results: self.results.clone(),
            classical_references: self.results.classical_references.clone(),
            confidence_score: self.confidence_score,
        }
    }

    pub fn history_entry(&self) -> HistoryEntry {
        HistoryEntry {
            id: self.id.clone(),
            assessed_at: self.assessed_at,
            prakriti: self.results.prakriti.clone(),
            assessment_type: self.assessment_type,
            confidence_score: self.confidence_score,
        }
    }
}

/// Response payload of a completed comprehensive assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub assessment_id: AssessmentId,
    pub results: AssessmentResults,
    pub classical_references: Vec<MatchedReference>,
    pub confidence_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: AssessmentId,
    pub assessed_at: DateTime<Utc>,
    pub prakriti: Prakriti,
    pub assessment_type: AssessmentType,
    pub confidence_score: f64,
}
