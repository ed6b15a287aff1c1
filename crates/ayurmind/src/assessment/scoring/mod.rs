mod policy;
mod rules;

pub use policy::confidence_score;

use serde::Serialize;

use super::domain::{AnswerMap, Prakriti};
use crate::knowledge::{
    constitution_label, Citation, Dosha, DoshaPercentages, DoshaScores, QuestionBank,
};

/// Stateless scorer over a question bank. The same answers always produce the same analysis.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    bank: QuestionBank,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(QuestionBank::classical())
    }
}

impl ScoringEngine {
    pub fn new(bank: QuestionBank) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> QuestionBank {
        self.bank
    }

    pub fn score(&self, answers: &AnswerMap) -> DoshaAnalysis {
        let selections = rules::matched_options(&self.bank, answers);
        let scores = rules::tally(&selections);
        let selected_scores: Vec<u32> = selections
            .iter()
            .map(|selection| selection.option.score)
            .collect();

        let classical_references = selections
            .iter()
            .filter_map(|selection| {
                selection
                    .option
                    .classical_reference
                    .map(|reference| MatchedReference {
                        question: selection.question.question,
                        answer: selection.option.text,
                        reference,
                    })
            })
            .collect();

        let primary_dosha = scores.primary();
        let secondary_dosha = scores.secondary();

        DoshaAnalysis {
            scores,
            percentages: scores.percentages(),
            primary_dosha,
            secondary_dosha,
            constitution: constitution_label(primary_dosha, secondary_dosha),
            classical_references,
            confidence_score: confidence_score(&selected_scores),
        }
    }
}

/// The verse behind one selected answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedReference {
    pub question: &'static str,
    pub answer: &'static str,
    pub reference: Citation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoshaAnalysis {
    pub scores: DoshaScores,
    pub percentages: Option<DoshaPercentages>,
    pub primary_dosha: Dosha,
    pub secondary_dosha: Dosha,
    pub constitution: String,
    pub classical_references: Vec<MatchedReference>,
    pub confidence_score: f64,
}

impl DoshaAnalysis {
    pub fn prakriti(&self) -> Prakriti {
        Prakriti {
            primary_dosha: self.primary_dosha,
            secondary_dosha: self.secondary_dosha,
            constitution: self.constitution.clone(),
            scores: self.scores,
            percentages: self.percentages,
        }
    }
}
