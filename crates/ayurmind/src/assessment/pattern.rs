//! Standalone pattern analysis over the eleven-question weight table, with the classical
//! correction factors applied before the constitution is read off.

use serde::Serialize;

use super::domain::AnswerMap;
use crate::knowledge::patterns::{
    foundational_references, pattern_question, profile, personalised_regimen, ContextualVerse,
    PersonalisedRegimen, IMBALANCE_GUIDANCE,
};
use crate::knowledge::{constitution_label, Dosha, DoshaPercentages, DoshaScores};

const CORRECTION_THRESHOLD: u32 = 20;
const IMBALANCED_ABOVE: u32 = 20;
const MODERATE_ABOVE: u32 = 12;
const VIKRITI_ABOVE: u32 = 25;
const SEVERE_ABOVE: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtypeStatus {
    Balanced,
    Moderate,
    Imbalanced,
}

impl SubtypeStatus {
    fn for_score(score: u32) -> Self {
        if score > IMBALANCED_ABOVE {
            SubtypeStatus::Imbalanced
        } else if score > MODERATE_ABOVE {
            SubtypeStatus::Moderate
        } else {
            SubtypeStatus::Balanced
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubtypeAssessment {
    pub dosha: Dosha,
    pub subtype: &'static str,
    pub location: &'static str,
    pub functions: &'static [&'static str],
    pub balanced_signs: &'static [&'static str],
    pub imbalanced_signs: &'static [&'static str],
    pub status: SubtypeStatus,
    pub verse: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct VikritiAnalysis {
    pub primary_imbalance: Dosha,
    pub symptoms: Vec<&'static str>,
    pub severity: Severity,
    pub recommendations: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct PatternAnalysis {
    pub primary_dosha: Dosha,
    pub secondary_dosha: Dosha,
    pub scores: DoshaScores,
    pub constitution: String,
    pub percentages: Option<DoshaPercentages>,
    pub subtypes: Vec<SubtypeAssessment>,
    pub recommendations: &'static PersonalisedRegimen,
    pub classical_references: Vec<ContextualVerse>,
    pub vikriti: Option<VikritiAnalysis>,
    pub subdosha: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PatternAnalyzer;

impl PatternAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, answers: &AnswerMap) -> PatternAnalysis {
        let scores = corrected_scores(answers);
        let primary_dosha = scores.primary();
        let secondary_dosha = scores.secondary();
        let primary_score = scores.get(primary_dosha);

        PatternAnalysis {
            primary_dosha,
            secondary_dosha,
            scores,
            constitution: constitution_label(primary_dosha, secondary_dosha),
            percentages: scores.percentages(),
            subtypes: subtype_assessments(primary_dosha, primary_score),
            recommendations: personalised_regimen(primary_dosha),
            classical_references: classical_references(primary_dosha),
            vikriti: vikriti(primary_dosha, primary_score),
            subdosha: subdoshas(answers),
        }
    }
}

/// Raw weights summed over the answers, before corrections.
pub fn raw_scores(answers: &AnswerMap) -> DoshaScores {
    let mut scores = DoshaScores::default();
    for (question_id, answer) in answers {
        if let Some(option) = pattern_question(question_id).and_then(|q| q.option(answer)) {
            scores += option.weights;
        }
    }
    scores
}

pub fn corrected_scores(answers: &AnswerMap) -> DoshaScores {
    apply_corrections(raw_scores(answers))
}

/// Rakta, Ojas, and Tejas adjustments: pitta +15%, kapha +10%, vata +5%, each floored and
/// only once the bucket passes the threshold.
pub fn apply_corrections(mut scores: DoshaScores) -> DoshaScores {
    for (dosha, percent) in [(Dosha::Pitta, 15), (Dosha::Kapha, 10), (Dosha::Vata, 5)] {
        let value = scores.get_mut(dosha);
        if *value > CORRECTION_THRESHOLD {
            *value += *value * percent / 100;
        }
    }
    scores
}

fn subtype_assessments(primary: Dosha, primary_score: u32) -> Vec<SubtypeAssessment> {
    let status = SubtypeStatus::for_score(primary_score);
    profile(primary)
        .subtypes
        .iter()
        .map(|subtype| SubtypeAssessment {
            dosha: primary,
            subtype: subtype.name,
            location: subtype.location,
            functions: subtype.functions,
            balanced_signs: subtype.balanced_signs,
            imbalanced_signs: subtype.imbalanced_signs,
            status,
            verse: subtype.verse,
            source: subtype.source,
        })
        .collect()
}

fn classical_references(primary: Dosha) -> Vec<ContextualVerse> {
    let mut references = vec![ContextualVerse {
        verse: profile(primary).classical_verse,
        context: "Primary dosha characteristics",
    }];
    references.extend_from_slice(foundational_references());
    references
}

fn vikriti(primary: Dosha, primary_score: u32) -> Option<VikritiAnalysis> {
    if primary_score <= VIKRITI_ABOVE {
        return None;
    }

    let severity = if primary_score > SEVERE_ABOVE {
        Severity::Severe
    } else {
        Severity::Moderate
    };

    Some(VikritiAnalysis {
        primary_imbalance: primary,
        symptoms: profile(primary)
            .subtypes
            .iter()
            .flat_map(|subtype| subtype.imbalanced_signs.iter().copied())
            .collect(),
        severity,
        recommendations: IMBALANCE_GUIDANCE,
    })
}

/// Subtypes implicated by the answers, first occurrence wins.
fn subdoshas(answers: &AnswerMap) -> Vec<&'static str> {
    let mut subdoshas: Vec<&'static str> = Vec::new();
    for (question_id, answer) in answers {
        let subdosha = pattern_question(question_id)
            .and_then(|question| question.option(answer))
            .and_then(|option| option.subdosha);
        if let Some(name) = subdosha {
            if !subdoshas.contains(&name) {
                subdoshas.push(name);
            }
        }
    }
    subdoshas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> AnswerMap {
        pairs
            .iter()
            .map(|(question, answer)| (question.to_string(), answer.to_string()))
            .collect()
    }

    fn all_pitta() -> AnswerMap {
        answers(&[
            ("digestion_pattern", "sharp"),
            ("mental_activity", "sharp"),
            ("stress_response", "angry"),
            ("energy_pattern", "intense"),
            ("sleep_pattern", "moderate"),
            ("speech_pattern", "clear"),
            ("climate_preference", "cool"),
            ("memory_pattern", "sharp"),
            ("circulation_pattern", "warm"),
            ("elimination_pattern", "loose"),
            ("emotional_tendency", "anger"),
        ])
    }

    #[test]
    fn corrections_only_apply_above_threshold() {
        assert_eq!(
            apply_corrections(DoshaScores::new(20, 20, 20)),
            DoshaScores::new(20, 20, 20)
        );
        assert_eq!(
            apply_corrections(DoshaScores::new(21, 21, 21)),
            DoshaScores::new(22, 24, 23)
        );
    }

    #[test]
    fn all_pitta_answers_flag_severe_vikriti() {
        let analysis = PatternAnalyzer::new().analyze(&all_pitta());

        assert_eq!(raw_scores(&all_pitta()), DoshaScores::new(0, 35, 0));
        assert_eq!(analysis.scores, DoshaScores::new(0, 40, 0));
        assert_eq!(analysis.primary_dosha, Dosha::Pitta);
        assert_eq!(analysis.secondary_dosha, Dosha::Vata);
        assert_eq!(analysis.constitution, "Pitta-Vata");

        let vikriti = analysis.vikriti.expect("imbalance above threshold");
        assert_eq!(vikriti.severity, Severity::Severe);
        assert_eq!(vikriti.symptoms.len(), 15);

        assert!(analysis
            .subtypes
            .iter()
            .all(|subtype| subtype.status == SubtypeStatus::Imbalanced));
        assert_eq!(analysis.classical_references.len(), 3);
        assert_eq!(
            analysis.classical_references[0].verse.source,
            "Charaka Samhita, Sutrasthana 1.60"
        );
    }

    #[test]
    fn moderate_scores_skip_vikriti() {
        let analysis = PatternAnalyzer::new().analyze(&answers(&[
            ("digestion_pattern", "irregular"),
            ("mental_activity", "quick"),
            ("stress_response", "anxious"),
            ("energy_pattern", "variable"),
        ]));

        assert_eq!(analysis.scores, DoshaScores::new(15, 0, 0));
        assert!(analysis.vikriti.is_none());
        assert_eq!(analysis.subtypes[0].status, SubtypeStatus::Moderate);
        assert_eq!(analysis.subtypes[0].subtype, "Prana Vata");
    }

    #[test]
    fn subdoshas_are_deduplicated() {
        let analysis = PatternAnalyzer::new().analyze(&answers(&[
            ("mental_activity", "quick"),
            ("memory_pattern", "quick"),
            ("climate_preference", "warm"),
            ("speech_pattern", "fast"),
        ]));

        assert_eq!(analysis.subdosha, vec!["Prāna Vāta", "Udana Vata"]);
    }

    #[test]
    fn unknown_answers_contribute_nothing() {
        let analysis = PatternAnalyzer::new().analyze(&answers(&[
            ("digestion_pattern", "volcanic"),
            ("favourite_colour", "blue"),
        ]));

        assert_eq!(analysis.scores, DoshaScores::default());
        assert_eq!(analysis.percentages, None);
        assert!(analysis.subdosha.is_empty());
        assert_eq!(analysis.primary_dosha, Dosha::Vata);
    }
}
