use super::common::*;
use crate::assessment::recommendations_for;
use crate::assessment::ScoringEngine;
use crate::knowledge::{Dosha, DoshaPercentages, DoshaScores};

#[test]
fn full_questionnaire_scores_vata_pitta() {
    let analysis = ScoringEngine::default().score(&vata_pitta_answers());

    assert_eq!(analysis.scores, DoshaScores::new(9, 6, 0));
    assert_eq!(
        analysis.percentages,
        Some(DoshaPercentages {
            vata: 60,
            pitta: 40,
            kapha: 0
        })
    );
    assert_eq!(analysis.primary_dosha, Dosha::Vata);
    assert_eq!(analysis.secondary_dosha, Dosha::Pitta);
    assert_eq!(analysis.constitution, "Vata-Pitta");
    assert_eq!(analysis.confidence_score, 60.0);
    assert_eq!(analysis.classical_references.len(), 5);
}

#[test]
fn raw_total_equals_sum_of_selected_weights() {
    let engine = ScoringEngine::default();
    let answers = kapha_answers();
    let expected: u32 = answers
        .iter()
        .filter_map(|(id, answer)| engine.bank().find(id)?.option(answer))
        .map(|option| option.weights().total())
        .sum();

    let analysis = engine.score(&answers);
    assert_eq!(analysis.scores.total(), expected);
    assert_eq!(analysis.scores, DoshaScores::new(0, 3, 12));
}

#[test]
fn percentages_stay_within_rounding_of_one_hundred() {
    let engine = ScoringEngine::default();
    for answers in [
        vata_pitta_answers(),
        kapha_answers(),
        answers(&[
            ("body_frame", "vata"),
            ("weight_tendency", "pitta"),
            ("appetite_pattern", "kapha"),
        ]),
    ] {
        let analysis = engine.score(&answers);
        let sum = analysis.percentages.expect("non-empty answers").sum();
        assert!((98..=102).contains(&sum), "percentages summed to {sum}");
        assert_ne!(analysis.primary_dosha, analysis.secondary_dosha);
    }
}

#[test]
fn three_way_tie_uses_fixed_priority() {
    let analysis = ScoringEngine::default().score(&answers(&[
        ("body_frame", "kapha"),
        ("weight_tendency", "pitta"),
        ("appetite_pattern", "vata"),
    ]));

    assert_eq!(analysis.scores, DoshaScores::new(3, 3, 3));
    assert_eq!(analysis.constitution, "Vata-Pitta");
    assert_eq!(
        analysis.percentages,
        Some(DoshaPercentages {
            vata: 33,
            pitta: 33,
            kapha: 33
        })
    );
}

#[test]
fn empty_answers_leave_percentages_undefined() {
    let analysis = ScoringEngine::default().score(&answers(&[]));

    assert_eq!(analysis.scores, DoshaScores::default());
    assert_eq!(analysis.percentages, None);
    assert_eq!(analysis.confidence_score, 0.0);
    assert!(analysis.classical_references.is_empty());
    assert_eq!(analysis.primary_dosha, Dosha::Vata);
    assert_eq!(analysis.secondary_dosha, Dosha::Pitta);

    let json = serde_json::to_value(&analysis).expect("serializes");
    assert!(json["percentages"].is_null());
}

#[test]
fn unknown_questions_and_options_are_ignored() {
    let analysis = ScoringEngine::default().score(&answers(&[
        ("body_frame", "pitta"),
        ("favourite_season", "monsoon"),
        ("sleep_pattern", "restless"),
    ]));

    assert_eq!(analysis.scores, DoshaScores::new(0, 3, 0));
    assert_eq!(analysis.classical_references.len(), 1);
    assert_eq!(
        analysis.classical_references[0].answer,
        "Medium, symmetrical, muscular, well-proportioned"
    );
}

#[test]
fn scoring_is_repeatable() {
    let engine = ScoringEngine::default();
    let first = serde_json::to_vec(&engine.score(&vata_pitta_answers())).expect("serializes");
    let second = serde_json::to_vec(&engine.score(&vata_pitta_answers())).expect("serializes");
    assert_eq!(first, second);
}

#[test]
fn recommendations_follow_primary_dosha() {
    let analysis = ScoringEngine::default().score(&kapha_answers());
    let recommendations = recommendations_for(analysis.primary_dosha);

    assert_eq!(recommendations.diet[0].category, "Light Foods");
    assert_eq!(recommendations.yoga[0].category, "Energizing Asanas");
}
