use std::sync::Arc;

use super::common::*;
use crate::assessment::domain::{AssessmentId, AssessmentRequest, ANONYMOUS_USER};
use crate::assessment::repository::{AssessmentRepository, RepositoryError};
use crate::assessment::{AssessmentService, AssessmentServiceError, AssessmentType};
use crate::knowledge::{Dosha, DoshaScores};

#[test]
fn assess_persists_comprehensive_record() {
    let (service, repository) = build_service();

    let record = service
        .assess(request_for("user-42", vata_pitta_answers()))
        .expect("complete questionnaire");

    assert!(record.id.0.starts_with("asm-"));
    assert_eq!(record.user_id, "user-42");
    assert_eq!(record.assessment_type, AssessmentType::Comprehensive);
    assert_eq!(record.assessment_version, "1.0.0");
    assert_eq!(record.confidence_score, 60.0);
    assert_eq!(record.results.prakriti.constitution, "Vata-Pitta");
    assert_eq!(record.answers.len(), 5);
    assert_eq!(record.answers.physical.len(), 2);
    assert_eq!(
        record.answers.physical["body_frame"].score,
        DoshaScores::new(3, 0, 0)
    );
    assert!(record.visual_analysis.is_none());

    let stored = repository
        .fetch(&record.id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.results.prakriti, record.results.prakriti);
}

#[test]
fn assess_builds_vikriti_from_lifestyle_practices() {
    let (service, _) = build_service();
    let record = service
        .assess(request_for("user-1", vata_pitta_answers()))
        .expect("assessment succeeds");

    let vikriti = &record.results.vikriti;
    assert!(vikriti.current_imbalance.contains("Ayurvedic practitioner"));
    assert!(vikriti.symptoms.is_empty());
    assert_eq!(
        vikriti.recommendations,
        vec!["Early bedtime", "Regular routine", "Warm oil massage"]
    );
}

#[test]
fn assess_records_classical_texts_used() {
    let (service, _) = build_service();
    let record = service
        .assess(request_for("user-1", vata_pitta_answers()))
        .expect("assessment succeeds");

    assert_eq!(record.classical_texts_used.len(), 1);
    let charaka = &record.classical_texts_used[0];
    assert_eq!(charaka.text, "Charaka Samhita");
    assert_eq!(
        charaka.verses,
        vec![
            "Sutrasthana 8.96",
            "Vimana 8.96",
            "Sutrasthana 18.50",
            "Sutrasthana 18.52",
            "Sutrasthana 18.56",
        ]
    );
}

#[test]
fn assess_defaults_to_anonymous_user() {
    let (service, _) = build_service();
    let record = service
        .assess(AssessmentRequest::new(kapha_answers()))
        .expect("assessment succeeds");
    assert_eq!(record.user_id, ANONYMOUS_USER);
}

#[test]
fn assess_runs_visual_stub_when_photos_supplied() {
    let (service, _) = build_service();
    let mut request = request_for("user-7", kapha_answers());
    request.photos = vec!["data:image/png;base64,AAAA".to_string()];

    let record = service.assess(request).expect("assessment succeeds");
    let visual = record.visual_analysis.expect("visual analysis present");
    assert_eq!(visual.dosha_indicators.len(), 1);
    for indicator in &visual.dosha_indicators[0].dosha_indicators {
        assert!(indicator.confidence >= 0.1 && indicator.confidence < 0.4);
    }
}

#[test]
fn assess_rejects_missing_questions() {
    let (service, repository) = build_service();
    let mut answers = vata_pitta_answers();
    answers.remove("learning_style");
    answers.remove("body_frame");

    match service.assess(request_for("user-1", answers)) {
        Err(AssessmentServiceError::Incomplete { missing }) => {
            assert_eq!(missing, vec!["body_frame", "learning_style"]);
        }
        other => panic!("expected incomplete assessment, got {other:?}"),
    }
    assert_eq!(repository.len(), 0);
}

#[test]
fn assess_rejects_unknown_option_for_known_question() {
    let (service, _) = build_service();
    let mut answers = vata_pitta_answers();
    answers.insert("sleep_pattern".to_string(), "insomniac".to_string());

    assert!(matches!(
        service.assess(request_for("user-1", answers)),
        Err(AssessmentServiceError::InvalidAnswer { ref question, .. })
            if question == "sleep_pattern"
    ));
}

#[test]
fn assess_propagates_repository_failures() {
    let service = AssessmentService::new(Arc::new(UnavailableRepository));
    match service.assess(request_for("user-1", vata_pitta_answers())) {
        Err(AssessmentServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected repository failure, got {other:?}"),
    }
}

#[test]
fn quick_assess_scores_partial_answers_without_persisting() {
    let (service, repository) = build_service();

    let quick = service
        .quick_assess(&answers(&[("appetite_pattern", "pitta")]))
        .expect("quick assessment");

    assert_eq!(quick.assessment_type, AssessmentType::Quick);
    assert_eq!(quick.analysis.primary_dosha, Dosha::Pitta);
    assert!(quick.note.starts_with("This is a preliminary assessment"));
    assert_eq!(repository.len(), 0);
}

#[test]
fn quick_assess_rejects_empty_answers() {
    let (service, _) = build_service();
    assert!(matches!(
        service.quick_assess(&answers(&[])),
        Err(AssessmentServiceError::MissingAnswers)
    ));
}

#[test]
fn history_lists_newest_first_for_one_user() {
    let (service, _) = build_service();
    let first = service
        .assess(request_for("user-9", vata_pitta_answers()))
        .expect("first");
    let second = service
        .assess(request_for("user-9", kapha_answers()))
        .expect("second");
    service
        .assess(request_for("someone-else", kapha_answers()))
        .expect("other user");

    let history = service.history("user-9").expect("history");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, second.id);
    assert_eq!(history[1].id, first.id);
    assert_eq!(history[0].prakriti.primary_dosha, Dosha::Kapha);
}

#[test]
fn history_orders_same_instant_by_numeric_sequence() {
    let (service, repository) = build_service();
    let original = service
        .assess(request_for("user-seq", kapha_answers()))
        .expect("assessed");

    for id in ["asm-999999", "asm-1000000"] {
        let mut copy = original.clone();
        copy.id = AssessmentId(id.to_string());
        repository.insert(copy).expect("inserted");
    }

    let ids: Vec<String> = service
        .history("user-seq")
        .expect("history")
        .into_iter()
        .map(|entry| entry.id.to_string())
        .collect();
    assert_eq!(ids[..2], ["asm-1000000", "asm-999999"]);
    assert_eq!(ids[2], original.id.to_string());
}

#[test]
fn sequence_reads_generated_ids_only() {
    assert_eq!(AssessmentId("asm-000042".to_string()).sequence(), Some(42));
    assert_eq!(
        AssessmentId("asm-1000000".to_string()).sequence(),
        Some(1_000_000)
    );
    assert_eq!(AssessmentId("imported-7".to_string()).sequence(), None);
}

#[test]
fn history_rejects_blank_user() {
    let (service, _) = build_service();
    assert!(matches!(
        service.history("   "),
        Err(AssessmentServiceError::MissingUserId)
    ));
}

#[test]
fn get_propagates_not_found() {
    let (service, _) = build_service();
    match service.get(&AssessmentId("asm-999999".to_string())) {
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn subtypes_are_sorted_by_key() {
    let (service, _) = build_service();
    let subtypes = service.subtypes(Dosha::Vata);
    let keys: Vec<_> = subtypes.iter().map(|subtype| subtype.subtype).collect();
    assert_eq!(
        keys,
        vec!["apana_vata", "prana_vata", "samana_vata", "udana_vata", "vyana_vata"]
    );
}
