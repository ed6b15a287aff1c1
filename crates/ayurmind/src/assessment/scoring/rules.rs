use super::super::domain::AnswerMap;
use crate::knowledge::{DoshaScores, Question, QuestionBank, QuestionOption};

pub(crate) struct Selection {
    pub question: &'static Question,
    pub option: &'static QuestionOption,
}

/// Answers that name a bank question and one of its options, in bank order.
pub(crate) fn matched_options(bank: &QuestionBank, answers: &AnswerMap) -> Vec<Selection> {
    bank.questions()
        .iter()
        .filter_map(|question| {
            let answer = answers.get(question.id)?;
            let option = question.option(answer)?;
            Some(Selection { question, option })
        })
        .collect()
}

pub(crate) fn tally(selections: &[Selection]) -> DoshaScores {
    let mut scores = DoshaScores::default();
    for selection in selections {
        scores += selection.option.weights();
    }
    scores
}
