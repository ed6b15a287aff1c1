use std::collections::BTreeMap;

use serde::Serialize;

use super::citation::Citation;
use super::dosha::{Dosha, DoshaScores};

/// Grouping used by the comprehensive questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Physical,
    Physiological,
    Mental,
    Lifestyle,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 4] = [
        QuestionCategory::Physical,
        QuestionCategory::Physiological,
        QuestionCategory::Mental,
        QuestionCategory::Lifestyle,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            QuestionCategory::Physical => "physical",
            QuestionCategory::Physiological => "physiological",
            QuestionCategory::Mental => "mental",
            QuestionCategory::Lifestyle => "lifestyle",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuestionOption {
    pub value: Dosha,
    pub text: &'static str,
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classical_reference: Option<Citation>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub symptoms: &'static [&'static str],
}

impl QuestionOption {
    /// Identifier a client submits to select this option.
    pub fn key(&self) -> &'static str {
        self.value.key()
    }

    pub fn weights(&self) -> DoshaScores {
        DoshaScores::single(self.value, self.score)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    #[serde(skip)]
    pub category: QuestionCategory,
    pub question: &'static str,
    pub options: &'static [QuestionOption],
}

impl Question {
    pub fn option(&self, key: &str) -> Option<&'static QuestionOption> {
        self.options.iter().find(|option| option.key() == key)
    }
}

/// Ordered set of questions the comprehensive assessment requires.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl QuestionBank {
    pub const fn new(questions: &'static [Question]) -> Self {
        Self { questions }
    }

    pub fn classical() -> Self {
        Self::new(CLASSICAL_QUESTIONS)
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&'static Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.questions.iter().map(|question| question.id)
    }

    pub fn in_category(
        &self,
        category: QuestionCategory,
    ) -> impl Iterator<Item = &'static Question> {
        self.questions
            .iter()
            .filter(move |question| question.category == category)
    }

    pub fn by_category(&self) -> BTreeMap<QuestionCategory, Vec<&'static Question>> {
        let mut grouped: BTreeMap<QuestionCategory, Vec<&'static Question>> = BTreeMap::new();
        for question in self.questions {
            grouped.entry(question.category).or_default().push(question);
        }
        grouped
    }
}

const fn option(
    value: Dosha,
    text: &'static str,
    score: u32,
    reference: Citation,
) -> QuestionOption {
    QuestionOption {
        value,
        text,
        score,
        classical_reference: Some(reference),
        symptoms: &[],
    }
}

const CHARAKA: &str = "Charaka Samhita";

static CLASSICAL_QUESTIONS: &[Question] = &[
    Question {
        id: "body_frame",
        category: QuestionCategory::Physical,
        question: "What best describes your natural body frame since youth?",
        options: &[
            option(
                Dosha::Vata,
                "Thin, slender, light-boned, joints prominent",
                3,
                Citation::verse(
                    CHARAKA,
                    "Sutrasthana 8.96",
                    "कृशो लघुः स्थूलपरिणाहहीनः",
                    "One who is thin, light, and lacks bulk in circumference",
                ),
            ),
            option(
                Dosha::Pitta,
                "Medium, symmetrical, muscular, well-proportioned",
                3,
                Citation::verse(
                    CHARAKA,
                    "Sutrasthana 8.97",
                    "मध्यमः समः स्निग्धः",
                    "One who is medium, balanced, and oily",
                ),
            ),
            option(
                Dosha::Kapha,
                "Solid, broad, stocky, heavy-boned",
                3,
                Citation::verse(
                    CHARAKA,
                    "Sutrasthana 8.98",
                    "स्थूलः स्निग्धः गुरुः",
                    "One who is stout, oily, and heavy",
                ),
            ),
        ],
    },
    Question {
        id: "weight_tendency",
        category: QuestionCategory::Physical,
        question: "How does your body naturally handle weight?",
        options: &[
            option(
                Dosha::Vata,
                "Naturally thin, find it hard to gain weight",
                3,
                Citation::verse(
                    CHARAKA,
                    "Vimana 8.96",
                    "लघुत्वं कृशता चैव",
                    "Lightness and thinness",
                ),
            ),
            option(
                Dosha::Pitta,
                "Maintains medium weight fairly easily",
                3,
                Citation::verse(
                    CHARAKA,
                    "Vimana 8.97",
                    "मध्यमत्वं समत्वं च",
                    "Medium and balanced state",
                ),
            ),
            option(
                Dosha::Kapha,
                "Gains weight easily, hard to lose",
                3,
                Citation::verse(CHARAKA, "Vimana 8.98", "गुरुत्वं स्थौल्यं च", "Heaviness and obesity"),
            ),
        ],
    },
    Question {
        id: "appetite_pattern",
        category: QuestionCategory::Physiological,
        question: "What best describes your natural appetite pattern?",
        options: &[
            option(
                Dosha::Vata,
                "Irregular, varies greatly, can skip meals easily",
                3,
                Citation::verse(
                    CHARAKA,
                    "Sutrasthana 18.49",
                    "अनियताशित्वं",
                    "Irregular eating habits",
                ),
            ),
            option(
                Dosha::Pitta,
                "Strong, sharp, get irritable/hangry if missed",
                3,
                Citation::verse(
                    CHARAKA,
                    "Sutrasthana 18.50",
                    "तीक्ष्णाग्नित्वं",
                    "Sharp digestive fire",
                ),
            ),
            option(
                Dosha::Kapha,
                "Steady but mild, can easily skip meals",
                3,
                Citation::verse(
                    CHARAKA,
                    "Sutrasthana 18.51",
                    "मन्दाग्नित्वं",
                    "Mild digestive fire",
                ),
            ),
        ],
    },
    Question {
        id: "learning_style",
        category: QuestionCategory::Mental,
        question: "What best describes your learning style?",
        options: &[
            option(
                Dosha::Vata,
                "Learn quickly, forget quickly, grasp concepts fast",
                3,
                Citation::verse(
                    CHARAKA,
                    "Sutrasthana 18.52",
                    "क्षिप्रबुद्धित्वं",
                    "Quick understanding",
                ),
            ),
            option(
                Dosha::Pitta,
                "Learn moderately, retain well, analytical",
                3,
                Citation::verse(
                    CHARAKA,
                    "Sutrasthana 18.53",
                    "मध्यबुद्धित्वं",
                    "Moderate understanding",
                ),
            ),
            option(
                Dosha::Kapha,
                "Learn slowly, retain excellently, methodical",
                3,
                Citation::verse(CHARAKA, "Sutrasthana 18.54", "मन्दबुद्धित्वं", "Slow understanding"),
            ),
        ],
    },
    Question {
        id: "sleep_pattern",
        category: QuestionCategory::Lifestyle,
        question: "What best describes your sleep pattern?",
        options: &[
            option(
                Dosha::Vata,
                "Light sleeper, easily disturbed, insomnia tendencies",
                3,
                Citation::verse(CHARAKA, "Sutrasthana 18.55", "अल्पनिद्रत्वं", "Less sleep"),
            ),
            option(
                Dosha::Pitta,
                "Moderate sleeper, vivid dreams, wakes hot",
                3,
                Citation::verse(CHARAKA, "Sutrasthana 18.56", "मध्यनिद्रत्वं", "Moderate sleep"),
            ),
            option(
                Dosha::Kapha,
                "Deep sleeper, long sleep, hard to wake",
                3,
                Citation::verse(CHARAKA, "Sutrasthana 18.57", "बहुनिद्रत्वं", "Excessive sleep"),
            ),
        ],
    },
];
