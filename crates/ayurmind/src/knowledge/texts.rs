use serde::Serialize;

use super::citation::Citation;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClassicalText {
    pub name: &'static str,
    pub sanskrit: &'static str,
    pub author: &'static str,
    pub period: &'static str,
    pub chapters: &'static [&'static str],
    pub relevance: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExaminationComponent {
    pub name: &'static str,
    pub sanskrit: &'static str,
    pub description: &'static str,
    pub includes: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AssessmentMode {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub questions: &'static str,
}

/// Trividha Pariksha, the three-fold examination the questionnaire follows.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Methodology {
    pub name: &'static str,
    pub sanskrit: &'static str,
    pub description: &'static str,
    pub components: &'static [ExaminationComponent],
    pub classical_reference: Citation,
    pub assessment_types: &'static [AssessmentMode],
}

pub const TEXTS_NOTE: &str = "These texts form the foundation of classical Ayurvedic knowledge and are referenced throughout the assessment system.";

pub fn classical_texts() -> &'static [ClassicalText] {
    CLASSICAL_TEXTS
}

pub fn methodology() -> &'static Methodology {
    &METHODOLOGY
}

static CLASSICAL_TEXTS: &[ClassicalText] = &[
    ClassicalText {
        name: "Charaka Samhita",
        sanskrit: "चरक संहिता",
        author: "Acharya Charaka",
        period: "2nd century BCE - 2nd century CE",
        chapters: &[
            "Sutrasthana",
            "Nidanasthana",
            "Vimanasthana",
            "Sharirasthana",
            "Indriyasthana",
            "Chikitsasthana",
            "Kalpasthana",
            "Siddhisthana",
        ],
        relevance: "Primary text for internal medicine and dosha theory",
    },
    ClassicalText {
        name: "Sushruta Samhita",
        sanskrit: "सुश्रुत संहिता",
        author: "Acharya Sushruta",
        period: "6th century BCE - 2nd century CE",
        chapters: &[
            "Sutrasthana",
            "Nidanasthana",
            "Sharirasthana",
            "Chikitsasthana",
            "Kalpasthana",
            "Uttaratantra",
        ],
        relevance: "Primary text for surgery and anatomical knowledge",
    },
    ClassicalText {
        name: "Ashtanga Hridayam",
        sanskrit: "अष्टांग हृदयम्",
        author: "Acharya Vagbhata",
        period: "6th century CE",
        chapters: &[
            "Sutrasthana",
            "Sharirasthana",
            "Nidanasthana",
            "Chikitsasthana",
            "Kalpasthana",
            "Uttarasthana",
        ],
        relevance: "Comprehensive compilation of Charaka and Sushruta",
    },
    ClassicalText {
        name: "Bhava Prakasha",
        sanskrit: "भाव प्रकाश",
        author: "Bhava Mishra",
        period: "16th century CE",
        chapters: &["Purva Khanda", "Madhya Khanda", "Uttara Khanda"],
        relevance: "Comprehensive text on materia medica and therapeutics",
    },
    ClassicalText {
        name: "Madhava Nidanam",
        sanskrit: "माधव निदानम्",
        author: "Madhavakara",
        period: "7th century CE",
        chapters: &["Roga Vinishchaya"],
        relevance: "Specialized text on disease diagnosis and classification",
    },
];

static METHODOLOGY: Methodology = Methodology {
    name: "Trividha Pariksha (Three-fold Examination)",
    sanskrit: "त्रिविध परीक्षा",
    description: "Classical Ayurvedic diagnostic methodology based on Charaka Samhita",
    components: &[
        ExaminationComponent {
            name: "Darshana (Observation)",
            sanskrit: "दर्शन",
            description: "Visual examination of physical characteristics",
            includes: &[
                "Body structure",
                "Skin texture",
                "Eye characteristics",
                "Hair quality",
                "Nail quality",
            ],
        },
        ExaminationComponent {
            name: "Sparshana (Palpation)",
            sanskrit: "स्पर्शन",
            description: "Physical examination through touch",
            includes: &["Skin temperature", "Pulse examination", "Body texture", "Joint mobility"],
        },
        ExaminationComponent {
            name: "Prashna (Questioning)",
            sanskrit: "प्रश्न",
            description: "Systematic questioning about symptoms and patterns",
            includes: &[
                "Digestive patterns",
                "Sleep patterns",
                "Mental characteristics",
                "Lifestyle preferences",
            ],
        },
    ],
    classical_reference: Citation::verse(
        "Charaka Samhita",
        "Vimana 4.7",
        "दर्शनं स्पर्शनं प्रश्न इति त्रिविधं परीक्षणम्",
        "Examination is three-fold: observation, palpation, and questioning",
    ),
    assessment_types: &[
        AssessmentMode {
            kind: "comprehensive",
            name: "Comprehensive Assessment",
            description: "Full Trividha Pariksha with all classical parameters",
            duration: "15-20 minutes",
            questions: "22 questions across 4 categories",
        },
        AssessmentMode {
            kind: "quick",
            name: "Quick Assessment",
            description: "Abbreviated assessment for preliminary analysis",
            duration: "5-10 minutes",
            questions: "10-15 key questions",
        },
    ],
};
