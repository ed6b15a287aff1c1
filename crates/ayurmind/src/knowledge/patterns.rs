//! Tables behind the standalone pattern analyzer: an eleven-question weight table, the
//! per-dosha profiles with their five subtypes, and the personalised regimens.

use serde::Serialize;

use super::dosha::{Dosha, DoshaScores};

#[derive(Debug, Clone, Copy)]
pub struct PatternOption {
    pub key: &'static str,
    pub weights: DoshaScores,
    /// Subtype the answer points at, when the question maps to one.
    pub subdosha: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct PatternQuestion {
    pub id: &'static str,
    pub options: &'static [PatternOption],
}

impl PatternQuestion {
    pub fn option(&self, key: &str) -> Option<&'static PatternOption> {
        self.options.iter().find(|option| option.key == key)
    }
}

pub fn pattern_questions() -> &'static [PatternQuestion] {
    PATTERN_QUESTIONS
}

pub fn pattern_question(id: &str) -> Option<&'static PatternQuestion> {
    PATTERN_QUESTIONS.iter().find(|question| question.id == id)
}

/// Sanskrit verse with transliteration and its source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerseNote {
    pub sanskrit: &'static str,
    pub iast: &'static str,
    pub translation: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContextualVerse {
    #[serde(flatten)]
    pub verse: VerseNote,
    pub context: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SubtypeProfile {
    pub name: &'static str,
    pub location: &'static str,
    pub functions: &'static [&'static str],
    pub verse: &'static str,
    pub source: &'static str,
    pub balanced_signs: &'static [&'static str],
    pub imbalanced_signs: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DoshaProfile {
    pub name: &'static str,
    pub element: &'static str,
    pub qualities: &'static [&'static str],
    pub description: &'static str,
    pub classical_verse: VerseNote,
    pub subtypes: &'static [SubtypeProfile],
}

pub fn profile(dosha: Dosha) -> &'static DoshaProfile {
    match dosha {
        Dosha::Vata => &VATA_PROFILE,
        Dosha::Pitta => &PITTA_PROFILE,
        Dosha::Kapha => &KAPHA_PROFILE,
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DietGuide {
    pub description: &'static str,
    pub foods: &'static [&'static str],
    pub avoid: &'static [&'static str],
    pub verse: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LifestyleGuide {
    pub description: &'static str,
    pub practices: &'static [&'static str],
    pub avoid: &'static [&'static str],
    pub verse: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HerbGuide {
    pub description: &'static str,
    pub herbs: &'static [&'static str],
    pub verse: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeasonalGuide {
    pub spring: &'static [&'static str],
    pub summer: &'static [&'static str],
    pub autumn: &'static [&'static str],
    pub winter: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PersonalisedRegimen {
    pub diet: DietGuide,
    pub lifestyle: LifestyleGuide,
    pub herbs: HerbGuide,
    pub seasonal: SeasonalGuide,
}

pub fn personalised_regimen(dosha: Dosha) -> &'static PersonalisedRegimen {
    match dosha {
        Dosha::Vata => &VATA_PERSONALISED,
        Dosha::Pitta => &PITTA_PERSONALISED,
        Dosha::Kapha => &KAPHA_PERSONALISED,
    }
}

/// Principles quoted after the primary dosha's own verse.
pub fn foundational_references() -> &'static [ContextualVerse] {
    FOUNDATIONAL_REFERENCES
}

pub const IMBALANCE_GUIDANCE: &[&str] = &[
    "Consult an Ayurvedic practitioner",
    "Follow pacifying diet and lifestyle",
    "Practice stress management",
    "Consider seasonal adjustments",
];

const fn opt(
    key: &'static str,
    dosha: Dosha,
    weight: u32,
    subdosha: Option<&'static str>,
) -> PatternOption {
    let weights = match dosha {
        Dosha::Vata => DoshaScores::new(weight, 0, 0),
        Dosha::Pitta => DoshaScores::new(0, weight, 0),
        Dosha::Kapha => DoshaScores::new(0, 0, weight),
    };
    PatternOption {
        key,
        weights,
        subdosha,
    }
}

const fn triad(
    keys: [&'static str; 3],
    weight: u32,
    subdoshas: Option<[&'static str; 3]>,
) -> [PatternOption; 3] {
    match subdoshas {
        Some([vata, pitta, kapha]) => [
            opt(keys[0], Dosha::Vata, weight, Some(vata)),
            opt(keys[1], Dosha::Pitta, weight, Some(pitta)),
            opt(keys[2], Dosha::Kapha, weight, Some(kapha)),
        ],
        None => [
            opt(keys[0], Dosha::Vata, weight, None),
            opt(keys[1], Dosha::Pitta, weight, None),
            opt(keys[2], Dosha::Kapha, weight, None),
        ],
    }
}

const APANA: &str = "Apāna Vāta";
const PRANA: &str = "Prāna Vāta";
const VYANA: &str = "Vyana Vata";
const UDANA: &str = "Udana Vata";
const PACHAKA: &str = "Pachaka Pitta";
const SADHAKA: &str = "Sadhaka Pitta";
const RANJAKA: &str = "Ranjaka Pitta";
const ALOCHAKA: &str = "Alochaka Pitta";
const KLEDAKA: &str = "Kledaka Kapha";
const TARPAKA: &str = "Tarpaka Kapha";
const AVALAMBAKA: &str = "Avalambaka Kapha";
const BODHAKA: &str = "Bodhaka Kapha";

static DIGESTION: [PatternOption; 3] = triad(
    ["irregular", "sharp", "slow"],
    4,
    Some([APANA, PACHAKA, KLEDAKA]),
);
static MENTAL_ACTIVITY: [PatternOption; 3] = triad(
    ["quick", "sharp", "steady"],
    4,
    Some([PRANA, SADHAKA, TARPAKA]),
);
static STRESS_RESPONSE: [PatternOption; 3] = triad(
    ["anxious", "angry", "withdrawn"],
    4,
    Some([PRANA, RANJAKA, AVALAMBAKA]),
);
static ENERGY: [PatternOption; 3] = triad(
    ["variable", "intense", "steady"],
    3,
    Some([VYANA, ALOCHAKA, BODHAKA]),
);
static SLEEP: [PatternOption; 3] = triad(
    ["light", "moderate", "deep"],
    3,
    Some([PRANA, SADHAKA, TARPAKA]),
);
static SPEECH: [PatternOption; 3] = triad(
    ["fast", "clear", "slow"],
    3,
    Some([UDANA, SADHAKA, TARPAKA]),
);
static CLIMATE: [PatternOption; 3] =
    triad(["warm", "cool", "dry"], 2, None);
static MEMORY: [PatternOption; 3] = triad(
    ["quick", "sharp", "steady"],
    3,
    Some([PRANA, SADHAKA, TARPAKA]),
);
static CIRCULATION: [PatternOption; 3] = triad(
    ["variable", "warm", "steady"],
    3,
    Some([VYANA, RANJAKA, AVALAMBAKA]),
);
static ELIMINATION: [PatternOption; 3] = triad(
    ["irregular", "loose", "steady"],
    3,
    Some([APANA, PACHAKA, KLEDAKA]),
);
static EMOTION: [PatternOption; 3] = triad(
    ["fear", "anger", "attachment"],
    3,
    Some([PRANA, RANJAKA, AVALAMBAKA]),
);

static PATTERN_QUESTIONS: &[PatternQuestion] = &[
    PatternQuestion {
        id: "digestion_pattern",
        options: &DIGESTION,
    },
    PatternQuestion {
        id: "mental_activity",
        options: &MENTAL_ACTIVITY,
    },
    PatternQuestion {
        id: "stress_response",
        options: &STRESS_RESPONSE,
    },
    PatternQuestion {
        id: "energy_pattern",
        options: &ENERGY,
    },
    PatternQuestion {
        id: "sleep_pattern",
        options: &SLEEP,
    },
    PatternQuestion {
        id: "speech_pattern",
        options: &SPEECH,
    },
    PatternQuestion {
        id: "climate_preference",
        options: &CLIMATE,
    },
    PatternQuestion {
        id: "memory_pattern",
        options: &MEMORY,
    },
    PatternQuestion {
        id: "circulation_pattern",
        options: &CIRCULATION,
    },
    PatternQuestion {
        id: "elimination_pattern",
        options: &ELIMINATION,
    },
    PatternQuestion {
        id: "emotional_tendency",
        options: &EMOTION,
    },
];

static VATA_PROFILE: DoshaProfile = DoshaProfile {
    name: "Vata",
    element: "Air & Ether",
    qualities: &["Dry", "Light", "Cold", "Rough", "Subtle", "Mobile", "Clear"],
    description: "The energy of movement and change. Governs breathing, circulation, and nervous system functions.",
    classical_verse: VerseNote {
        sanskrit: "रूक्षो लघुः शीतः खरः सूक्ष्मश्चलोऽनिलः",
        iast: "rūkṣo laghuḥ śītaḥ kharaḥ sūkṣmaścalo'nilaḥ",
        translation: "Dry, light, cold, rough, subtle, and mobile",
        source: "Charaka Samhita, Sutrasthana 1.59",
    },
    subtypes: &[
        SubtypeProfile {
            name: "Prana Vata",
            location: "Head, brain",
            functions: &["Respiration", "swallowing", "mental activities"],
            verse: "प्राणो उदानव्यानसमानापानाख्याः...",
            source: "Charaka Samhita, Sutrasthana 12.8",
            balanced_signs: &["Clear speech", "steady mind", "good memory"],
            imbalanced_signs: &["Anxiety", "dry cough", "insomnia", "speech disorders"],
        },
        SubtypeProfile {
            name: "Udana Vata",
            location: "Chest, throat",
            functions: &["Speech", "exertion", "memory"],
            verse: "उदानः कण्ठमूर्धजत्रुगतिः...",
            source: "Charaka Samhita, Sutrasthana 12.9",
            balanced_signs: &["Clear voice", "good memory", "proper speech"],
            imbalanced_signs: &["Hoarseness", "memory loss", "speech problems"],
        },
        SubtypeProfile {
            name: "Vyana Vata",
            location: "Heart, circulation",
            functions: &["Circulation", "movement", "sensory perception"],
            verse: "व्यानः सर्वशरीरगः...",
            source: "Charaka Samhita, Sutrasthana 12.10",
            balanced_signs: &["Good circulation", "proper movement", "clear senses"],
            imbalanced_signs: &["Poor circulation", "tremors", "sensory issues"],
        },
        SubtypeProfile {
            name: "Samana Vata",
            location: "Stomach, intestines",
            functions: &["Digestion", "absorption", "separation"],
            verse: "समानः कोष्ठगः...",
            source: "Charaka Samhita, Sutrasthana 12.11",
            balanced_signs: &["Good digestion", "proper absorption"],
            imbalanced_signs: &["Poor digestion", "bloating", "malabsorption"],
        },
        SubtypeProfile {
            name: "Apana Vata",
            location: "Colon, pelvic region",
            functions: &["Elimination", "reproduction", "downward movement"],
            verse: "अपानः पायुमेढ्रनाभिस्थः...",
            source: "Charaka Samhita, Sutrasthana 12.12",
            balanced_signs: &["Regular elimination", "good reproductive health"],
            imbalanced_signs: &["Constipation", "diarrhea", "reproductive issues"],
        },
    ],
};

static PITTA_PROFILE: DoshaProfile = DoshaProfile {
    name: "Pitta",
    element: "Fire & Water",
    qualities: &["Oily", "Sharp", "Hot", "Light", "Liquid", "Mobile", "Sour"],
    description: "The energy of transformation. Governs digestion, metabolism, and body temperature.",
    classical_verse: VerseNote {
        sanskrit: "सस्नेहतीक्ष्णोष्णलघुविस्रं सरं द्रवं पित्तं",
        iast: "sasnehatīkṣṇoṣṇalaghuvistraṃ saraṃ dravaṃ pittaṃ",
        translation: "Oily, sharp, hot, light, flowing, liquid",
        source: "Charaka Samhita, Sutrasthana 1.60",
    },
    subtypes: &[
        SubtypeProfile {
            name: "Pachaka Pitta",
            location: "Stomach, small intestine",
            functions: &["Digestion", "enzyme secretion"],
            verse: "पचति अन्नं पचकः...",
            source: "Charaka Samhita, Sutrasthana 12.11",
            balanced_signs: &["Good digestion", "proper enzyme function"],
            imbalanced_signs: &["Acidity", "ulcers", "poor digestion"],
        },
        SubtypeProfile {
            name: "Ranjaka Pitta",
            location: "Liver, spleen",
            functions: &["Blood formation", "coloring"],
            verse: "रञ्जयति रक्तं रञ्जकः...",
            source: "Charaka Samhita, Sutrasthana 12.12",
            balanced_signs: &["Good blood quality", "proper coloring"],
            imbalanced_signs: &["Jaundice", "blood disorders", "skin discoloration"],
        },
        SubtypeProfile {
            name: "Sadhaka Pitta",
            location: "Heart, brain",
            functions: &["Intelligence", "memory", "cognition"],
            verse: "साधयति बुद्धिं...",
            source: "Charaka Samhita, Sutrasthana 12.13",
            balanced_signs: &["Sharp intellect", "good memory", "clear thinking"],
            imbalanced_signs: &["Mental confusion", "memory loss", "irritability"],
        },
        SubtypeProfile {
            name: "Alochaka Pitta",
            location: "Eyes",
            functions: &["Vision", "color perception"],
            verse: "लोचयति रूपं...",
            source: "Charaka Samhita, Sutrasthana 12.14",
            balanced_signs: &["Good vision", "proper color perception"],
            imbalanced_signs: &["Eye problems", "color blindness", "vision issues"],
        },
        SubtypeProfile {
            name: "Bhrajaka Pitta",
            location: "Skin",
            functions: &["Skin color", "complexion", "temperature regulation"],
            verse: "भ्राजयति त्वचं...",
            source: "Charaka Samhita, Sutrasthana 12.15",
            balanced_signs: &["Good complexion", "proper skin color"],
            imbalanced_signs: &["Skin rashes", "discoloration", "burning sensation"],
        },
    ],
};

static KAPHA_PROFILE: DoshaProfile = DoshaProfile {
    name: "Kapha",
    element: "Earth & Water",
    qualities: &["Oily", "Cool", "Heavy", "Slow", "Smooth", "Soft", "Stable"],
    description: "The energy of structure and stability. Governs immunity, growth, and lubrication.",
    classical_verse: VerseNote {
        sanskrit: "स्निग्धः शीतो गुरुर्मन्दः श्लक्ष्णो मृत्स्नः स्थिरः कफः",
        iast: "snigdhaḥ śīto gururmandaḥ ślakṣṇo mṛtsnaḥ sthiraḥ kaphaḥ",
        translation: "Oily, cold, heavy, slow, smooth, soft, stable",
        source: "Charaka Samhita, Sutrasthana 1.61",
    },
    subtypes: &[
        SubtypeProfile {
            name: "Kledaka Kapha",
            location: "Stomach",
            functions: &["Moistening", "digestive lubrication"],
            verse: "क्लेदयति अन्नं क्लेदकः...",
            source: "Charaka Samhita, Sutrasthana 12.15",
            balanced_signs: &["Good digestion", "proper lubrication"],
            imbalanced_signs: &["Poor digestion", "excess mucus", "nausea"],
        },
        SubtypeProfile {
            name: "Avalambaka Kapha",
            location: "Chest, heart",
            functions: &["Support", "nourishment"],
            verse: "आवलम्बते हृदयं...",
            source: "Charaka Samhita, Sutrasthana 12.16",
            balanced_signs: &["Good strength", "proper nourishment"],
            imbalanced_signs: &["Weakness", "poor nourishment", "respiratory issues"],
        },
        SubtypeProfile {
            name: "Bodhaka Kapha",
            location: "Tongue, mouth",
            functions: &["Taste perception", "saliva production"],
            verse: "बोधयति रसं...",
            source: "Charaka Samhita, Sutrasthana 12.17",
            balanced_signs: &["Good taste", "proper saliva"],
            imbalanced_signs: &["Poor taste", "excess saliva", "mouth issues"],
        },
        SubtypeProfile {
            name: "Tarpaka Kapha",
            location: "Brain, nervous system",
            functions: &["Nourishment", "protection"],
            verse: "तर्पयति इन्द्रियाणि...",
            source: "Charaka Samhita, Sutrasthana 12.18",
            balanced_signs: &["Good memory", "proper nourishment"],
            imbalanced_signs: &["Poor memory", "lethargy", "mental dullness"],
        },
        SubtypeProfile {
            name: "Shleshaka Kapha",
            location: "Joints",
            functions: &["Lubrication", "joint health"],
            verse: "श्लेषयति सन्धीन्...",
            source: "Charaka Samhita, Sutrasthana 12.19",
            balanced_signs: &["Good joint health", "proper lubrication"],
            imbalanced_signs: &["Joint problems", "stiffness", "swelling"],
        },
    ],
};

static VATA_PERSONALISED: PersonalisedRegimen = PersonalisedRegimen {
    diet: DietGuide {
        description: "Favor warm, moist, and grounding foods. Avoid cold, dry, and light foods.",
        foods: &[
            "Warm milk",
            "ghee",
            "sweet fruits",
            "cooked vegetables",
            "rice",
            "nuts",
            "sesame oil",
        ],
        avoid: &[
            "Cold drinks",
            "raw vegetables",
            "dry foods",
            "bitter tastes",
            "excessive fasting",
        ],
        verse: "वाते घृतं पयः...",
        source: "Bhava Prakasha, Purvakhanda 3.2",
    },
    lifestyle: LifestyleGuide {
        description: "Maintain a regular routine, warm oil massage, and gentle exercise.",
        practices: &[
            "Daily abhyanga (oil massage)",
            "regular sleep schedule",
            "gentle yoga",
            "meditation",
            "warm baths",
        ],
        avoid: &[
            "Irregular schedule",
            "excessive travel",
            "cold exposure",
            "over-exertion",
            "late nights",
        ],
        verse: "अभ्यङ्गः सर्वदा हितः...",
        source: "Charaka Samhita, Sutrasthana 5.88",
    },
    herbs: HerbGuide {
        description: "Use warming, grounding herbs to pacify Vata.",
        herbs: &["Ashwagandha", "Shatavari", "Bala", "Guduchi", "Triphala", "Sesame seeds"],
        verse: "अश्वगन्धा बला...",
        source: "Bhava Prakasha Nighantu, Guduchyadi Varga",
    },
    seasonal: SeasonalGuide {
        spring: &["Increase warm foods", "gentle exercise", "regular routine"],
        summer: &["Stay hydrated", "cool foods", "avoid excessive heat"],
        autumn: &["Warm foods", "oil massage", "grounding practices"],
        winter: &["Warm foods", "oil massage", "avoid cold"],
    },
};

static PITTA_PERSONALISED: PersonalisedRegimen = PersonalisedRegimen {
    diet: DietGuide {
        description: "Favor cooling, sweet, and bitter foods. Avoid hot, spicy, and sour foods.",
        foods: &[
            "Sweet fruits",
            "cucumber",
            "coconut",
            "milk",
            "ghee",
            "bitter vegetables",
            "cooling herbs",
        ],
        avoid: &["Hot spices", "sour foods", "alcohol", "fermented foods", "excessive salt"],
        verse: "पित्ते क्षीरं घृतं...",
        source: "Bhava Prakasha, Purvakhanda 3.3",
    },
    lifestyle: LifestyleGuide {
        description: "Stay cool, avoid excessive heat, and practice calming activities.",
        practices: &[
            "Cool baths",
            "moonlight exposure",
            "calming yoga",
            "meditation",
            "cool environments",
        ],
        avoid: &[
            "Excessive sun exposure",
            "hot environments",
            "intense exercise",
            "anger",
            "competition",
        ],
        verse: "शीतलं पित्तहरं...",
        source: "Charaka Samhita, Sutrasthana 5.89",
    },
    herbs: HerbGuide {
        description: "Use cooling, pacifying herbs to balance Pitta.",
        herbs: &["Shatavari", "Guduchi", "Neem", "Amla", "Manjistha", "Coriander"],
        verse: "शतावरी गुडूची...",
        source: "Bhava Prakasha Nighantu, Guduchyadi Varga",
    },
    seasonal: SeasonalGuide {
        spring: &["Cooling foods", "gentle exercise", "avoid heat"],
        summer: &["Cool foods", "stay hydrated", "avoid sun"],
        autumn: &["Moderate foods", "balance heat and cool"],
        winter: &["Warm foods", "avoid excessive heat"],
    },
};

static KAPHA_PERSONALISED: PersonalisedRegimen = PersonalisedRegimen {
    diet: DietGuide {
        description: "Favor light, dry, and warming foods. Avoid heavy, oily, and cold foods.",
        foods: &[
            "Light grains",
            "bitter vegetables",
            "honey",
            "ginger",
            "pepper",
            "pungent spices",
        ],
        avoid: &["Heavy foods", "dairy", "sweet foods", "cold foods", "excessive oil"],
        verse: "कफे लघु रूक्षं...",
        source: "Bhava Prakasha, Purvakhanda 3.4",
    },
    lifestyle: LifestyleGuide {
        description: "Stay active, avoid excessive sleep, and practice stimulating activities.",
        practices: &[
            "Regular exercise",
            "early rising",
            "stimulating yoga",
            "dry massage",
            "vigorous activity",
        ],
        avoid: &["Excessive sleep", "sedentary lifestyle", "cold exposure", "heavy foods"],
        verse: "व्यायामः कफहरः...",
        source: "Charaka Samhita, Sutrasthana 5.90",
    },
    herbs: HerbGuide {
        description: "Use stimulating, drying herbs to balance Kapha.",
        herbs: &["Ginger", "Black Pepper", "Pippali", "Tulsi", "Triphala", "Turmeric"],
        verse: "शुण्ठी मरिचं...",
        source: "Bhava Prakasha Nighantu, Haritakyadi Varga",
    },
    seasonal: SeasonalGuide {
        spring: &["Light foods", "exercise", "avoid heavy foods"],
        summer: &["Cool foods", "moderate exercise", "avoid heat"],
        autumn: &["Warm foods", "stimulating exercise", "avoid cold"],
        winter: &["Warm foods", "vigorous exercise", "avoid cold"],
    },
};

static FOUNDATIONAL_REFERENCES: &[ContextualVerse] = &[
    ContextualVerse {
        verse: VerseNote {
            sanskrit: "त्रिदोषज्ञानं रोगनिदानम्...",
            iast: "tridoṣajñānaṃ roganidānam...",
            translation: "Knowledge of the three doshas is the foundation of disease diagnosis",
            source: "Charaka Samhita, Sutrasthana 1.57",
        },
        context: "Fundamental principle",
    },
    ContextualVerse {
        verse: VerseNote {
            sanskrit: "स्वस्थस्य स्वास्थ्यरक्षणं...",
            iast: "svasthasya svāsthyarakṣaṇaṃ...",
            translation: "Preservation of health of the healthy person",
            source: "Charaka Samhita, Sutrasthana 1.1",
        },
        context: "Preventive approach",
    },
];
