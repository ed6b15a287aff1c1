use serde::Serialize;

use super::citation::Citation;
use super::dosha::Dosha;

/// One themed block of advice (e.g. "Grains" with the foods it lists).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdviceBlock {
    pub category: &'static str,
    pub items: &'static [&'static str],
    pub classical_reference: Citation,
}

/// Static diet, lifestyle, and herb blocks for one dosha.
#[derive(Debug, Clone, Copy)]
pub struct DoshaRegimen {
    pub diet: &'static [AdviceBlock],
    pub lifestyle: &'static [AdviceBlock],
    pub herbs: &'static [AdviceBlock],
}

pub fn regimen(dosha: Dosha) -> &'static DoshaRegimen {
    match dosha {
        Dosha::Vata => &VATA_REGIMEN,
        Dosha::Pitta => &PITTA_REGIMEN,
        Dosha::Kapha => &KAPHA_REGIMEN,
    }
}

pub fn yoga_blocks(dosha: Dosha) -> &'static [AdviceBlock] {
    match dosha {
        Dosha::Vata => VATA_YOGA,
        Dosha::Pitta => PITTA_YOGA,
        Dosha::Kapha => KAPHA_YOGA,
    }
}

/// General references attached to every constitution report.
pub fn constitution_references() -> &'static [Citation] {
    CONSTITUTION_REFERENCES
}

const CHARAKA: &str = "Charaka Samhita";
const HATHA: &str = "Hatha Yoga Pradipika";

static VATA_REGIMEN: DoshaRegimen = DoshaRegimen {
    diet: &[
        AdviceBlock {
            category: "Grains",
            items: &["Rice", "Wheat", "Oats", "Quinoa"],
            classical_reference: Citation::verse(
                CHARAKA,
                "Sutrasthana 25.40",
                "शालयः शष्पिका यवाः",
                "Rice, barley, and wheat are beneficial for Vata",
            ),
        },
        AdviceBlock {
            category: "Dairy",
            items: &["Milk", "Ghee", "Butter", "Yogurt"],
            classical_reference: Citation::verse(
                CHARAKA,
                "Sutrasthana 25.41",
                "दुग्धं सर्पिः घृतं च",
                "Milk, ghee, and butter are nourishing for Vata",
            ),
        },
    ],
    lifestyle: &[AdviceBlock {
        category: "Daily Routine",
        items: &["Early bedtime", "Regular routine", "Warm oil massage"],
        classical_reference: Citation::verse(
            CHARAKA,
            "Sutrasthana 5.25",
            "स्निग्धोष्णमधुराहारः",
            "Oily, warm, and sweet foods are beneficial",
        ),
    }],
    herbs: &[AdviceBlock {
        category: "Calming Herbs",
        items: &["Ashwagandha", "Brahmi", "Jatamansi", "Shankhpushpi"],
        classical_reference: Citation::verse(
            CHARAKA,
            "Chikitsa 1.30",
            "शंखपुष्पी ब्राह्मी च",
            "Shankhpushpi and Brahmi are beneficial for the mind",
        ),
    }],
};

static PITTA_REGIMEN: DoshaRegimen = DoshaRegimen {
    diet: &[AdviceBlock {
        category: "Cooling Foods",
        items: &["Cucumber", "Coconut", "Mint", "Coriander"],
        classical_reference: Citation::verse(
            CHARAKA,
            "Sutrasthana 25.42",
            "शीतलं मधुरं च",
            "Cool and sweet foods are beneficial for Pitta",
        ),
    }],
    lifestyle: &[AdviceBlock {
        category: "Cooling Practices",
        items: &["Moon gazing", "Cool baths", "Gentle exercise"],
        classical_reference: Citation::verse(
            CHARAKA,
            "Sutrasthana 5.26",
            "शीतलं लघु च",
            "Cool and light practices are beneficial",
        ),
    }],
    herbs: &[AdviceBlock {
        category: "Cooling Herbs",
        items: &["Neem", "Guduchi", "Manjistha", "Shatavari"],
        classical_reference: Citation::verse(
            CHARAKA,
            "Chikitsa 1.31",
            "गुडूची निम्बः च",
            "Guduchi and Neem are beneficial for Pitta",
        ),
    }],
};

static KAPHA_REGIMEN: DoshaRegimen = DoshaRegimen {
    diet: &[AdviceBlock {
        category: "Light Foods",
        items: &["Barley", "Honey", "Ginger", "Black pepper"],
        classical_reference: Citation::verse(
            CHARAKA,
            "Sutrasthana 25.43",
            "लघु रूक्षं च",
            "Light and dry foods are beneficial for Kapha",
        ),
    }],
    lifestyle: &[AdviceBlock {
        category: "Stimulating Practices",
        items: &["Vigorous exercise", "Dry massage", "Early rising"],
        classical_reference: Citation::verse(
            CHARAKA,
            "Sutrasthana 5.27",
            "रूक्षं लघु च",
            "Dry and light practices are beneficial",
        ),
    }],
    herbs: &[AdviceBlock {
        category: "Stimulating Herbs",
        items: &["Trikatu", "Pippali", "Ginger", "Tulsi"],
        classical_reference: Citation::verse(
            CHARAKA,
            "Chikitsa 1.32",
            "त्रिकटु पिप्पली च",
            "Trikatu and Pippali are beneficial for Kapha",
        ),
    }],
};

static VATA_YOGA: &[AdviceBlock] = &[
    AdviceBlock {
        category: "Grounding Asanas",
        items: &["Tadasana", "Vrikshasana", "Balasana", "Sukhasana"],
        classical_reference: Citation::verse(
            HATHA,
            "1.17",
            "स्थिरं सुखं आसनं",
            "Steady and comfortable posture",
        ),
    },
    AdviceBlock {
        category: "Calming Pranayama",
        items: &["Nadi Shodhana", "Bhramari", "Sheetali"],
        classical_reference: Citation::verse(
            HATHA,
            "2.5",
            "प्राणायामेन मलशोधनं",
            "Purification through pranayama",
        ),
    },
];

static PITTA_YOGA: &[AdviceBlock] = &[AdviceBlock {
    category: "Cooling Asanas",
    items: &["Chandra Namaskara", "Shitali Pranayama", "Sheetkari"],
    classical_reference: Citation::verse(
        HATHA,
        "2.54",
        "शीतली शीतकरी चैव",
        "Cooling breath practices",
    ),
}];

static KAPHA_YOGA: &[AdviceBlock] = &[AdviceBlock {
    category: "Energizing Asanas",
    items: &["Surya Namaskara", "Bhujangasana", "Dhanurasana"],
    classical_reference: Citation::verse(
        HATHA,
        "1.27",
        "उद्योगं कुरुते",
        "Generates energy and activity",
    ),
}];

static CONSTITUTION_REFERENCES: &[Citation] = &[
    Citation::verse(
        CHARAKA,
        "8.96-98",
        "वातः पित्तं कफश्चेति त्रयो दोषाः समासतः",
        "Vata, Pitta, and Kapha are the three doshas in brief",
    )
    .in_chapter("Sutrasthana")
    .with_relevance("Basic dosha characteristics"),
    Citation::verse(
        "Ashtanga Hridayam",
        "1.8",
        "वायुः पित्तं कफश्चेति त्रयो दोषाः प्रकीर्तिताः",
        "Vata, Pitta, and Kapha are declared as the three doshas",
    )
    .in_chapter("Sutrasthana")
    .with_relevance("Dosha functions and qualities"),
];
