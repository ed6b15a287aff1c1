use serde::Serialize;

use super::citation::Citation;
use super::dosha::Dosha;

/// Classical sub-category of a dosha (e.g. Prana Vata), read-only reference data.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DoshaSubtype {
    pub dosha: Dosha,
    pub subtype: &'static str,
    pub sanskrit_name: &'static str,
    pub iast_transliteration: &'static str,
    pub location: &'static str,
    pub functions: &'static [&'static str],
    pub symptoms: &'static [&'static str],
    pub classical_references: &'static [Citation],
    pub qualities: &'static [&'static str],
    pub elements: &'static [&'static str],
    pub therapeutic_actions: &'static [&'static str],
    pub balancing_practices: &'static [&'static str],
}

pub fn all_subtypes() -> &'static [DoshaSubtype] {
    SUBTYPES
}

/// Subtypes of one dosha ordered by their subtype key.
pub fn subtypes_of(dosha: Dosha) -> Vec<&'static DoshaSubtype> {
    let mut subtypes: Vec<_> = SUBTYPES
        .iter()
        .filter(|subtype| subtype.dosha == dosha)
        .collect();
    subtypes.sort_by_key(|subtype| subtype.subtype);
    subtypes
}

const fn charaka_12(
    verse: &'static str,
    section: &'static str,
    sanskrit: &'static str,
    english: &'static str,
) -> Citation {
    Citation::verse("Charaka Samhita", verse, sanskrit, english)
        .in_chapter("Sutrasthana")
        .in_section(section)
}

const VATA_SECTION: &str = "Vata Viddha Lakshana";
const PITTA_SECTION: &str = "Pitta Viddha Lakshana";
const KAPHA_SECTION: &str = "Kapha Viddha Lakshana";

static SUBTYPES: &[DoshaSubtype] = &[
    DoshaSubtype {
        dosha: Dosha::Vata,
        subtype: "prana_vata",
        sanskrit_name: "प्राण वात",
        iast_transliteration: "Prāṇa Vāta",
        location: "Head, chest, throat, heart, respiratory tract",
        functions: &[
            "Controls breathing and respiration",
            "Governs speech and voice",
            "Manages swallowing and sneezing",
            "Controls mental activities and thoughts",
        ],
        symptoms: &[
            "Anxiety and nervousness",
            "Stuttering or speech problems",
            "Confusion and mental restlessness",
            "Breathing difficulties",
        ],
        classical_references: &[charaka_12(
            "12.8",
            VATA_SECTION,
            "प्राणो वायुः शिरोग्रीवागतो वक्त्रं च धारयन्।",
            "Prana Vata moves in the head, neck, and maintains the mouth.",
        )],
        qualities: &["mobile", "light", "clear", "subtle"],
        elements: &["akasha", "vayu"],
        therapeutic_actions: &["Pranayama", "Meditation", "Grounding practices"],
        balancing_practices: &["Regular routine", "Warm oil massage", "Nourishing foods"],
    },
    DoshaSubtype {
        dosha: Dosha::Vata,
        subtype: "udana_vata",
        sanskrit_name: "उदान वात",
        iast_transliteration: "Udāna Vāta",
        location: "Chest, throat, nose, umbilicus",
        functions: &[
            "Controls speech and expression",
            "Manages effort and strength",
            "Governs memory and intelligence",
            "Controls upward movement",
        ],
        symptoms: &[
            "Hoarseness of voice",
            "Fatigue and weakness",
            "Chest pain and discomfort",
            "Memory problems",
        ],
        classical_references: &[charaka_12(
            "12.9",
            VATA_SECTION,
            "उदानो वायुः कण्ठे च नासिकायां च मूर्धनि।",
            "Udana Vata is located in the throat, nose, and head.",
        )],
        qualities: &["mobile", "light", "clear"],
        elements: &["akasha", "vayu"],
        therapeutic_actions: &["Voice exercises", "Breathing techniques", "Memory enhancement"],
        balancing_practices: &["Honey consumption", "Gentle throat care", "Mental exercises"],
    },
    DoshaSubtype {
        dosha: Dosha::Vata,
        subtype: "samana_vata",
        sanskrit_name: "समान वात",
        iast_transliteration: "Samāna Vāta",
        location: "Stomach, intestines, digestive tract",
        functions: &[
            "Controls digestion and metabolism",
            "Manages absorption of nutrients",
            "Governs separation of waste",
            "Maintains digestive fire (Agni)",
        ],
        symptoms: &[
            "Digestive disturbances",
            "Irregular appetite",
            "Gas and bloating",
            "Malabsorption issues",
        ],
        classical_references: &[charaka_12(
            "12.10",
            VATA_SECTION,
            "समानो वायुर्जठरे पचत्यन्नं च पाचयन्।",
            "Samana Vata is in the stomach and cooks the food.",
        )],
        qualities: &["mobile", "light", "clear"],
        elements: &["vayu", "agni"],
        therapeutic_actions: &["Digestive herbs", "Regular meal timing", "Agni enhancement"],
        balancing_practices: &["Ginger tea", "Regular eating schedule", "Digestive spices"],
    },
    DoshaSubtype {
        dosha: Dosha::Vata,
        subtype: "apana_vata",
        sanskrit_name: "अपान वात",
        iast_transliteration: "Apāna Vāta",
        location: "Pelvic region, colon, bladder, reproductive organs",
        functions: &[
            "Controls elimination and excretion",
            "Manages reproductive functions",
            "Governs downward movement",
            "Maintains pelvic health",
        ],
        symptoms: &[
            "Constipation or irregular elimination",
            "Reproductive issues",
            "Pelvic discomfort",
            "Urinary problems",
        ],
        classical_references: &[charaka_12(
            "12.11",
            VATA_SECTION,
            "अपानो वायुर्गुदे च मूत्रे च शुक्रे च मारुतः।",
            "Apana Vata is in the rectum, urine, and semen.",
        )],
        qualities: &["mobile", "light", "clear"],
        elements: &["vayu", "prithvi"],
        therapeutic_actions: &["Colon cleansing", "Pelvic exercises", "Elimination support"],
        balancing_practices: &[
            "Squatting exercises",
            "Pelvic floor strengthening",
            "Fiber-rich diet",
        ],
    },
    DoshaSubtype {
        dosha: Dosha::Vata,
        subtype: "vyana_vata",
        sanskrit_name: "व्यान वात",
        iast_transliteration: "Vyāna Vāta",
        location: "Entire body, blood vessels, skin",
        functions: &[
            "Controls circulation and blood flow",
            "Manages muscle movement",
            "Governs sweating and perspiration",
            "Maintains body coordination",
        ],
        symptoms: &[
            "Circulation problems",
            "Muscle spasms",
            "Excessive sweating",
            "Coordination issues",
        ],
        classical_references: &[charaka_12(
            "12.12",
            VATA_SECTION,
            "व्यानो वायुः सर्वशरीरचरः सर्वेन्द्रियाणि च।",
            "Vyana Vata moves throughout the body and all sense organs.",
        )],
        qualities: &["mobile", "light", "clear", "subtle"],
        elements: &["vayu"],
        therapeutic_actions: &["Massage therapy", "Exercise", "Circulation enhancement"],
        balancing_practices: &["Regular exercise", "Oil massage", "Movement therapy"],
    },
    DoshaSubtype {
        dosha: Dosha::Pitta,
        subtype: "pachaka_pitta",
        sanskrit_name: "पाचक पित्त",
        iast_transliteration: "Pācaka Pitta",
        location: "Stomach, small intestine",
        functions: &[
            "Controls digestion and metabolism",
            "Manages food transformation",
            "Governs digestive fire (Agni)",
            "Maintains body temperature",
        ],
        symptoms: &[
            "Digestive disorders",
            "Acidity and heartburn",
            "Fever and inflammation",
            "Metabolic issues",
        ],
        classical_references: &[charaka_12(
            "12.13",
            PITTA_SECTION,
            "पाचकं पित्तं जठरे पचत्यन्नं च पाचयन्।",
            "Pachaka Pitta is in the stomach and cooks the food.",
        )],
        qualities: &["hot", "sharp", "liquid", "oily"],
        elements: &["agni", "jala"],
        therapeutic_actions: &["Digestive cooling", "Agni balancing", "Anti-inflammatory"],
        balancing_practices: &["Cooling foods", "Aloe vera", "Coriander water"],
    },
    DoshaSubtype {
        dosha: Dosha::Pitta,
        subtype: "ranjaka_pitta",
        sanskrit_name: "रंजक पित्त",
        iast_transliteration: "Rañjaka Pitta",
        location: "Liver, spleen, blood",
        functions: &[
            "Controls blood formation",
            "Manages skin color and complexion",
            "Governs liver functions",
            "Maintains blood quality",
        ],
        symptoms: &[
            "Blood disorders",
            "Skin problems",
            "Liver issues",
            "Color changes in skin",
        ],
        classical_references: &[charaka_12(
            "12.14",
            PITTA_SECTION,
            "रंजकं पित्तं यकृति प्लीह्नि च रक्तं च रंजयन्।",
            "Ranjaka Pitta is in the liver and spleen, coloring the blood.",
        )],
        qualities: &["hot", "sharp", "liquid"],
        elements: &["agni", "jala"],
        therapeutic_actions: &["Liver support", "Blood purification", "Skin care"],
        balancing_practices: &[
            "Liver-friendly foods",
            "Blood cleansing herbs",
            "Skin care routine",
        ],
    },
    DoshaSubtype {
        dosha: Dosha::Pitta,
        subtype: "sadhaka_pitta",
        sanskrit_name: "साधक पित्त",
        iast_transliteration: "Sādhaka Pitta",
        location: "Heart, brain",
        functions: &[
            "Controls intelligence and wisdom",
            "Manages mental functions",
            "Governs memory and learning",
            "Maintains mental clarity",
        ],
        symptoms: &[
            "Mental confusion",
            "Memory problems",
            "Intellectual difficulties",
            "Emotional instability",
        ],
        classical_references: &[charaka_12(
            "12.15",
            PITTA_SECTION,
            "साधकं पित्तं हृदये बुद्धिं च साधयन्।",
            "Sadhaka Pitta is in the heart, accomplishing intelligence.",
        )],
        qualities: &["hot", "sharp", "clear"],
        elements: &["agni"],
        therapeutic_actions: &[
            "Mental clarity enhancement",
            "Intelligence support",
            "Memory improvement",
        ],
        balancing_practices: &["Meditation", "Mental exercises", "Cooling practices"],
    },
    DoshaSubtype {
        dosha: Dosha::Pitta,
        subtype: "alochaka_pitta",
        sanskrit_name: "आलोचक पित्त",
        iast_transliteration: "Ālocaka Pitta",
        location: "Eyes",
        functions: &[
            "Controls vision and sight",
            "Manages eye functions",
            "Governs visual perception",
            "Maintains eye health",
        ],
        symptoms: &[
            "Eye problems",
            "Vision disturbances",
            "Eye inflammation",
            "Visual sensitivity",
        ],
        classical_references: &[charaka_12(
            "12.16",
            PITTA_SECTION,
            "आलोचकं पित्तं नेत्रे रूपं चालोचयन्।",
            "Alochaka Pitta is in the eyes, perceiving forms.",
        )],
        qualities: &["hot", "sharp", "clear"],
        elements: &["agni"],
        therapeutic_actions: &["Eye care", "Vision support", "Eye cooling"],
        balancing_practices: &["Eye exercises", "Cooling eye treatments", "Vision protection"],
    },
    DoshaSubtype {
        dosha: Dosha::Pitta,
        subtype: "bhrajaka_pitta",
        sanskrit_name: "भ्राजक पित्त",
        iast_transliteration: "Bhrājaka Pitta",
        location: "Skin",
        functions: &[
            "Controls skin color and complexion",
            "Manages skin temperature",
            "Governs skin health",
            "Maintains skin glow",
        ],
        symptoms: &[
            "Skin disorders",
            "Skin inflammation",
            "Color changes",
            "Skin sensitivity",
        ],
        classical_references: &[charaka_12(
            "12.17",
            PITTA_SECTION,
            "भ्राजकं पित्तं त्वचि वर्णं च भ्राजयन्।",
            "Bhrajaka Pitta is in the skin, illuminating the complexion.",
        )],
        qualities: &["hot", "sharp", "oily"],
        elements: &["agni"],
        therapeutic_actions: &["Skin care", "Complexion enhancement", "Skin cooling"],
        balancing_practices: &["Cooling skin treatments", "Skin-friendly diet", "Sun protection"],
    },
    DoshaSubtype {
        dosha: Dosha::Kapha,
        subtype: "avalambaka_kapha",
        sanskrit_name: "अवलम्बक कफ",
        iast_transliteration: "Avalambaka Kapha",
        location: "Chest, heart, lungs",
        functions: &[
            "Provides support and stability",
            "Maintains chest strength",
            "Governs respiratory functions",
            "Supports heart health",
        ],
        symptoms: &[
            "Chest heaviness",
            "Respiratory problems",
            "Heart weakness",
            "Lack of support",
        ],
        classical_references: &[charaka_12(
            "12.18",
            KAPHA_SECTION,
            "अवलम्बकः कफो हृदि क्लोम्नि चावलम्बयन्।",
            "Avalambaka Kapha is in the heart and lungs, providing support.",
        )],
        qualities: &["heavy", "stable", "smooth", "soft"],
        elements: &["prithvi", "jala"],
        therapeutic_actions: &["Chest strengthening", "Respiratory support", "Heart care"],
        balancing_practices: &["Chest exercises", "Breathing practices", "Heart-healthy diet"],
    },
    DoshaSubtype {
        dosha: Dosha::Kapha,
        subtype: "kledaka_kapha",
        sanskrit_name: "क्लेदक कफ",
        iast_transliteration: "Kledaka Kapha",
        location: "Stomach",
        functions: &[
            "Moistens and lubricates food",
            "Supports digestion",
            "Maintains stomach moisture",
            "Protects stomach lining",
        ],
        symptoms: &[
            "Digestive heaviness",
            "Excessive mucus",
            "Stomach discomfort",
            "Poor digestion",
        ],
        classical_references: &[charaka_12(
            "12.19",
            KAPHA_SECTION,
            "क्लेदकः कफो जठरे अन्नं च क्लेदयन्।",
            "Kledaka Kapha is in the stomach, moistening the food.",
        )],
        qualities: &["heavy", "oily", "smooth", "soft"],
        elements: &["prithvi", "jala"],
        therapeutic_actions: &["Digestive enhancement", "Mucus reduction", "Stomach care"],
        balancing_practices: &["Digestive spices", "Light foods", "Stomach exercises"],
    },
    DoshaSubtype {
        dosha: Dosha::Kapha,
        subtype: "bodhaka_kapha",
        sanskrit_name: "बोधक कफ",
        iast_transliteration: "Bodhaka Kapha",
        location: "Tongue, mouth",
        functions: &[
            "Controls taste perception",
            "Manages salivation",
            "Governs oral health",
            "Supports speech",
        ],
        symptoms: &[
            "Taste problems",
            "Excessive salivation",
            "Oral issues",
            "Speech difficulties",
        ],
        classical_references: &[charaka_12(
            "12.20",
            KAPHA_SECTION,
            "बोधकः कफो जिह्वायां रसं च बोधयन्।",
            "Bodhaka Kapha is in the tongue, perceiving taste.",
        )],
        qualities: &["heavy", "smooth", "soft"],
        elements: &["prithvi", "jala"],
        therapeutic_actions: &["Taste enhancement", "Oral care", "Saliva regulation"],
        balancing_practices: &["Tongue cleaning", "Oral hygiene", "Taste therapy"],
    },
    DoshaSubtype {
        dosha: Dosha::Kapha,
        subtype: "tarpaka_kapha",
        sanskrit_name: "तर्पक कफ",
        iast_transliteration: "Tarpaka Kapha",
        location: "Brain, head",
        functions: &[
            "Nourishes and protects brain",
            "Maintains mental stability",
            "Governs memory",
            "Supports nervous system",
        ],
        symptoms: &[
            "Mental dullness",
            "Memory problems",
            "Brain fog",
            "Nervous system issues",
        ],
        classical_references: &[charaka_12(
            "12.21",
            KAPHA_SECTION,
            "तर्पकः कफो शिरसि मनश्च तर्पयन्।",
            "Tarpaka Kapha is in the head, nourishing the mind.",
        )],
        qualities: &["heavy", "stable", "smooth", "soft"],
        elements: &["prithvi", "jala"],
        therapeutic_actions: &["Brain nourishment", "Mental clarity", "Memory enhancement"],
        balancing_practices: &["Brain exercises", "Mental stimulation", "Nourishing foods"],
    },
    DoshaSubtype {
        dosha: Dosha::Kapha,
        subtype: "shleshaka_kapha",
        sanskrit_name: "श्लेषक कफ",
        iast_transliteration: "Śleṣaka Kapha",
        location: "Joints, bones",
        functions: &[
            "Lubricates joints",
            "Maintains joint health",
            "Provides joint stability",
            "Supports bone health",
        ],
        symptoms: &[
            "Joint problems",
            "Joint stiffness",
            "Bone issues",
            "Movement difficulties",
        ],
        classical_references: &[charaka_12(
            "12.22",
            KAPHA_SECTION,
            "श्लेषकः कफो सर्वसन्धिषु श्लेषयन्।",
            "Shleshaka Kapha is in all joints, providing lubrication.",
        )],
        qualities: &["heavy", "oily", "smooth", "soft"],
        elements: &["prithvi", "jala"],
        therapeutic_actions: &["Joint care", "Bone strengthening", "Movement therapy"],
        balancing_practices: &["Joint exercises", "Bone health diet", "Movement practices"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_subtypes_per_dosha_sorted_by_key() {
        for dosha in Dosha::ALL {
            let subtypes = subtypes_of(dosha);
            assert_eq!(subtypes.len(), 5, "{dosha} subtypes");
            let keys: Vec<_> = subtypes.iter().map(|subtype| subtype.subtype).collect();
            let mut sorted = keys.clone();
            sorted.sort();
            assert_eq!(keys, sorted);
        }
        assert_eq!(all_subtypes().len(), 15);
    }

    #[test]
    fn pitta_listing_starts_with_alochaka() {
        let subtypes = subtypes_of(Dosha::Pitta);
        assert_eq!(subtypes[0].subtype, "alochaka_pitta");
        assert_eq!(subtypes[0].location, "Eyes");
    }
}
