//! Placeholder photo analysis. Confidences are random draws; nothing inspects the images.

use rand::Rng;
use serde::Serialize;

use crate::knowledge::{Citation, Dosha};

const MIN_CONFIDENCE: f64 = 0.1;
const MAX_CONFIDENCE: f64 = 0.4;

/// Classical visual markers for one dosha.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VisualTraits {
    pub skin: &'static [&'static str],
    pub eyes: &'static [&'static str],
    pub hair: &'static [&'static str],
    pub classical_reference: Citation,
}

pub fn visual_traits(dosha: Dosha) -> &'static VisualTraits {
    match dosha {
        Dosha::Vata => &VATA_TRAITS,
        Dosha::Pitta => &PITTA_TRAITS,
        Dosha::Kapha => &KAPHA_TRAITS,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VisualIndicator {
    pub dosha: Dosha,
    pub confidence: f64,
    pub classical_reference: Citation,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhotoAnalysis {
    pub photo_index: usize,
    pub analysis_type: &'static str,
    pub dosha_indicators: Vec<VisualIndicator>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VisualAnalysis {
    pub dosha_indicators: Vec<PhotoAnalysis>,
    pub confidence: f64,
    pub classical_references: Vec<Citation>,
}

/// One indicator per dosha for every photo, each with a confidence in `[0.1, 0.4)`.
pub fn analyze_photos<G: Rng>(photos: &[String], rng: &mut G) -> VisualAnalysis {
    let dosha_indicators = (0..photos.len())
        .map(|photo_index| PhotoAnalysis {
            photo_index,
            analysis_type: "general",
            dosha_indicators: Dosha::ALL
                .into_iter()
                .map(|dosha| VisualIndicator {
                    dosha,
                    confidence: rng.gen_range(MIN_CONFIDENCE..MAX_CONFIDENCE),
                    classical_reference: visual_traits(dosha).classical_reference,
                })
                .collect(),
        })
        .collect();

    VisualAnalysis {
        dosha_indicators,
        confidence: 0.0,
        classical_references: Vec::new(),
    }
}

static VATA_TRAITS: VisualTraits = VisualTraits {
    skin: &["dry", "rough", "cold"],
    eyes: &["small", "active", "dry"],
    hair: &["dry", "coarse", "thin"],
    classical_reference: Citation::verse(
        "Charaka Samhita",
        "Vimana 8.96",
        "रूक्षं लघु शीतं च",
        "Dry, light, and cold characteristics",
    ),
};

static PITTA_TRAITS: VisualTraits = VisualTraits {
    skin: &["warm", "sensitive", "reddish"],
    eyes: &["medium", "intense", "penetrating"],
    hair: &["fine", "straight", "oily"],
    classical_reference: Citation::verse(
        "Charaka Samhita",
        "Vimana 8.97",
        "उष्णं तीक्ष्णं रक्तं च",
        "Hot, sharp, and red characteristics",
    ),
};

static KAPHA_TRAITS: VisualTraits = VisualTraits {
    skin: &["thick", "smooth", "cool"],
    eyes: &["large", "calm", "moist"],
    hair: &["thick", "wavy", "oily"],
    classical_reference: Citation::verse(
        "Charaka Samhita",
        "Vimana 8.98",
        "स्निग्धं गुरु शीतं च",
        "Oily, heavy, and cold characteristics",
    ),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_photo_gets_three_indicators_in_range() {
        let photos = vec!["front.jpg".to_string(), "profile.jpg".to_string()];
        let analysis = analyze_photos(&photos, &mut rand::thread_rng());

        assert_eq!(analysis.dosha_indicators.len(), 2);
        for (index, photo) in analysis.dosha_indicators.iter().enumerate() {
            assert_eq!(photo.photo_index, index);
            let doshas: Vec<_> = photo.dosha_indicators.iter().map(|i| i.dosha).collect();
            assert_eq!(doshas, Dosha::ALL.to_vec());
            for indicator in &photo.dosha_indicators {
                assert!((MIN_CONFIDENCE..MAX_CONFIDENCE).contains(&indicator.confidence));
            }
        }
    }

    #[test]
    fn no_photos_yield_empty_analysis() {
        let analysis = analyze_photos(&[], &mut rand::thread_rng());
        assert!(analysis.dosha_indicators.is_empty());
    }
}
