use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable catalog key such as `CHARAKA_001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiseaseId(pub String);

impl fmt::Display for DiseaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treatment {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DietGuidance {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub avoid: Vec<String>,
}

/// One entry of the classical disease reference database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disease {
    pub disease_id: DiseaseId,
    pub name: String,
    pub english_name: Option<String>,
    pub sanskrit: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
    pub dosha: Vec<String>,
    pub symptoms: Vec<String>,
    pub pathogenesis: Option<String>,
    pub treatments: Vec<Treatment>,
    pub herbs: Vec<String>,
    pub precautions: Vec<String>,
    pub diet: DietGuidance,
    pub lifestyle: Vec<String>,
    pub modern_equivalent: Option<String>,
    pub evidence_level: Option<String>,
    pub severity: Option<String>,
    pub is_active: bool,
}

impl Disease {
    /// Case-insensitive membership test against the dosha tags.
    pub fn has_dosha(&self, dosha: &str) -> bool {
        self.dosha.iter().any(|tag| tag.eq_ignore_ascii_case(dosha))
    }

    /// `needle` must already be lower-cased.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        let contains = |value: &str| value.to_lowercase().contains(needle);
        contains(&self.name)
            || self.english_name.as_deref().is_some_and(contains)
            || self.sanskrit.as_deref().is_some_and(contains)
    }
}
