use std::collections::BTreeMap;

use serde::Serialize;

/// Dosha focus label for poses suited to every constitution.
pub const ALL_DOSHAS: &str = "All Doshas";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YogaPose {
    pub id: &'static str,
    pub name: &'static str,
    pub sanskrit: &'static str,
    pub category: &'static str,
    pub dosha: &'static str,
    pub difficulty: &'static str,
    pub duration: &'static str,
    pub benefits: &'static [&'static str],
    pub description: &'static str,
}

impl YogaPose {
    fn matches_text(&self, needle: &str) -> bool {
        let contains = |value: &str| value.to_lowercase().contains(needle);
        contains(self.name)
            || contains(self.sanskrit)
            || contains(self.description)
            || self.benefits.iter().any(|&benefit| contains(benefit))
    }

    fn suits(&self, dosha: &str) -> bool {
        self.dosha.eq_ignore_ascii_case(dosha) || self.dosha == ALL_DOSHAS
    }

    fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

static POSES: [YogaPose; 6] = [
    YogaPose {
        id: "pose-1",
        name: "Child's Pose",
        sanskrit: "Balasana",
        category: "Restorative",
        dosha: "Vata",
        difficulty: "Beginner",
        duration: "5-10 minutes",
        benefits: &[
            "Calms the nervous system and reduces Vata excess",
            "Relieves anxiety, stress, and mental fatigue",
            "Grounds scattered energy and promotes stability",
            "Stretches hips, thighs, and ankles gently",
            "Relieves back and neck pain",
            "Promotes introspection and inner peace",
        ],
        description: "A deeply grounding pose that helps calm Vata dosha. This gentle resting position allows the nervous system to settle and promotes a sense of security and groundedness.",
    },
    YogaPose {
        id: "pose-2",
        name: "Legs Up the Wall",
        sanskrit: "Viparita Karani",
        category: "Restorative",
        dosha: "Vata",
        difficulty: "Beginner",
        duration: "10-20 minutes",
        benefits: &[
            "Deeply calms the nervous system",
            "Reduces anxiety and promotes relaxation",
            "Improves circulation and reduces swelling",
            "Relieves tired, heavy legs",
            "Balances the endocrine system",
        ],
        description: "A gentle inversion that helps reverse the effects of gravity on circulation while deeply calming Vata dosha.",
    },
    YogaPose {
        id: "pose-3",
        name: "Seated Forward Bend",
        sanskrit: "Paschimottanasana",
        category: "Forward Bend",
        dosha: "Pitta",
        difficulty: "Beginner",
        duration: "3-8 minutes",
        benefits: &[
            "Cools and calms Pitta dosha effectively",
            "Reduces anger, irritability, and competitiveness",
            "Stimulates digestive organs and improves digestion",
            "Stretches the entire back body",
            "Calms the mind and reduces stress",
        ],
        description: "A powerful cooling pose that helps balance excess Pitta energy. The forward folding action encourages introspection and helps cool both body and mind.",
    },
    YogaPose {
        id: "pose-4",
        name: "Sun Salutation",
        sanskrit: "Surya Namaskara",
        category: "Dynamic",
        dosha: "Kapha",
        difficulty: "Beginner",
        duration: "5-20 minutes",
        benefits: &[
            "Stimulates metabolism and builds internal heat",
            "Energizes the entire body and mind",
            "Improves cardiovascular health",
            "Builds strength, flexibility, and endurance",
            "Balances all body systems",
        ],
        description: "A complete practice in itself, Sun Salutations are particularly beneficial for Kapha types who need energizing and warming.",
    },
    YogaPose {
        id: "pose-5",
        name: "Warrior I",
        sanskrit: "Virabhadrasana I",
        category: "Standing",
        dosha: "Kapha",
        difficulty: "Beginner",
        duration: "30 seconds - 2 minutes each side",
        benefits: &[
            "Builds strength in legs, core, and shoulders",
            "Improves focus and concentration",
            "Develops courage and determination",
            "Opens hip flexors and chest",
            "Energizes and motivates",
        ],
        description: "A powerful standing pose that embodies the warrior's strength and determination. Excellent for building confidence and physical strength.",
    },
    YogaPose {
        id: "pose-6",
        name: "Mountain Pose",
        sanskrit: "Tadasana",
        category: "Standing",
        dosha: ALL_DOSHAS,
        difficulty: "Beginner",
        duration: "1-5 minutes",
        benefits: &[
            "Improves posture and alignment",
            "Develops body awareness",
            "Builds foundational strength",
            "Calms the mind through stillness",
            "Grounds energy and promotes stability",
        ],
        description: "The foundation of all standing poses and a complete practice in itself. Though it appears simple, Mountain Pose teaches fundamental principles of alignment.",
    },
];

/// Search filters; blank values are ignored.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct PoseFilter {
    #[serde(default, alias = "q")]
    pub search: Option<String>,
    #[serde(default)]
    pub dosha: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

pub fn all_poses() -> &'static [YogaPose] {
    &POSES
}

pub fn pose(id: &str) -> Option<&'static YogaPose> {
    POSES.iter().find(|pose| pose.id == id)
}

/// Poses matching every supplied filter, in library order.
pub fn search(filter: &PoseFilter) -> Vec<&'static YogaPose> {
    let lowered = non_blank(&filter.search).map(str::to_lowercase);
    let needle = lowered.as_deref();
    let dosha = non_blank(&filter.dosha);
    let category = non_blank(&filter.category);

    POSES
        .iter()
        .filter(|pose| needle.map_or(true, |needle| pose.matches_text(needle)))
        .filter(|pose| dosha.map_or(true, |dosha| pose.suits(dosha)))
        .filter(|pose| category.map_or(true, |category| pose.in_category(category)))
        .collect()
}

/// Number of poses per category, keyed by category name.
pub fn category_counts() -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for pose in POSES.iter() {
        *counts.entry(pose.category).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(search: Option<&str>, dosha: Option<&str>, category: Option<&str>) -> PoseFilter {
        PoseFilter {
            search: search.map(str::to_string),
            dosha: dosha.map(str::to_string),
            category: category.map(str::to_string),
        }
    }

    fn ids(poses: Vec<&'static YogaPose>) -> Vec<&'static str> {
        poses.into_iter().map(|pose| pose.id).collect()
    }

    #[test]
    fn empty_filter_returns_library() {
        assert_eq!(search(&PoseFilter::default()).len(), all_poses().len());
    }

    #[test]
    fn text_search_reaches_benefits() {
        let anxiety = search(&filter(Some("ANXIETY"), None, None));
        assert_eq!(ids(anxiety), vec!["pose-1", "pose-2"]);
        let tadasana = search(&filter(Some("tadasana"), None, None));
        assert_eq!(ids(tadasana), vec!["pose-6"]);
    }

    #[test]
    fn dosha_filter_admits_universal_poses() {
        assert_eq!(
            ids(search(&filter(None, Some("pitta"), None))),
            vec!["pose-3", "pose-6"]
        );
    }

    #[test]
    fn filters_combine() {
        assert_eq!(
            ids(search(&filter(None, Some("Kapha"), Some("standing")))),
            vec!["pose-5", "pose-6"]
        );
        assert!(search(&filter(Some("inversion"), Some("Kapha"), None)).is_empty());
    }

    #[test]
    fn categories_are_counted() {
        let counts = category_counts();
        assert_eq!(counts.get("Restorative"), Some(&2));
        assert_eq!(counts.get("Standing"), Some(&2));
        assert_eq!(counts.values().sum::<usize>(), 6);
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(
            pose("pose-4").map(|pose| pose.sanskrit),
            Some("Surya Namaskara")
        );
        assert!(pose("pose-99").is_none());
    }
}
