use std::collections::HashMap;

use serde::Serialize;

use super::domain::Disease;

pub const UNCATEGORISED: &str = "General";
pub const UNKNOWN_SOURCE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatGroup {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_diseases: usize,
    pub categories: Vec<StatGroup>,
    pub doshas: Vec<StatGroup>,
    pub sources: Vec<StatGroup>,
}

/// Group counts by category, dosha tag, and source. Every group list is ordered by count
/// descending, then name.
pub fn overview(diseases: &[Disease]) -> CatalogStats {
    let mut categories: HashMap<&str, usize> = HashMap::new();
    let mut doshas: HashMap<&str, usize> = HashMap::new();
    let mut sources: HashMap<&str, usize> = HashMap::new();

    for disease in diseases {
        *categories
            .entry(disease.category.as_deref().unwrap_or(UNCATEGORISED))
            .or_default() += 1;
        *sources
            .entry(disease.source.as_deref().unwrap_or(UNKNOWN_SOURCE))
            .or_default() += 1;
        for tag in &disease.dosha {
            *doshas.entry(tag.as_str()).or_default() += 1;
        }
    }

    CatalogStats {
        total_diseases: diseases.len(),
        categories: ranked(categories),
        doshas: ranked(doshas),
        sources: ranked(sources),
    }
}

fn ranked(counts: HashMap<&str, usize>) -> Vec<StatGroup> {
    let mut groups: Vec<StatGroup> = counts
        .into_iter()
        .map(|(name, count)| StatGroup {
            name: name.to_string(),
            count,
        })
        .collect();
    groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    groups
}
