use serde::{Deserialize, Serialize};

use super::domain::Disease;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 50;

/// Filters and paging accepted by `GET /api/diseases`.
///
/// Numbers are kept as raw strings so a malformed `page` or `limit` falls back to the default
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiseaseQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub dosha: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total_diseases: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiseasePage {
    pub diseases: Vec<Disease>,
    pub pagination: Pagination,
}

impl DiseaseQuery {
    pub fn page(&self) -> usize {
        positive_or(self.page.as_deref(), DEFAULT_PAGE)
    }

    pub fn limit(&self) -> usize {
        positive_or(self.limit.as_deref(), DEFAULT_LIMIT)
    }

    fn non_blank(value: &Option<String>) -> Option<&str> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn matches(&self, disease: &Disease) -> bool {
        if let Some(category) = Self::non_blank(&self.category) {
            if disease.category.as_deref() != Some(category) {
                return false;
            }
        }
        if let Some(dosha) = Self::non_blank(&self.dosha) {
            if !disease.has_dosha(dosha) {
                return false;
            }
        }
        if let Some(search) = Self::non_blank(&self.search) {
            if !disease.matches_search(&search.to_lowercase()) {
                return false;
            }
        }
        true
    }

    /// Filter, sort by name, and cut out the requested page.
    pub fn apply(&self, diseases: Vec<Disease>) -> DiseasePage {
        let mut matching: Vec<Disease> = diseases
            .into_iter()
            .filter(|disease| self.matches(disease))
            .collect();
        matching.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.disease_id.cmp(&b.disease_id))
        });

        let page = self.page();
        let limit = self.limit();
        let total_diseases = matching.len();
        let total_pages = total_diseases.div_ceil(limit);
        let offset = (page - 1).saturating_mul(limit);

        let diseases = matching.into_iter().skip(offset).take(limit).collect();

        DiseasePage {
            diseases,
            pagination: Pagination {
                page,
                limit,
                total_diseases,
                total_pages,
                has_next: page < total_pages,
                has_prev: page > 1,
            },
        }
    }
}

fn positive_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diseases::import::seed_diseases;

    fn query() -> DiseaseQuery {
        DiseaseQuery::default()
    }

    #[test]
    fn defaults_apply_to_missing_or_invalid_numbers() {
        let mut q = query();
        assert_eq!((q.page(), q.limit()), (1, 50));

        q.page = Some("zero".to_string());
        q.limit = Some("0".to_string());
        assert_eq!((q.page(), q.limit()), (1, 50));

        q.page = Some("3".to_string());
        q.limit = Some("2".to_string());
        assert_eq!((q.page(), q.limit()), (3, 2));
    }

    #[test]
    fn results_are_sorted_by_name() {
        let page = query().apply(seed_diseases().expect("seed"));
        let names: Vec<_> = page.diseases.iter().map(|d| d.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(page.pagination.total_diseases, 8);
        assert_eq!(page.pagination.total_pages, 1);
        assert!(!page.pagination.has_next);
        assert!(!page.pagination.has_prev);
    }

    #[test]
    fn paging_splits_results() {
        let mut q = query();
        q.limit = Some("3".to_string());
        q.page = Some("2".to_string());
        let page = q.apply(seed_diseases().expect("seed"));

        assert_eq!(page.diseases.len(), 3);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_next);
        assert!(page.pagination.has_prev);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let mut q = query();
        q.page = Some("9".to_string());
        let page = q.apply(seed_diseases().expect("seed"));
        assert!(page.diseases.is_empty());
        assert!(!page.pagination.has_next);
    }

    #[test]
    fn filters_combine() {
        let mut q = query();
        q.category = Some("Neurological".to_string());
        q.dosha = Some("kapha".to_string());
        let page = q.apply(seed_diseases().expect("seed"));

        let names: Vec<_> = page.diseases.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Gridhrasi"]);
    }

    #[test]
    fn search_covers_english_and_sanskrit_names() {
        let mut q = query();
        q.search = Some("diabetes".to_string());
        let by_english = q.apply(seed_diseases().expect("seed"));
        assert_eq!(by_english.diseases[0].name, "Madhumeha");

        q.search = Some("ज्वर".to_string());
        let by_sanskrit = q.apply(seed_diseases().expect("seed"));
        assert_eq!(by_sanskrit.diseases.len(), 1);
        assert_eq!(by_sanskrit.diseases[0].name, "Jwara");
    }
}
