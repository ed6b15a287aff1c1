use serde::Serialize;

/// Pointer into a classical text, optionally with the Sanskrit verse and a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<&'static str>,
    pub verse: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<&'static str>,
    pub sanskrit_verse: &'static str,
    pub translation: &'static str,
}

impl Citation {
    pub const fn verse(
        text: &'static str,
        verse: &'static str,
        sanskrit_verse: &'static str,
        translation: &'static str,
    ) -> Self {
        Self {
            text,
            chapter: None,
            verse,
            section: None,
            relevance: None,
            sanskrit_verse,
            translation,
        }
    }

    pub const fn in_chapter(mut self, chapter: &'static str) -> Self {
        self.chapter = Some(chapter);
        self
    }

    pub const fn in_section(mut self, section: &'static str) -> Self {
        self.section = Some(section);
        self
    }

    pub const fn with_relevance(mut self, relevance: &'static str) -> Self {
        self.relevance = Some(relevance);
        self
    }
}
