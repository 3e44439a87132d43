use serde::Deserialize;

const CARD_AUTHOR_LIMIT: usize = 2;
const SUBJECT_PREVIEW_LIMIT: usize = 10;
const PUBLISHER_PREVIEW_LIMIT: usize = 3;

/// Open Library `search.json` response wrapper
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default, rename = "numFound")]
    pub num_found: u64,
    #[serde(default)]
    pub docs: Vec<BookDoc>,
}

/// Individual search result, passed through from the API as-is
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct BookDoc {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(default)]
    pub author_name: Vec<String>,
    pub first_publish_year: Option<i32>,
    pub ratings_average: Option<f64>,
    pub cover_i: Option<i64>,
    #[serde(default)]
    pub subject: Vec<String>,
    #[serde(default)]
    pub publisher: Vec<String>,
    #[serde(default)]
    pub isbn: Vec<String>,
    #[serde(default)]
    pub language: Vec<String>,
    pub number_of_pages_median: Option<u32>,
}

/// Cover image sizes served by the covers API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSize {
    Small,
    Medium,
    Large,
}

impl CoverSize {
    pub fn suffix(self) -> &'static str {
        match self {
            CoverSize::Small => "S",
            CoverSize::Medium => "M",
            CoverSize::Large => "L",
        }
    }
}

impl BookDoc {
    /// Cover image URL, or None when the record has no cover id
    pub fn cover_url(&self, covers_base: &str, size: CoverSize) -> Option<String> {
        self.cover_i
            .map(|id| format!("{}/b/id/{}-{}.jpg", covers_base, id, size.suffix()))
    }

    /// Author line for a result card: at most two names
    pub fn card_authors(&self) -> String {
        if self.author_name.is_empty() {
            "Unknown Author".to_string()
        } else {
            self.author_name
                .iter()
                .take(CARD_AUTHOR_LIMIT)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    pub fn all_authors(&self) -> Option<String> {
        join_non_empty(&self.author_name, usize::MAX)
    }

    /// First publication year; a zero year counts as unknown
    pub fn publish_year(&self) -> Option<i32> {
        self.first_publish_year.filter(|year| *year != 0)
    }

    pub fn year_label(&self) -> String {
        match self.publish_year() {
            Some(year) => year.to_string(),
            None => "Year unknown".to_string(),
        }
    }

    /// Unrated works report an average of zero, which is hidden
    pub fn rating_label(&self) -> Option<String> {
        self.ratings_average
            .filter(|rating| *rating != 0.0)
            .map(|rating| format!("{:.1}", rating))
    }

    pub fn subject_preview(&self) -> &[String] {
        let end = self.subject.len().min(SUBJECT_PREVIEW_LIMIT);
        &self.subject[..end]
    }

    pub fn publisher_summary(&self) -> Option<String> {
        join_non_empty(&self.publisher, PUBLISHER_PREVIEW_LIMIT)
    }

    pub fn primary_isbn(&self) -> Option<&str> {
        self.isbn.first().map(String::as_str)
    }

    pub fn language_summary(&self) -> Option<String> {
        join_non_empty(&self.language, usize::MAX)
    }

    pub fn pages_label(&self) -> Option<String> {
        self.number_of_pages_median
            .filter(|pages| *pages != 0)
            .map(|pages| format!("{} pages", pages))
    }

    /// Link to the work page on the Open Library site
    pub fn work_url(&self, site_base: &str) -> String {
        format!("{}{}", site_base, self.key)
    }
}

fn join_non_empty(values: &[String], limit: usize) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    Some(
        values
            .iter()
            .take(limit)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", "),
    )
}
