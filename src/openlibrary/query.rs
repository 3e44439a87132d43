use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fixed result cap sent with every search
pub const DEFAULT_RESULT_LIMIT: u32 = 50;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Search text is empty")]
    EmptyQuery,
    #[error("Invalid year filter: {0}")]
    InvalidYear(String),
    #[error("Unknown search facet: {0}")]
    UnknownFacet(String),
}

/// Which field the search text is matched against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SearchFacet {
    #[default]
    Title,
    Author,
    Subject,
    Isbn,
}

impl SearchFacet {
    pub const ALL: [SearchFacet; 4] = [
        SearchFacet::Title,
        SearchFacet::Author,
        SearchFacet::Subject,
        SearchFacet::Isbn,
    ];

    /// Query parameter name understood by search.json
    pub fn param(self) -> &'static str {
        match self {
            SearchFacet::Title => "title",
            SearchFacet::Author => "author",
            SearchFacet::Subject => "subject",
            SearchFacet::Isbn => "isbn",
        }
    }

    pub fn label(self) -> &'static str {
        self.param()
    }

    pub fn placeholder(self) -> String {
        format!("Search by {}...", self.label())
    }
}

impl fmt::Display for SearchFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param())
    }
}

impl FromStr for SearchFacet {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchFacet::ALL
            .into_iter()
            .find(|facet| facet.param().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| QueryError::UnknownFacet(s.to_string()))
    }
}

/// A validated search request against search.json
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub facet: SearchFacet,
    pub text: String,
    pub year: Option<String>,
    pub language: Option<String>,
    pub limit: u32,
}

impl SearchQuery {
    pub fn new(facet: SearchFacet, text: &str) -> Result<Self, QueryError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(QueryError::EmptyQuery);
        }

        Ok(Self {
            facet,
            text: text.to_string(),
            year: None,
            language: None,
            limit: DEFAULT_RESULT_LIMIT,
        })
    }

    /// Blank input clears the filter; anything else must be a whole number
    pub fn with_year(mut self, raw: &str) -> Result<Self, QueryError> {
        let raw = raw.trim();
        if raw.is_empty() {
            self.year = None;
            return Ok(self);
        }

        let year = raw
            .parse::<i32>()
            .map_err(|_| QueryError::InvalidYear(raw.to_string()))?;
        self.year = Some(year.to_string());
        Ok(self)
    }

    pub fn with_language(mut self, raw: &str) -> Self {
        let language = raw.trim().to_lowercase();
        self.language = if language.is_empty() {
            None
        } else {
            Some(language)
        };
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Serialize to the query string, parameters in a fixed order
    pub fn query_string(&self) -> String {
        let mut query = format!(
            "{}={}",
            self.facet.param(),
            urlencoding::encode(&self.text)
        );

        if let Some(ref year) = self.year {
            query.push_str(&format!("&first_publish_year={}", urlencoding::encode(year)));
        }

        if let Some(ref language) = self.language {
            query.push_str(&format!("&language={}", urlencoding::encode(language)));
        }

        query.push_str(&format!("&limit={}", self.limit));
        query
    }

    pub fn url(&self, api_base: &str) -> String {
        format!("{}/search.json?{}", api_base, self.query_string())
    }
}
