//! View state for the search page, independent of the UI toolkit.

use crate::openlibrary::{BookDoc, OpenLibraryError, QueryError, SearchFacet, SearchQuery, SearchResponse};
use thiserror::Error;
use tracing::{debug, error};

/// Why a search was not started
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchRejected {
    #[error("A search is already in progress")]
    InFlight,
    #[error("Enter something to search for")]
    EmptyQuery,
    #[error("Year filter must be a number: {0}")]
    InvalidYear(String),
    #[error("Unknown search facet: {0}")]
    UnknownFacet(String),
}

impl From<QueryError> for SearchRejected {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::EmptyQuery => SearchRejected::EmptyQuery,
            QueryError::InvalidYear(raw) => SearchRejected::InvalidYear(raw),
            QueryError::UnknownFacet(facet) => SearchRejected::UnknownFacet(facet),
        }
    }
}

/// What the results area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView {
    Idle,
    Loading,
    Empty,
    Results(usize),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub facet: SearchFacet,
    pub year_filter: String,
    pub language_filter: String,
    pub show_filters: bool,
    pub books: Vec<BookDoc>,
    pub loading: bool,
    pub has_searched: bool,
    pub selected: Option<BookDoc>,
    pub last_error: Option<String>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn set_facet(&mut self, facet: SearchFacet) {
        self.facet = facet;
    }

    pub fn set_year_filter(&mut self, year: String) {
        self.year_filter = year;
    }

    /// Language codes are lowercase on the wire
    pub fn set_language_filter(&mut self, language: String) {
        self.language_filter = language.to_lowercase();
    }

    pub fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
    }

    pub fn clear_filters(&mut self) {
        self.year_filter.clear();
        self.language_filter.clear();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.year_filter.is_empty() || !self.language_filter.is_empty()
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.query.trim().is_empty()
    }

    /// Validate the form and mark a request as in flight.
    /// Leaves the state untouched when the search is rejected.
    pub fn begin_search(&mut self, limit: u32) -> Result<SearchQuery, SearchRejected> {
        if self.loading {
            return Err(SearchRejected::InFlight);
        }

        let query = SearchQuery::new(self.facet, &self.query)?
            .with_year(&self.year_filter)?
            .with_language(&self.language_filter)
            .with_limit(limit);

        debug!("Starting search: {:?}", query);
        self.loading = true;
        self.has_searched = true;
        self.last_error = None;
        Ok(query)
    }

    pub fn finish_search(&mut self, result: Result<SearchResponse, OpenLibraryError>) {
        match result {
            Ok(response) => {
                debug!("Search finished with {} book(s)", response.docs.len());
                self.books = response.docs;
            }
            Err(e) => {
                error!("Error fetching books: {}", e);
                self.books = Vec::new();
                self.last_error = Some(e.to_string());
            }
        }
        self.loading = false;
    }

    pub fn select(&mut self, book: BookDoc) {
        self.selected = Some(book);
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn results_view(&self) -> ResultsView {
        if self.loading {
            ResultsView::Loading
        } else if !self.books.is_empty() {
            ResultsView::Results(self.books.len())
        } else if self.has_searched {
            ResultsView::Empty
        } else {
            ResultsView::Idle
        }
    }

    pub fn results_summary(&self) -> String {
        let count = self.books.len();
        if count == 1 {
            "Found 1 book".to_string()
        } else {
            format!("Found {} books", count)
        }
    }
}
