//! Open Library search API: request building, response shapes, and the HTTP client.

pub mod client;
pub mod models;
pub mod query;

pub use client::{OpenLibraryClient, OpenLibraryError};
pub use models::{BookDoc, CoverSize, SearchResponse};
pub use query::{QueryError, SearchFacet, SearchQuery, DEFAULT_RESULT_LIMIT};
