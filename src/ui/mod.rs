pub mod app;
pub mod components;
pub mod search_context;

pub use app::*;
pub use components::*;
pub use search_context::{use_search_context, SearchContext, SearchContextProvider};
