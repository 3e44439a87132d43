pub mod app;
pub mod book_card;
pub mod book_detail_modal;
pub mod book_search;
pub mod results_section;
pub mod search_panel;

pub use app::App;
pub use book_card::BookCard;
pub use book_detail_modal::BookDetailModal;
pub use book_search::BookSearch;
pub use results_section::ResultsSection;
pub use search_panel::SearchPanel;
