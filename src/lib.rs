// Library exports for integration tests and the desktop binary

pub mod config;
pub mod openlibrary;
pub mod search;
pub mod ui;

pub use config::Config;
