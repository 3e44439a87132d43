#[cfg(feature = "desktop")]
use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

use crate::ui::components::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    BookSearch {},
}

#[cfg(feature = "desktop")]
pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

#[cfg(feature = "desktop")]
fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("Book Finder")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}
