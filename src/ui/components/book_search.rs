use crate::ui::components::{BookDetailModal, ResultsSection, SearchPanel};
use crate::ui::search_context::use_search_context;
use dioxus::prelude::*;

/// Search page: header, form, results, and the detail overlay
#[component]
pub fn BookSearch() -> Element {
    let search_ctx = use_search_context();
    let selected = search_ctx.state.read().selected.clone();

    rsx! {
        div {
            div { class: "container",
                div { class: "header",
                    div { class: "title-container",
                        span { class: "title-icon", "📖" }
                        h1 { "Book Finder" }
                    }
                    p { "Discover your next great read" }
                }

                SearchPanel {}
                ResultsSection {}
            }

            if let Some(book) = selected {
                BookDetailModal {
                    book,
                    on_close: {
                        let search_ctx = search_ctx.clone();
                        move |_| search_ctx.update(|state| state.close_detail())
                    },
                }
            }
        }
    }
}
