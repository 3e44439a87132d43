use crate::openlibrary::BookDoc;
use crate::search::ResultsView;
use crate::ui::components::BookCard;
use crate::ui::search_context::use_search_context;
use dioxus::prelude::*;

#[component]
pub fn ResultsSection() -> Element {
    let search_ctx = use_search_context();
    let (view, summary, books) = {
        let state = search_ctx.state.read();
        (state.results_view(), state.results_summary(), state.books.clone())
    };

    match view {
        ResultsView::Idle => rsx! {},
        ResultsView::Loading => rsx! {
            div { class: "loading",
                div { class: "loading-icon loader-spin" }
            }
        },
        ResultsView::Empty => rsx! {
            div { class: "no-results",
                div { class: "no-results-icon", "📖" }
                p { "No books found. Try a different search!" }
            }
        },
        ResultsView::Results(_) => rsx! {
            div {
                div { class: "results-header",
                    p { "{summary}" }
                }
                div { class: "book-grid",
                    for (idx, book) in books.iter().enumerate() {
                        BookCard {
                            key: "{book.key}-{idx}",
                            book: book.clone(),
                            covers_url: search_ctx.covers_url().to_string(),
                            on_select: {
                                let search_ctx = search_ctx.clone();
                                move |book: BookDoc| search_ctx.update(|state| state.select(book))
                            },
                        }
                    }
                }
            }
        },
    }
}
