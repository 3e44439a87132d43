use crate::openlibrary::{BookDoc, CoverSize};
use crate::ui::search_context::use_search_context;
use dioxus::html::MountedResult;
use dioxus::prelude::*;
use tracing::warn;

/// Modal showing every optional field present on one result
#[component]
pub fn BookDetailModal(book: BookDoc, on_close: EventHandler<()>) -> Element {
    let search_ctx = use_search_context();
    let cover_url = book.cover_url(search_ctx.covers_url(), CoverSize::Large);
    let work_url = book.work_url(search_ctx.site_url());
    let authors = book.all_authors();
    let subjects = book.subject_preview().to_vec();
    let publishers = book.publisher_summary();
    let isbn = book.primary_isbn().map(str::to_string);
    let languages = book.language_summary();
    let pages = book.pages_label();

    rsx! {
        div {
            class: "modal-backdrop",
            tabindex: "-1",
            onmounted: move |event: MountedEvent| async move {
                focus_acquired(event.set_focus(true).await);
            },
            onkeydown: move |event: KeyboardEvent| {
                if event.key() == Key::Escape {
                    on_close.call(());
                }
            },
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { "Book Details" }
                    button {
                        class: "modal-close-button",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                div { class: "modal-body",
                    div { class: "modal-book-info",
                        div { class: "modal-book-cover",
                            if let Some(url) = cover_url {
                                img { src: "{url}", alt: "{book.title}" }
                            } else {
                                div { class: "modal-cover-placeholder", "📖" }
                            }
                        }
                        div { class: "modal-book-details",
                            h3 { "{book.title}" }
                            if let Some(subtitle) = &book.subtitle {
                                p { class: "subtitle", "{subtitle}" }
                            }
                            div {
                                if let Some(authors) = authors {
                                    div { class: "modal-info-item",
                                        span { class: "modal-info-icon", "👤" }
                                        div {
                                            p { class: "modal-info-label", "Authors" }
                                            p { "{authors}" }
                                        }
                                    }
                                }
                                if let Some(year) = book.publish_year() {
                                    div { class: "modal-info-item",
                                        span { class: "modal-info-icon", "📅" }
                                        div {
                                            p { class: "modal-info-label", "First Published" }
                                            p { "{year}" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        if !subjects.is_empty() {
                            div { class: "modal-section",
                                h4 { "Subjects" }
                                div { class: "modal-subjects",
                                    for (idx, subject) in subjects.iter().enumerate() {
                                        span { key: "{idx}", class: "modal-subject", "{subject}" }
                                    }
                                }
                            }
                        }
                        if let Some(publishers) = publishers {
                            div { class: "modal-section",
                                h4 { "Publishers" }
                                p { "{publishers}" }
                            }
                        }
                        if let Some(isbn) = isbn {
                            div { class: "modal-section",
                                h4 { "ISBN" }
                                p { class: "isbn", "{isbn}" }
                            }
                        }
                        if let Some(languages) = languages {
                            div { class: "modal-section",
                                h4 { "Languages" }
                                p { class: "languages", "{languages}" }
                            }
                        }
                        if let Some(pages) = pages {
                            div { class: "modal-section",
                                h4 { "Pages" }
                                p { "{pages}" }
                            }
                        }
                    }

                    div { class: "modal-footer",
                        a {
                            href: "{work_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "📖 View on Open Library"
                        }
                    }
                }
            }
        }
    }
}

/// Escape only reaches the backdrop while it holds focus
fn focus_acquired(result: MountedResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to focus detail modal, Escape will not close it: {:?}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::html::MountedError;

    #[test]
    fn test_focus_failure_is_reported() {
        assert!(focus_acquired(Ok(())));
        assert!(!focus_acquired(Err(MountedError::NotSupported)));
    }
}
