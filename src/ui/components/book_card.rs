use crate::openlibrary::{BookDoc, CoverSize};
use dioxus::prelude::*;

/// Compact result card: cover, title, authors, year and rating
#[component]
pub fn BookCard(book: BookDoc, covers_url: String, on_select: EventHandler<BookDoc>) -> Element {
    let cover_url = book.cover_url(&covers_url, CoverSize::Medium);
    let authors = book.card_authors();
    let year = book.year_label();
    let rating = book.rating_label();

    rsx! {
        div {
            class: "book-card",
            onclick: {
                let book = book.clone();
                move |_| on_select.call(book.clone())
            },

            div { class: "book-card-image-container",
                if let Some(url) = cover_url {
                    img {
                        src: "{url}",
                        alt: "{book.title}",
                        class: "book-card-image",
                    }
                } else {
                    div { class: "book-card-placeholder", "📖" }
                }
            }

            div { class: "book-card-content",
                h3 { title: "{book.title}", "{book.title}" }
                p { title: "{authors}", "{authors}" }
                div { class: "book-card-meta",
                    span { "{year}" }
                    if let Some(rating) = rating {
                        div { class: "book-card-rating",
                            span { class: "star", "★" }
                            span { "{rating}" }
                        }
                    }
                }
            }
        }
    }
}
