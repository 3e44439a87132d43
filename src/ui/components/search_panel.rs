use crate::openlibrary::SearchFacet;
use crate::ui::search_context::use_search_context;
use dioxus::prelude::*;

/// Facet buttons, query input, optional filters, and the submit button
#[component]
pub fn SearchPanel() -> Element {
    let search_ctx = use_search_context();

    let (query, facet, year_filter, language_filter, show_filters, has_filters, loading, can_submit) = {
        let state = search_ctx.state.read();
        (
            state.query.clone(),
            state.facet,
            state.year_filter.clone(),
            state.language_filter.clone(),
            state.show_filters,
            state.has_active_filters(),
            state.loading,
            state.can_submit(),
        )
    };

    rsx! {
        div { class: "search-container",
            div { class: "search-box",
                div { class: "search-type-buttons",
                    for option in SearchFacet::ALL {
                        button {
                            key: "{option}",
                            class: if option == facet { "search-type-button active" } else { "search-type-button" },
                            onclick: {
                                let search_ctx = search_ctx.clone();
                                move |_| search_ctx.update(|state| state.set_facet(option))
                            },
                            "{option.label()}"
                        }
                    }
                }

                div { class: "search-input-container",
                    span { class: "search-icon", "🔍" }
                    input {
                        r#type: "text",
                        class: "search-input",
                        placeholder: "{facet.placeholder()}",
                        value: "{query}",
                        oninput: {
                            let search_ctx = search_ctx.clone();
                            move |event: FormEvent| search_ctx.update(|state| state.set_query(event.value()))
                        },
                        onkeydown: {
                            let search_ctx = search_ctx.clone();
                            move |event: KeyboardEvent| {
                                if event.key() == Key::Enter {
                                    search_ctx.submit();
                                }
                            }
                        },
                    }
                }

                div { class: "filter-controls",
                    button {
                        class: "filter-button",
                        onclick: {
                            let search_ctx = search_ctx.clone();
                            move |_| search_ctx.update(|state| state.toggle_filters())
                        },
                        "⚙ Filters"
                    }
                    if has_filters {
                        button {
                            class: "clear-filter-button",
                            onclick: {
                                let search_ctx = search_ctx.clone();
                                move |_| search_ctx.update(|state| state.clear_filters())
                            },
                            i { "Clear filters" }
                        }
                    }
                }

                if show_filters {
                    div { class: "filter-box",
                        div {
                            label { "Year" }
                            input {
                                r#type: "number",
                                placeholder: "e.g., 2020",
                                value: "{year_filter}",
                                oninput: {
                                    let search_ctx = search_ctx.clone();
                                    move |event: FormEvent| {
                                        search_ctx.update(|state| state.set_year_filter(event.value()))
                                    }
                                },
                            }
                        }
                        div {
                            label { "Language" }
                            input {
                                r#type: "text",
                                placeholder: "e.g., eng, spa",
                                value: "{language_filter}",
                                oninput: {
                                    let search_ctx = search_ctx.clone();
                                    move |event: FormEvent| {
                                        search_ctx.update(|state| state.set_language_filter(event.value()))
                                    }
                                },
                            }
                        }
                    }
                }

                button {
                    class: "search-button",
                    disabled: !can_submit,
                    onclick: {
                        let search_ctx = search_ctx.clone();
                        move |_| search_ctx.submit()
                    },
                    if loading {
                        span { class: "loader-spin small" }
                        "Searching..."
                    } else {
                        "🔍 Search Books"
                    }
                }
            }
        }
    }
}
