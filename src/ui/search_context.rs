use crate::config::{use_config, Config};
use crate::openlibrary::OpenLibraryClient;
use crate::search::SearchState;
use dioxus::prelude::*;
use tracing::{debug, info};

/// Search page state shared by the form, the result grid and the detail modal
#[derive(Clone)]
pub struct SearchContext {
    pub state: Signal<SearchState>,
    client: OpenLibraryClient,
    config: Config,
}

impl SearchContext {
    pub fn new(config: &Config) -> Self {
        Self {
            state: Signal::new(SearchState::new()),
            client: OpenLibraryClient::new(config),
            config: config.clone(),
        }
    }

    pub fn covers_url(&self) -> &str {
        self.client.covers_url()
    }

    pub fn site_url(&self) -> &str {
        self.client.base_url()
    }

    /// Apply a synchronous change to the view state
    pub fn update(&self, f: impl FnOnce(&mut SearchState)) {
        let mut state = self.state;
        f(&mut *state.write());
    }

    /// Start a search from the current form values.
    /// Does nothing while another search is in flight.
    pub fn submit(&self) {
        let mut state = self.state;

        let query = match state.write().begin_search(self.config.result_limit) {
            Ok(query) => query,
            Err(reason) => {
                debug!("Search not started: {}", reason);
                return;
            }
        };

        info!(
            "🔍 Searching by {}: '{}' (year: {:?}, language: {:?})",
            query.facet, query.text, query.year, query.language
        );

        let client = self.client.clone();
        spawn(async move {
            let result = client.search(&query).await;
            state.write().finish_search(result);
        });
    }
}

pub fn use_search_context() -> SearchContext {
    use_context::<SearchContext>()
}

#[component]
pub fn SearchContextProvider(children: Element) -> Element {
    let config = use_config();
    use_context_provider(move || SearchContext::new(&config));

    rsx! {
        {children}
    }
}
