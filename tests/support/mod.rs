use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use book_finder::Config;
use std::sync::{Arc, Mutex};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Local stand-in for search.json that replies with a fixed status and body
pub struct MockSearchServer {
    pub base_url: String,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockSearchServer {
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let recorded = queries.clone();

        let app = Router::new().route(
            "/search.json",
            get(move |RawQuery(query): RawQuery| {
                let recorded = recorded.clone();
                async move {
                    recorded.lock().unwrap().push(query.unwrap_or_default());
                    (status, [("content-type", "application/json")], body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            queries,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            api_url: self.base_url.clone(),
            ..Config::default()
        }
    }

    /// Raw query strings received so far, in arrival order
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

pub const TWO_BOOKS: &str = r#"{
    "numFound": 2,
    "start": 0,
    "numFoundExact": true,
    "num_found": 2,
    "documentation_url": "https://openlibrary.org/dev/docs/api/search",
    "q": "",
    "offset": null,
    "docs": [
        {
            "key": "/works/OL262758W",
            "title": "The Hobbit",
            "author_name": ["J.R.R. Tolkien"],
            "first_publish_year": 1937,
            "cover_i": 14627509,
            "ratings_average": 4.3
        },
        {
            "key": "/works/OL27479W",
            "title": "The Hobbit, or There and Back Again",
            "subtitle": "Illustrated edition",
            "language": ["eng"]
        }
    ]
}"#;

pub const NO_BOOKS: &str = r#"{
    "numFound": 0,
    "start": 0,
    "numFoundExact": true,
    "num_found": 0,
    "documentation_url": "https://openlibrary.org/dev/docs/api/search",
    "q": "",
    "offset": null,
    "docs": []
}"#;
