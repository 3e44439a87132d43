mod support;

use axum::http::StatusCode;
use book_finder::openlibrary::{OpenLibraryClient, OpenLibraryError, SearchFacet, SearchQuery};
use book_finder::search::{ResultsView, SearchState};
use book_finder::Config;

use crate::support::{tracing_init, MockSearchServer, NO_BOOKS, TWO_BOOKS};

#[tokio::test]
async fn test_search_returns_docs() {
    tracing_init();
    let server = MockSearchServer::start(StatusCode::OK, TWO_BOOKS).await;
    let client = OpenLibraryClient::new(&server.config());

    let query = SearchQuery::new(SearchFacet::Title, "the hobbit").unwrap();
    let response = client.search(&query).await.unwrap();

    assert_eq!(response.num_found, 2);
    assert_eq!(response.docs[0].title, "The Hobbit");
    assert_eq!(response.docs[1].subtitle.as_deref(), Some("Illustrated edition"));
    assert_eq!(server.queries(), vec!["title=the%20hobbit&limit=50".to_string()]);
}

#[tokio::test]
async fn test_filters_are_sent_in_order() {
    tracing_init();
    let server = MockSearchServer::start(StatusCode::OK, NO_BOOKS).await;
    let client = OpenLibraryClient::new(&server.config());

    let query = SearchQuery::new(SearchFacet::Author, "Tolkien")
        .unwrap()
        .with_year("1937")
        .unwrap()
        .with_language("ENG");
    let response = client.search(&query).await.unwrap();

    assert!(response.docs.is_empty());
    assert_eq!(
        server.queries(),
        vec!["author=Tolkien&first_publish_year=1937&language=eng&limit=50".to_string()]
    );
}

#[tokio::test]
async fn test_rate_limit_status() {
    tracing_init();
    let server = MockSearchServer::start(StatusCode::TOO_MANY_REQUESTS, "{}").await;
    let client = OpenLibraryClient::new(&server.config());

    let query = SearchQuery::new(SearchFacet::Subject, "fantasy").unwrap();
    let err = client.search(&query).await.unwrap_err();
    assert!(matches!(err, OpenLibraryError::RateLimit));
}

#[tokio::test]
async fn test_server_error_status() {
    tracing_init();
    let server = MockSearchServer::start(StatusCode::INTERNAL_SERVER_ERROR, "{}").await;
    let client = OpenLibraryClient::new(&server.config());

    let query = SearchQuery::new(SearchFacet::Isbn, "0261103253").unwrap();
    match client.search(&query).await {
        Err(OpenLibraryError::Status(status)) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body() {
    tracing_init();
    let server = MockSearchServer::start(StatusCode::OK, "<html>not json</html>").await;
    let client = OpenLibraryClient::new(&server.config());

    let query = SearchQuery::new(SearchFacet::Title, "dune").unwrap();
    let err = client.search(&query).await.unwrap_err();
    assert!(matches!(err, OpenLibraryError::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused() {
    tracing_init();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = Config {
        api_url: format!("http://{}", addr),
        ..Config::default()
    };
    let client = OpenLibraryClient::new(&config);

    let query = SearchQuery::new(SearchFacet::Title, "dune").unwrap();
    let err = client.search(&query).await.unwrap_err();
    assert!(matches!(err, OpenLibraryError::Request(_)));
}

#[tokio::test]
async fn test_state_round_trip_through_client() {
    tracing_init();
    let server = MockSearchServer::start(StatusCode::OK, TWO_BOOKS).await;
    let client = OpenLibraryClient::new(&server.config());

    let mut state = SearchState::new();
    state.set_query("hobbit".to_string());
    let query = state.begin_search(server.config().result_limit).unwrap();
    assert_eq!(state.results_view(), ResultsView::Loading);

    state.finish_search(client.search(&query).await);

    assert!(!state.loading);
    assert_eq!(state.results_view(), ResultsView::Results(2));
    assert_eq!(state.results_summary(), "Found 2 books");
}

#[tokio::test]
async fn test_failed_fetch_leaves_empty_results() {
    tracing_init();
    let server = MockSearchServer::start(StatusCode::BAD_GATEWAY, "").await;
    let client = OpenLibraryClient::new(&server.config());

    let mut state = SearchState::new();
    state.set_query("hobbit".to_string());
    let query = state.begin_search(50).unwrap();
    state.finish_search(client.search(&query).await);

    assert!(!state.loading);
    assert!(state.books.is_empty());
    assert_eq!(state.results_view(), ResultsView::Empty);
}
