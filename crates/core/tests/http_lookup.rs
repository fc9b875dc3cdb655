//! HTTP client and end-to-end tests against the stub search server.

mod helpers;

use std::time::Duration;

use helpers::fixtures::spawn_stub_server;
use helpers::TestHarness;
use typeahead_core::{HttpSearchClient, LookupError, Query, SearchClient, WidgetConfig};

fn config_for(base: &str) -> WidgetConfig {
    WidgetConfig { debounce: Duration::from_millis(20), ..WidgetConfig::default() }
        .with_endpoint(base)
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lookup_decodes_titles_and_authors() {
    let base = spawn_stub_server().await;
    let client = HttpSearchClient::new(&config_for(&base)).unwrap();

    let items = client.lookup(&Query::from_input("Du")).await.unwrap();
    assert_eq!(items.len(), 5, "server caps results at five");
    assert_eq!(items[0].title, "Dune");
    assert_eq!(items[0].author.as_deref(), Some("Frank Herbert"));
}

#[tokio::test]
async fn lookup_encodes_reserved_characters() {
    let base = spawn_stub_server().await;
    let client = HttpSearchClient::new(&config_for(&base)).unwrap();

    let items = client.lookup(&Query::from_input("war & peace")).await.unwrap();
    let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["War & Peace"]);
}

#[tokio::test]
async fn lookup_with_no_matches_is_empty() {
    let base = spawn_stub_server().await;
    let client = HttpSearchClient::new(&config_for(&base)).unwrap();

    let items = client.lookup(&Query::from_input("zzzz")).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn non_ok_status_is_an_error() {
    let base = spawn_stub_server().await;
    let client = HttpSearchClient::new(&config_for(&format!("{base}/broken"))).unwrap();

    let err = client.lookup(&Query::from_input("Du")).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let base = spawn_stub_server().await;
    let client = HttpSearchClient::new(&config_for(&format!("{base}/garbled"))).unwrap();

    let err = client.lookup(&Query::from_input("Du")).await.unwrap_err();
    assert!(matches!(err, LookupError::Decode(_)), "unexpected error: {err}");
}

#[tokio::test]
async fn extra_fields_and_missing_author_are_accepted() {
    let base = spawn_stub_server().await;
    let client = HttpSearchClient::new(&config_for(&format!("{base}/titles"))).unwrap();

    let items = client.lookup(&Query::from_input("Du")).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Dune");
    assert!(items[0].author.is_none());
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Bind then drop a listener to get a port nobody is serving.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpSearchClient::new(&config_for(&format!("http://{addr}"))).unwrap();
    let err = client.lookup(&Query::from_input("Du")).await.unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)), "unexpected error: {err}");
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn typing_du_then_clicking_dune_submits_dune() {
    let base = spawn_stub_server().await;
    let config = config_for(&base);
    let client = HttpSearchClient::new(&config).unwrap();
    let h = TestHarness::with_config(config, client);
    let page = h.page.clone();

    h.handle.input("Du");
    let mut widget = h.finish().await;

    let log = page.snapshot();
    assert!(log.visible);
    assert_eq!(log.items[0], ("Dune".to_string(), Some("Frank Herbert".to_string())));
    assert_eq!(widget.results().len(), 5);

    widget.on_select(0, "Dune");
    let log = page.snapshot();
    assert_eq!(log.input, "Dune");
    assert!(!log.visible);
    assert_eq!(log.submissions, vec!["Dune"]);
}

#[tokio::test]
async fn server_error_leaves_results_hidden() {
    let base = spawn_stub_server().await;
    let config = config_for(&format!("{base}/broken"));
    let client = HttpSearchClient::new(&config).unwrap();
    let h = TestHarness::with_config(config, client);
    let page = h.page.clone();

    h.handle.input("Dune");
    let widget = h.finish().await;

    assert!(!widget.is_visible());
    assert!(!page.snapshot().visible);
    assert!(page.snapshot().items.is_empty());
}
