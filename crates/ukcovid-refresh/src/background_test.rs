use std::sync::atomic::{AtomicUsize, Ordering};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::store::PersistedState;

const FIXTURE: &str =
    r#"{"data":[{"date":"2021-01-05","cases":100,"cumCases":1000,"deaths":5,"cumDeaths":50}]}"#;

#[derive(Default)]
struct RecordingSink {
    reloads: AtomicUsize,
    notifications: AtomicUsize,
}

impl UpdateSink for RecordingSink {
    fn reload_views(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }

    fn notify(&self, _notification: &Notification) {
        self.notifications.fetch_add(1, Ordering::SeqCst);
    }
}

fn temp_store(name: &str) -> StateStore {
    let path = std::env::temp_dir().join(format!(
        "ukcovid-background-{}-{name}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    StateStore::new(path)
}

fn test_client(server_uri: &str) -> StatsClient {
    StatsClient::with_base_url(&format!("{server_uri}/v1/data"), 5, "ukcovid-test")
        .expect("client construction should not fail")
}

async fn mount(server: &MockServer, body: &str, last_modified: Option<&str>) {
    let mut template = ResponseTemplate::new(200).set_body_raw(body, "application/json");
    if let Some(lm) = last_modified {
        template = template.insert_header("Last-Modified", lm);
    }
    Mock::given(method("GET"))
        .and(path("/v1/data"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn first_run_updates_and_notifies() {
    let server = MockServer::start().await;
    mount(&server, FIXTURE, Some("Tue, 05 Jan 2021 16:00:02 GMT")).await;
    let store = temp_store("first-run");
    let sink = RecordingSink::default();

    let result = run_background_refresh(&test_client(&server.uri()), &store, Location::Uk, &sink)
        .await
        .unwrap();

    assert_eq!(result, BackgroundResult::Updated { notified: true });
    assert_eq!(sink.reloads.load(Ordering::SeqCst), 1);
    assert_eq!(sink.notifications.load(Ordering::SeqCst), 1);

    let persisted = store.load().unwrap();
    assert_eq!(persisted.last_modified, "Tue, 05 Jan 2021 16:00:02 GMT");
    assert!(!persisted.last_notification.is_empty());
}

#[tokio::test]
async fn unchanged_header_fires_nothing() {
    let server = MockServer::start().await;
    mount(&server, FIXTURE, Some("Tue, 05 Jan 2021 16:00:02 GMT")).await;
    let store = temp_store("unchanged");
    let client = test_client(&server.uri());
    let sink = RecordingSink::default();

    run_background_refresh(&client, &store, Location::Uk, &sink)
        .await
        .unwrap();
    let result = run_background_refresh(&client, &store, Location::Uk, &sink)
        .await
        .unwrap();

    assert_eq!(result, BackgroundResult::Unchanged);
    assert_eq!(sink.reloads.load(Ordering::SeqCst), 1, "no second reload");
    assert_eq!(sink.notifications.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn new_header_with_identical_content_reloads_but_does_not_renotify() {
    let server = MockServer::start().await;
    mount(&server, FIXTURE, Some("Tue, 05 Jan 2021 16:00:02 GMT")).await;
    let store = temp_store("renotify");
    let client = test_client(&server.uri());
    let sink = RecordingSink::default();

    run_background_refresh(&client, &store, Location::Uk, &sink)
        .await
        .unwrap();

    server.reset().await;
    mount(&server, FIXTURE, Some("Tue, 05 Jan 2021 17:30:00 GMT")).await;
    let result = run_background_refresh(&client, &store, Location::Uk, &sink)
        .await
        .unwrap();

    assert_eq!(result, BackgroundResult::Updated { notified: false });
    assert_eq!(sink.reloads.load(Ordering::SeqCst), 2);
    assert_eq!(
        sink.notifications.load(Ordering::SeqCst),
        1,
        "identical notification content must be suppressed"
    );
    assert_eq!(
        store.load().unwrap().last_modified,
        "Tue, 05 Jan 2021 17:30:00 GMT"
    );
}

#[tokio::test]
async fn missing_header_changes_nothing() {
    let server = MockServer::start().await;
    mount(&server, FIXTURE, None).await;
    let store = temp_store("no-header");
    let sink = RecordingSink::default();

    let result = run_background_refresh(&test_client(&server.uri()), &store, Location::Uk, &sink)
        .await
        .unwrap();

    assert_eq!(result, BackgroundResult::NoTimestamp);
    assert_eq!(sink.reloads.load(Ordering::SeqCst), 0);
    assert_eq!(store.load().unwrap(), PersistedState::default());
}

#[tokio::test]
async fn fetch_failure_leaves_store_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/data"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let store = temp_store("failure");
    store
        .save(&PersistedState {
            last_modified: "Mon, 04 Jan 2021 16:00:00 GMT".to_owned(),
            last_notification: String::new(),
        })
        .unwrap();
    let sink = RecordingSink::default();

    let result =
        run_background_refresh(&test_client(&server.uri()), &store, Location::Uk, &sink).await;

    assert!(matches!(result, Err(BackgroundError::Api(_))));
    assert_eq!(sink.reloads.load(Ordering::SeqCst), 0);
    assert_eq!(
        store.load().unwrap().last_modified,
        "Mon, 04 Jan 2021 16:00:00 GMT"
    );
}
