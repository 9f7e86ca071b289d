use crate::adapters::FsStore;
use crate::assets;
use crate::config;
use crate::state;
use crate::types::subscription::Subscription;
use crate::types::theme::Theme;

use axum::Router;
use axum::routing::get;
use axum::routing::post;

use std::sync::{Arc, Mutex};

mod subscriptions;
mod theme;

pub fn app(
    config: config::AppConfig,
    store: FsStore,
    subscriptions: Vec<Subscription>,
    theme: Theme,
) -> Router {
    let state = state::AppState {
        config,
        store,
        subscriptions: Arc::new(Mutex::new(subscriptions)),
        theme: Arc::new(Mutex::new(theme)),
    };
    Router::new()
        .route("/", get(subscriptions::index))
        .route("/subscriptions", post(subscriptions::create))
        .route("/subscriptions/{id}/delete", post(subscriptions::delete))
        .route("/theme", post(theme::toggle))
        .route("/static/style.css", get(assets::stylesheet))
        .route("/health", get(health))
        .with_state(state)
}

pub(crate) async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;
    use crate::store;
    use axum::body::Body;
    use axum::body::to_bytes;
    use axum::http::Request;
    use axum::http::StatusCode;
    use axum::http::header::LOCATION;
    use serde_json::Value as JsonValue;
    use serde_json::from_str as json_from_str;
    use tower::ServiceExt;

    use std::path::{Path, PathBuf};

    fn create_temp_root(test_name: &str) -> PathBuf {
        let mut root = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        root.push(format!("subtrak-{}-{}", test_name, nanos));
        std::fs::create_dir_all(&root).expect("create temp dir");
        root
    }

    fn test_app(root: &Path) -> Router {
        let config = config::AppConfig {
            data_dir: root.to_path_buf(),
            ..Default::default()
        };
        let store = FsStore::new(root);
        let subscriptions = store::load_subscriptions(&store);
        let theme = store::load_theme(&store);
        app(config, store, subscriptions, theme)
    }

    fn create_form(name: &str, expiration_date: &str) -> String {
        format!(
            "name={name}&price=4500&currency=NGN&description=Family+plan&expiration_date={expiration_date}"
        )
    }

    async fn post_form(root: &Path, uri: &str, form: String) -> axum::response::Response {
        test_app(root)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(form))
                    .unwrap(),
            )
            .await
            .expect("request failed")
    }

    async fn get_body(root: &Path, uri: &str) -> String {
        let response = test_app(root)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .expect("request failed");
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        String::from_utf8(body.to_vec()).expect("utf8 body")
    }

    fn stored_subscriptions(root: &Path) -> JsonValue {
        let raw = std::fs::read_to_string(root.join("subscriptions.json")).expect("stored file");
        json_from_str(&raw).expect("parse stored json")
    }

    #[tokio::test]
    async fn app__should_return_ok_on_health_endpoint() {
        // Given
        let root = create_temp_root("health");

        // When
        let response = test_app(&root)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("request failed");

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        assert_eq!(body.as_ref(), b"ok");

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn index__should_show_empty_state_with_default_dark_theme() {
        // When
        let root = create_temp_root("index-empty");
        let body = get_body(&root, "/").await;

        // Then
        assert!(body.contains("No subscriptions tracked yet."));
        assert!(body.contains("class=\"dark\""));

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn create__should_persist_record_and_redirect() {
        // Given
        let root = create_temp_root("create");

        // When
        let response = post_form(&root, "/subscriptions", create_form("Netflix", "2025-03-10")).await;

        // Then
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).expect("location header"),
            "/"
        );
        let stored = stored_subscriptions(&root);
        assert_eq!(stored.as_array().expect("array").len(), 1);
        assert_eq!(stored[0]["name"], "Netflix");
        assert_eq!(stored[0]["price"], 4500.0);
        assert_eq!(stored[0]["currency"], "NGN");
        assert_eq!(stored[0]["expirationDate"], "2025-03-10");
        assert!(stored[0].get("lastNotified").is_none());
        assert!(!stored[0]["id"].as_str().expect("id").is_empty());

        let body = get_body(&root, "/").await;
        assert!(body.contains("Netflix"));

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn create__should_prepend_newest_record() {
        // Given
        let root = create_temp_root("create-order");
        post_form(&root, "/subscriptions", create_form("Netflix", "2025-03-10")).await;

        // When
        post_form(&root, "/subscriptions", create_form("Spotify", "2025-06-01")).await;

        // Then
        let stored = stored_subscriptions(&root);
        assert_eq!(stored[0]["name"], "Spotify");
        assert_eq!(stored[1]["name"], "Netflix");

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn create__should_reject_blank_name_without_touching_storage() {
        // Given
        let root = create_temp_root("create-blank-name");

        // When
        let response = post_form(&root, "/subscriptions", create_form("+++", "2025-03-10")).await;

        // Then: "+++" decodes to whitespace, so the name is blank
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = std::str::from_utf8(&body).expect("utf8 body");
        assert!(body.contains("Plan name is required."));
        assert!(!root.join("subscriptions.json").exists());

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn create__should_reject_malformed_date() {
        // Given
        let root = create_temp_root("create-bad-date");

        // When
        let response = post_form(&root, "/subscriptions", create_form("Netflix", "soon")).await;

        // Then
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!root.join("subscriptions.json").exists());

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn delete__should_remove_only_the_matching_record() {
        // Given
        let root = create_temp_root("delete");
        post_form(&root, "/subscriptions", create_form("Netflix", "2025-03-10")).await;
        post_form(&root, "/subscriptions", create_form("Spotify", "2025-06-01")).await;
        let stored = stored_subscriptions(&root);
        let netflix_id = stored[1]["id"].as_str().expect("id").to_string();

        // When
        let response = post_form(
            &root,
            &format!("/subscriptions/{netflix_id}/delete"),
            String::new(),
        )
        .await;

        // Then
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let stored = stored_subscriptions(&root);
        let names: Vec<&str> = stored
            .as_array()
            .expect("array")
            .iter()
            .map(|entry| entry["name"].as_str().expect("name"))
            .collect();
        assert_eq!(names, ["Spotify"]);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn delete__should_ignore_unknown_id() {
        // Given
        let root = create_temp_root("delete-unknown");
        post_form(&root, "/subscriptions", create_form("Netflix", "2025-03-10")).await;

        // When
        let response = post_form(&root, "/subscriptions/no-such-id/delete", String::new()).await;

        // Then
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(stored_subscriptions(&root).as_array().expect("array").len(), 1);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn theme__should_toggle_and_persist() {
        // Given
        let root = create_temp_root("theme-toggle");

        // When
        let response = post_form(&root, "/theme", String::new()).await;

        // Then: default is dark, so the first toggle lands on light
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let stored = std::fs::read_to_string(root.join("theme")).expect("theme file");
        assert_eq!(stored, "light");
        let body = get_body(&root, "/").await;
        assert!(body.contains("class=\"light\""));

        std::fs::remove_dir_all(&root).expect("cleanup");
    }
}
