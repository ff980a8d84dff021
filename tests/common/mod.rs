#![allow(dead_code)]

use axum::Router;
use conveyor::api::routes::public_routes;
use conveyor::infrastructure::index::{HttpIndexRepository, build_client};
use conveyor::state::AppState;
use std::time::Duration;
use url::Url;

pub const PROJECT_JSON: &str = r#"{
    "info": {"name": "pkg", "version": "1.0"},
    "releases": {
        "1.0": [
            {
                "filename": "pkg-1.0.tar.gz",
                "python_version": "source",
                "url": "https://files.example/packages/ab/cd/pkg-1.0.tar.gz",
                "has_sig": true
            },
            {
                "filename": "pkg-1.0-py3-none-any.whl",
                "python_version": "py3",
                "url": "https://files.example/packages/ef/01/pkg-1.0-py3-none-any.whl"
            }
        ],
        "0.9": []
    }
}"#;

pub fn create_test_state(index_url: &str) -> AppState {
    let endpoint = Url::parse(index_url).unwrap();
    let client = build_client(Duration::from_secs(5), "conveyor-test").unwrap();
    let repository = HttpIndexRepository::new(client, endpoint.clone());

    AppState::new(repository, endpoint)
}

pub fn create_test_app(index_url: &str) -> Router {
    Router::new()
        .merge(public_routes())
        .with_state(create_test_state(index_url))
}
