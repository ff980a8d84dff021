mod common;

use axum_test::TestServer;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = TestServer::new(common::create_test_app("https://index.example/")).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["endpoint"], "https://index.example/");
    assert!(json.get("index_endpoint").is_none());
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_does_not_contact_index() {
    let mut upstream = mockito::Server::new_async().await;
    let mock = upstream
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let server = TestServer::new(common::create_test_app(&upstream.url())).unwrap();

    server.get("/health").await.assert_status_ok();
    mock.assert_async().await;
}
