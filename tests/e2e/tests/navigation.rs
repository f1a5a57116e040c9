use e2e::test_server::TestServer;

#[tokio::test]
async fn test_pages_render_on_the_server() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    for (path, marker) in [
        ("/", "Asseni"),
        ("/works", "Наши работы"),
        ("/contact", "assenitoo@mail.ru"),
    ] {
        let response = reqwest::get(server.page(path))
            .await
            .expect("Failed to fetch page");
        assert_eq!(response.status(), 200, "{path} should return 200 OK");

        let body = response.text().await.expect("Failed to read body");
        assert!(body.contains(marker), "{path} should contain {marker}");
    }
}

#[tokio::test]
async fn test_unknown_path_shows_not_found_page() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let body = reqwest::get(server.page("/no/such/page"))
        .await
        .expect("Failed to fetch page")
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("404"));
    assert!(body.contains("no/such/page"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let body = reqwest::get(server.page("/api/health"))
        .await
        .expect("Failed to call health")
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("OK"));
}
