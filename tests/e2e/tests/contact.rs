use e2e::{browser::Browser, test_server::TestServer};
use serde_json::json;

#[tokio::test]
async fn test_contact_form_fields_exist() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(&server.page("/contact")).expect("Failed to navigate");

    for selector in [
        "input[name='name']",
        "input[name='phone']",
        "input[name='email']",
        "textarea[name='message']",
        "button[type='submit']",
    ] {
        assert!(page.find_element(selector).is_ok(), "{selector} should exist");
    }
}

#[tokio::test]
async fn test_lead_is_accepted_in_local_mode() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::Client::new()
        .post(server.page("/api/leads"))
        .json(&json!({
            "source": "contact",
            "form": {
                "name": "Тест",
                "phone": "+7 701 000 00 00",
                "email": "",
                "message": "Нужна консультация"
            }
        }))
        .send()
        .await
        .expect("Failed to post lead");

    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("sent"), "unexpected body: {body}");
}

#[tokio::test]
async fn test_lead_without_phone_is_refused() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::Client::new()
        .post(server.page("/api/leads"))
        .json(&json!({
            "source": "landing",
            "form": { "name": "Тест", "phone": "  ", "email": "", "message": "" }
        }))
        .send()
        .await
        .expect("Failed to post lead");

    assert!(!response.status().is_success());
}
