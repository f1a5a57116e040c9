use e2e::{browser::Browser, test_server::TestServer};
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(15);

#[tokio::test]
async fn test_works_page_lists_whole_catalog() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(&server.page("/works")).expect("Failed to navigate");

    page.find_element(".project_card").expect("cards should render");
    assert_eq!(page.count(".project_card"), 14);
    assert_eq!(page.count("select[name='year'] option"), 8);
}

#[tokio::test]
async fn test_search_narrows_results() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(&server.page("/works")).expect("Failed to navigate");
    page.find_element("input[name='search']").expect("search input should exist");

    page.eventually(
        WAIT,
        |p| p.fill("input[name='search']", "транстелеком"),
        |p| p.count(".project_card") == 2,
    )
    .expect("search should leave two projects");

    page.eventually(
        WAIT,
        |p| p.fill("input[name='search']", "zzzz-nothing"),
        |p| p.count(".empty_state") == 1,
    )
    .expect("unmatched search should show the empty state");
}

#[tokio::test]
async fn test_list_view_and_detail_dialog() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(&server.page("/works")).expect("Failed to navigate");

    page.eventually(
        WAIT,
        |p| p.click("button[data-view='list']"),
        |p| p.count("table.project_table tbody tr") == 14,
    )
    .expect("list view should show a row per project");

    page.eventually(
        WAIT,
        |p| p.click("table.project_table tbody tr"),
        |p| p.count("div[role='dialog']") == 1,
    )
    .expect("clicking a row should open the dialog");

    page.eventually(
        WAIT,
        |p| p.click(".dialog_close"),
        |p| p.count("div[role='dialog']") == 0,
    )
    .expect("close button should dismiss the dialog");
}
