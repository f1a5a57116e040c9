//! End-to-end helpers: a local web server process and a headless browser.

pub mod browser;
pub mod test_server;
