use anyhow::{Context, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .context("failed to build launch options")?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    /// Inner text of the first element matching `selector`.
    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn count(&self, selector: &str) -> usize {
        self.tab
            .find_elements(selector)
            .map(|found| found.len())
            .unwrap_or(0)
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    /// Set an input's value and fire `input`, so it can be repeated safely
    /// while the page is still hydrating.
    pub fn fill(&self, selector: &str, value: &str) -> Result<()> {
        let js = format!(
            r#"(function(){{
                const el = document.querySelector({sel});
                if (!el) return false;
                el.value = {val};
                el.dispatchEvent(new Event("input", {{ bubbles: true }}));
                return true;
            }})()"#,
            sel = serde_json::to_string(selector)?,
            val = serde_json::to_string(value)?,
        );
        self.tab.evaluate(&js, false)?;
        Ok(())
    }

    /// Retry `action` until `done` holds or `timeout` passes.
    pub fn eventually(
        &self,
        timeout: Duration,
        mut action: impl FnMut(&Page) -> Result<()>,
        mut done: impl FnMut(&Page) -> bool,
    ) -> Result<()> {
        let started = Instant::now();
        loop {
            action(self)?;
            std::thread::sleep(Duration::from_millis(250));
            if done(self) {
                return Ok(());
            }
            if started.elapsed() > timeout {
                anyhow::bail!("condition not met within {timeout:?}");
            }
        }
    }
}
