use dioxus::prelude::*;
use ui::LandingPage;

#[component]
pub fn Home() -> Element {
    rsx! { LandingPage {} }
}
