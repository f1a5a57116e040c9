use dioxus::prelude::*;

#[component]
pub fn Works() -> Element {
    rsx! { ui::OurWorksPage {} }
}
