use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! { ui::NotFoundPage { path: segments.join("/") } }
}
