use crate::t;
use dioxus::prelude::*;

#[component]
pub fn NotFoundPage(path: String) -> Element {
    let lang = crate::use_lang()();
    rsx! {
        section { class: "not_found",
            div { class: "container",
                div { class: "not_found_code", "404" }
                h1 { {t(lang, "not_found.title")} }
                p { class: "hint", {t(lang, "not_found.body")} }
                p { class: "hint mono", "/{path}" }
                a { class: "btn primary", href: "/", {t(lang, "not_found.cta")} }
            }
        }
    }
}
