use crate::company::BRAND;
use crate::t;
use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero(#[props(into)] consult_href: String, #[props(into)] projects_href: String) -> Element {
    let lang = crate::use_lang()();
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { id: "hero",
            div { class: "container hero_inner",
                h1 {
                    {t(lang, "home.hero.title_prefix")}
                    " "
                    span { class: "accent", "{BRAND}" }
                }
                p { class: "lead", {t(lang, "home.hero.subtitle")} }

                div { class: "cta_row",
                    a { class: "btn primary large", href: "{consult_href}", {t(lang, "home.hero.cta_consult")} }
                    a { class: "btn outline large", href: "{projects_href}", {t(lang, "home.hero.cta_projects")} }
                }
            }
        }
    }
}
