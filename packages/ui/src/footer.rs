use crate::company::{phone_href, BRAND, EMAIL, FOUNDED, PHONE};
use crate::t;
use chrono::Datelike;
use dioxus::prelude::*;

const SERVICES: [&str; 6] = [
    "houses",
    "apartments",
    "commercial",
    "facades",
    "roofing",
    "interior",
];

fn copyright_years(current: i32) -> String {
    if current > FOUNDED {
        format!("{FOUNDED}–{current}")
    } else {
        FOUNDED.to_string()
    }
}

/// Page footer. `nav` is the list of (href, label) pairs the router owns.
#[component]
pub fn SiteFooter(nav: Vec<(String, String)>) -> Element {
    let lang = crate::use_lang()();
    let years = copyright_years(chrono::Local::now().year());

    rsx! {
        footer { class: "site_footer",
            div { class: "container footer_grid",
                div {
                    div { class: "brand footer_brand",
                        span { class: "brand_mark" }
                        span { class: "brand_name", "{BRAND}" }
                    }
                    p { class: "hint", {t(lang, "footer.blurb")} }
                }
                div {
                    h4 { {t(lang, "footer.nav_title")} }
                    ul {
                        for (href, label) in nav {
                            li { key: "{href}", a { href: "{href}", "{label}" } }
                        }
                    }
                }
                div {
                    h4 { {t(lang, "footer.services_title")} }
                    ul {
                        for service in SERVICES {
                            li { key: "{service}", {t(lang, &format!("footer.services.{service}"))} }
                        }
                    }
                }
                div {
                    h4 { {t(lang, "footer.contacts_title")} }
                    ul {
                        li { a { href: phone_href(), "{PHONE}" } }
                        li { a { href: "mailto:{EMAIL}", "{EMAIL}" } }
                        li { {t(lang, "company.address")} }
                    }
                }
            }
            div { class: "container footer_bottom",
                "© {years} {BRAND}. "
                {t(lang, "footer.rights")}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_spans_from_founding_year() {
        assert_eq!(copyright_years(2025), "2014–2025");
        assert_eq!(copyright_years(2014), "2014");
    }
}
