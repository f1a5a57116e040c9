use crate::company::{phone_href, EMAIL, PHONE};
use crate::{t, Hero, LeadFormFields};
use api::types::LeadSource;
use dioxus::prelude::*;

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

const FEATURES: [(&str, &str); 4] = [
    ("experience", "★"),
    ("quality", "✓"),
    ("team", "☺"),
    ("prices", "₸"),
];

const SERVICES: [(&str, &str); 6] = [
    ("construction", "▣"),
    ("electrical", "⚡"),
    ("automation", "⚙"),
    ("manufacturing", "▤"),
    ("innovation", "✦"),
    ("sales", "⊞"),
];

const STATS: [(&str, &str); 2] = [("55+", "home.stats.projects_label"), ("30+", "home.stats.years_label")];

#[component]
pub fn LandingPage() -> Element {
    let lang = crate::use_lang()();

    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }

        Hero { consult_href: "#contact", projects_href: "/works" }

        section { class: "features",
            div { class: "container",
                h2 { class: "section_title", {t(lang, "home.features.title")} }
                div { class: "feature_grid",
                    for (key, icon) in FEATURES {
                        div { key: "{key}", class: "card feature",
                            div { class: "icon_circle", "{icon}" }
                            h3 { {t(lang, &format!("home.features.{key}.title"))} }
                            p { class: "hint", {t(lang, &format!("home.features.{key}.desc"))} }
                        }
                    }
                }
            }
        }

        section { class: "services",
            div { class: "container",
                h2 { class: "section_title", {t(lang, "home.services.title")} }
                div { class: "service_grid",
                    for (key, icon) in SERVICES {
                        div { key: "{key}", class: "card service",
                            div { class: "service_head",
                                span { class: "icon_square", "{icon}" }
                                h3 { {t(lang, &format!("home.services.{key}.title"))} }
                            }
                            p { class: "hint", {t(lang, &format!("home.services.{key}.desc"))} }
                        }
                    }
                }
            }
        }

        section { class: "stats_band",
            div { class: "container stats_band_inner",
                for (value, label) in STATS {
                    div { key: "{label}", class: "stat",
                        div { class: "stat_value", "{value}" }
                        div { class: "stat_label", {t(lang, label)} }
                    }
                }
            }
        }

        section { id: "contact", class: "contact_section",
            div { class: "container",
                h2 { class: "section_title", {t(lang, "home.contact.title")} }
                p { class: "section_subtitle", {t(lang, "home.contact.subtitle")} }
                div { class: "contact_grid",
                    div { class: "card",
                        h3 { {t(lang, "home.contact.info_title")} }
                        ul { class: "info_list",
                            li {
                                span { class: "info_label", {t(lang, "common.phone")} }
                                a { href: phone_href(), "{PHONE}" }
                            }
                            li {
                                span { class: "info_label", {t(lang, "common.email")} }
                                a { href: "mailto:{EMAIL}", "{EMAIL}" }
                            }
                            li {
                                span { class: "info_label", {t(lang, "common.address")} }
                                span { {t(lang, "company.address")} }
                            }
                        }
                    }
                    div { class: "card",
                        h3 { {t(lang, "home.contact.form_title")} }
                        LeadFormFields { source: LeadSource::Landing }
                    }
                }
            }
        }
    }
}
