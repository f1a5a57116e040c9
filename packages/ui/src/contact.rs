use crate::company::{mailto_href, phone_href, EMAIL, PHONE};
use crate::{t, LeadFormFields};
use api::types::LeadSource;
use dioxus::prelude::*;

const CONTACT_CSS: Asset = asset!("/assets/styling/contact.css");

const WHY_POINTS: [&str; 4] = ["exp", "solutions", "production", "quality"];

#[component]
pub fn ContactPage() -> Element {
    let lang = crate::use_lang()();
    let mail_link = mailto_href(LeadSource::Contact.subject());

    rsx! {
        document::Link { rel: "stylesheet", href: CONTACT_CSS }

        section { class: "page_banner",
            div { class: "container",
                h1 { {t(lang, "contact.header.title")} }
                p { {t(lang, "contact.header.subtitle")} }
            }
        }

        section { class: "info_cards",
            div { class: "container info_grid",
                div { class: "card info_card",
                    div { class: "icon_circle", "☎" }
                    h3 { {t(lang, "contact.cards.phone.title")} }
                    a { class: "info_value", href: phone_href(), "{PHONE}" }
                    p { class: "hint", {t(lang, "contact.cards.phone.hours")} }
                }
                div { class: "card info_card",
                    div { class: "icon_circle", "✉" }
                    h3 { {t(lang, "common.email")} }
                    a { class: "info_value", href: "{mail_link}", "{EMAIL}" }
                    p { class: "hint", {t(lang, "contact.cards.email.response")} }
                }
                div { class: "card info_card",
                    div { class: "icon_circle", "⌂" }
                    h3 { {t(lang, "contact.cards.address.title")} }
                    p { class: "info_value", {t(lang, "contact.cards.address.city")} }
                    p { class: "hint", {t(lang, "contact.cards.address.street")} }
                }
                div { class: "card info_card",
                    div { class: "icon_circle", "◷" }
                    h3 { {t(lang, "contact.cards.hours.title")} }
                    p { class: "info_value", {t(lang, "contact.cards.hours.weekdays")} }
                    p { class: "hint", {t(lang, "contact.cards.hours.weekend")} }
                }
            }
        }

        section { class: "contact_main",
            div { class: "container contact_layout",
                div { class: "card form_card",
                    h2 { {t(lang, "contact.form.title")} }
                    p { class: "hint", {t(lang, "contact.form.subtitle")} }
                    LeadFormFields { source: LeadSource::Contact }
                    p { class: "footnote", {t(lang, "contact.form.footnote")} }
                }

                div { class: "side_column",
                    div { class: "card why_card",
                        h3 { {t(lang, "contact.why.title")} }
                        ul { class: "why_list",
                            for point in WHY_POINTS {
                                li { key: "{point}",
                                    span { class: "check", "✓" }
                                    div {
                                        div { class: "strong", {t(lang, &format!("contact.why.points.{point}.title"))} }
                                        div { class: "hint", {t(lang, &format!("contact.why.points.{point}.desc"))} }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "card urgent_card",
                        h3 { {t(lang, "contact.urgent.title")} }
                        p { class: "strong", {t(lang, "contact.urgent.subtitle")} }
                        p { class: "hint", {t(lang, "contact.urgent.body")} }
                        a { class: "btn primary wide", href: phone_href(), "{PHONE}" }
                    }
                }
            }
        }
    }
}
