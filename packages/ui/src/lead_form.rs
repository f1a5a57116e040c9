use crate::toast::ToastKind;
use crate::{t, t_args, Lang};
use api::types::{LeadForm, LeadOutcome, LeadSource};
use dioxus::prelude::*;

/// Toast kind, title key and optional body key for a submission result.
/// `None` means the request never got an answer from our server.
fn notice_for(outcome: Option<LeadOutcome>) -> (ToastKind, &'static str, Option<&'static str>) {
    match outcome {
        Some(LeadOutcome::Sent) => (ToastKind::Success, "lead.success", None),
        Some(LeadOutcome::NotConfigured) => (ToastKind::Error, "lead.key_missing", Some("lead.call_us")),
        Some(LeadOutcome::Rejected) => (ToastKind::Error, "lead.error", Some("lead.call_us")),
        Some(LeadOutcome::Unreachable) | None => (ToastKind::Error, "lead.network_error", Some("lead.call_us")),
    }
}

fn missing_field_message(lang: Lang, field: api::types::LeadField) -> String {
    let name = t(lang, &format!("lead.field.{}", field.as_str()));
    t_args(lang, "lead.missing_field", &[("field", name.as_str())])
}

/// Contact request form. Clears itself after a successful submission and
/// keeps the input on any failure.
#[component]
pub fn LeadFormFields(source: LeadSource) -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    let mut form = use_signal(LeadForm::default);
    let mut sending = use_signal(|| false);

    let prefix = source.as_str();
    let message_label = if source.requires_message() {
        t(lang, "lead.message_label_required")
    } else {
        t(lang, "lead.message_label")
    };
    let rows = if source.requires_message() { 5 } else { 4 };
    let current = form();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if sending() {
            return;
        }

        let current = form();
        if let Some(field) = current.missing_field(source) {
            toasts.error(missing_field_message(lang, field), None);
            return;
        }

        sending.set(true);
        spawn(async move {
            let outcome = api::submit_lead(source, current).await.ok();
            sending.set(false);

            let (kind, title, body) = notice_for(outcome);
            toasts.push(t(lang, title), body.map(|key| t(lang, key)), kind);
            if outcome == Some(LeadOutcome::Sent) {
                form.set(LeadForm::default());
            }
        });
    };

    rsx! {
        form { class: "lead_form", onsubmit: on_submit,
            div { class: "field",
                label { r#for: "{prefix}_name", {t(lang, "lead.name_label")} }
                input {
                    id: "{prefix}_name",
                    name: "name",
                    required: true,
                    value: "{current.name}",
                    placeholder: t(lang, "lead.name_placeholder"),
                    oninput: move |e| form.with_mut(|f| f.name = e.value()),
                }
            }
            div { class: "field",
                label { r#for: "{prefix}_phone", {t(lang, "lead.phone_label")} }
                input {
                    id: "{prefix}_phone",
                    name: "phone",
                    r#type: "tel",
                    required: true,
                    value: "{current.phone}",
                    placeholder: t(lang, "lead.phone_placeholder"),
                    oninput: move |e| form.with_mut(|f| f.phone = e.value()),
                }
            }
            div { class: "field",
                label { r#for: "{prefix}_email", {t(lang, "lead.email_label")} }
                input {
                    id: "{prefix}_email",
                    name: "email",
                    r#type: "email",
                    value: "{current.email}",
                    placeholder: t(lang, "lead.email_placeholder"),
                    oninput: move |e| form.with_mut(|f| f.email = e.value()),
                }
            }
            div { class: "field",
                label { r#for: "{prefix}_message", "{message_label}" }
                textarea {
                    id: "{prefix}_message",
                    name: "message",
                    required: source.requires_message(),
                    rows: "{rows}",
                    value: "{current.message}",
                    placeholder: t(lang, "lead.message_placeholder"),
                    oninput: move |e| form.with_mut(|f| f.message = e.value()),
                }
            }
            button {
                class: "btn primary wide",
                r#type: "submit",
                disabled: sending(),
                if sending() {
                    {t(lang, "lead.sending")}
                } else {
                    {t(lang, "lead.submit")}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::types::LeadField;

    #[test]
    fn each_outcome_maps_to_its_own_message() {
        let titles: Vec<&str> = [
            Some(LeadOutcome::Sent),
            Some(LeadOutcome::NotConfigured),
            Some(LeadOutcome::Rejected),
            None,
        ]
        .into_iter()
        .map(|o| notice_for(o).1)
        .collect();
        assert_eq!(
            titles,
            ["lead.success", "lead.key_missing", "lead.error", "lead.network_error"]
        );
    }

    #[test]
    fn relay_outage_reads_as_network_error() {
        assert_eq!(notice_for(Some(LeadOutcome::Unreachable)).1, "lead.network_error");
    }

    #[test]
    fn only_success_is_not_an_error() {
        assert!(notice_for(Some(LeadOutcome::Sent)).0 == ToastKind::Success);
        assert!(notice_for(Some(LeadOutcome::Rejected)).0 == ToastKind::Error);
    }

    #[test]
    fn missing_field_message_names_the_field() {
        assert_eq!(missing_field_message(Lang::Ru, LeadField::Phone), "Заполните поле «Телефон»");
        assert_eq!(missing_field_message(Lang::En, LeadField::Message), "Please fill in “Message”");
    }

    #[test]
    fn every_message_key_is_translated() {
        for outcome in [
            Some(LeadOutcome::Sent),
            Some(LeadOutcome::NotConfigured),
            Some(LeadOutcome::Rejected),
            Some(LeadOutcome::Unreachable),
            None,
        ] {
            let (_, title, body) = notice_for(outcome);
            for lang in Lang::ALL {
                assert_ne!(t(lang, title), title);
                if let Some(body) = body {
                    assert_ne!(t(lang, body), body);
                }
            }
        }
    }
}
