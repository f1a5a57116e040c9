//! Company contact details shared by the header, footer and contact pages.

pub const BRAND: &str = "Asseni";
pub const PHONE: &str = "+7 (701) 122-24-77";
pub const EMAIL: &str = "assenitoo@mail.ru";
pub const FOUNDED: i32 = 2014;

/// `tel:` link for [`PHONE`].
pub fn phone_href() -> String {
    let digits: String = PHONE
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

/// `mailto:` link for [`EMAIL`] with a prefilled subject.
pub fn mailto_href(subject: &str) -> String {
    format!("mailto:{EMAIL}?subject={}", urlencoding::encode(subject))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_href_keeps_only_dialable_chars() {
        assert_eq!(phone_href(), "tel:+77011222477");
    }

    #[test]
    fn mailto_encodes_subject() {
        assert_eq!(
            mailto_href("Request a call"),
            "mailto:assenitoo@mail.ru?subject=Request%20a%20call"
        );
        assert!(mailto_href("Заявка").starts_with("mailto:assenitoo@mail.ru?subject=%D0%97"));
    }
}
