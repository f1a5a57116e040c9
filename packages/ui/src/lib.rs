//! This crate contains all shared UI for the workspace.

mod company;
pub use company::{mailto_href, phone_href, BRAND, EMAIL, PHONE};

mod hero;
pub use hero::Hero;

mod landing;
pub use landing::LandingPage;

mod works;
pub use works::OurWorksPage;

mod contact;
pub use contact::ContactPage;

mod lead_form;
pub use lead_form::LeadFormFields;

mod footer;
pub use footer::SiteFooter;

mod not_found;
pub use not_found::NotFoundPage;

mod theme;
pub use theme::SiteTheme;

mod toast;
pub use toast::{use_toasts, ToastProvider};

mod i18n;
pub use i18n::{set_lang, t, t_args, t_or, use_lang, I18nProvider, LanguageSwitcher, Lang};
