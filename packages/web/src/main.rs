use dioxus::prelude::*;
use std::env;

use views::{Contact, Home, NotFound, Works};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/works")]
    Works {},
    #[route("/contact")]
    Contact {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    log_runtime_config();

    #[cfg(feature = "server")]
    {
        init_tracing();
        init_server_state();
    }

    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let mode = env::var("APP_MODE").unwrap_or_else(|_| "production".to_string());

    eprintln!("startup: IP={ip} PORT={port} APP_MODE={mode}");

    if !mode.eq_ignore_ascii_case("local") {
        log_missing_envs("leads", &["WEB3FORMS_KEY"]);
    }
}

fn log_missing_envs(group: &str, keys: &[&str]) {
    let missing: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|key| env::var(key).map(|v| v.trim().is_empty()).unwrap_or(true))
        .collect();
    if missing.is_empty() {
        return;
    }

    eprintln!(
        "startup: WARNING missing {group} envs: {}",
        missing.join(", ")
    );
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // dioxus may already have installed a subscriber in dev mode
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(feature = "server")]
fn init_server_state() {
    use api::config::{load_dotenv, AppConfig};
    use api::state::AppState;
    use std::sync::Arc;

    load_dotenv();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("startup: invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    match AppState::from_config(config) {
        Ok(state) => AppState::set_global(Arc::new(state)),
        Err(e) => {
            eprintln!("startup: failed to build server state: {e:#}");
            std::process::exit(1);
        }
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SiteTheme {}
        ui::I18nProvider {
            ui::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Header, routed page and footer around the web-specific `Route` enum.
#[component]
fn SiteLayout() -> Element {
    let lang = ui::use_lang()();
    let mut menu_open = use_signal(|| false);

    let links = [
        (Route::Home {}, "nav.home"),
        (Route::Works {}, "nav.works"),
        (Route::Contact {}, "nav.contact"),
    ];
    let footer_nav: Vec<(String, String)> = links
        .iter()
        .map(|(route, key)| (route.to_string(), ui::t(lang, key)))
        .collect();

    rsx! {
        header { class: "site_header",
            div { class: "container header_inner",
                Link { class: "brand", to: Route::Home {},
                    span { class: "brand_mark" }
                    span { class: "brand_name", {ui::BRAND} }
                }

                nav { class: if menu_open() { "nav_links open" } else { "nav_links" },
                    for (route, key) in links.iter().cloned() {
                        Link {
                            key: "{key}",
                            class: "nav_link",
                            active_class: "active",
                            to: route,
                            onclick: move |_| menu_open.set(false),
                            {ui::t(lang, key)}
                        }
                    }
                    ui::LanguageSwitcher {}
                    Link {
                        class: "btn primary nav_cta",
                        to: Route::Contact {},
                        onclick: move |_| menu_open.set(false),
                        {ui::t(lang, "nav.cta")}
                    }
                }

                button {
                    class: "menu_toggle",
                    "aria-label": ui::t(lang, "nav.toggle_menu"),
                    "aria-expanded": if menu_open() { "true" } else { "false" },
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() { "✕" } else { "☰" }
                }
            }
        }
        main { class: "route_view", Outlet::<Route> {} }
        ui::SiteFooter { nav: footer_nav }
    }
}
