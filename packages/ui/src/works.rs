use crate::{t, t_args, t_or, Lang};
use api::portfolio::{distinct_years, PortfolioState, StatusCounts, ViewMode, YearFilter};
use api::types::{Project, ProjectStatus};
use dioxus::prelude::*;

const WORKS_CSS: Asset = asset!("/assets/styling/works.css");

fn status_label(lang: Lang, status: ProjectStatus) -> String {
    t(lang, &format!("works.status.{}", status.i18n_key()))
}

fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "badge status status_completed",
        ProjectStatus::InProgress => "badge status status_in_progress",
        ProjectStatus::Planned => "badge status status_planned",
    }
}

fn status_icon(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "✓",
        ProjectStatus::InProgress => "◷",
        ProjectStatus::Planned => "▦",
    }
}

// Catalog text goes through the translator with the catalog literal as the
// fallback, the same way in grid, table and dialog.

fn client_text(lang: Lang, project: &Project) -> String {
    t_or(lang, &format!("works.items.{}.client", project.id), &project.client)
}

fn description_text(lang: Lang, project: &Project) -> String {
    t_or(lang, &format!("works.items.{}.description", project.id), &project.description)
}

fn work_type_texts(lang: Lang, project: &Project) -> Vec<String> {
    project
        .work_types
        .iter()
        .enumerate()
        .map(|(i, raw)| t_or(lang, &format!("works.items.{}.work_types.{i}", project.id), raw))
        .collect()
}

#[component]
pub fn OurWorksPage() -> Element {
    let lang = crate::use_lang()();
    let catalog = api::catalog::projects();
    let mut state = use_signal(PortfolioState::default);

    let years = use_hook(|| distinct_years(catalog));
    let counts = use_hook(|| StatusCounts::from_catalog(catalog));

    let snapshot = state();
    let visible = snapshot.visible(catalog);
    let selected = snapshot.selected(catalog).cloned();
    let year_value = snapshot.filter.year.value().to_string();
    let count = visible.len().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: WORKS_CSS }

        section { class: "page_banner",
            div { class: "container",
                h1 { {t(lang, "works.header.title")} }
                p { {t(lang, "works.header.subtitle")} }
            }
        }

        section { class: "filters",
            div { class: "container filters_row",
                input {
                    class: "input",
                    r#type: "search",
                    name: "search",
                    value: "{snapshot.filter.search_term}",
                    placeholder: t(lang, "works.search_placeholder"),
                    oninput: move |e| state.with_mut(|s| s.set_search_term(e.value())),
                }
                select {
                    class: "input",
                    name: "year",
                    value: "{year_value}",
                    onchange: move |e| state.with_mut(|s| s.set_year(YearFilter::from_value(&e.value()))),
                    option { value: YearFilter::ALL_VALUE, selected: year_value == YearFilter::ALL_VALUE,
                        {t(lang, "works.all_years")}
                    }
                    for year in years.iter().copied() {
                        option { key: "{year}", value: "{year}", selected: year_value == year.to_string(), "{year}" }
                    }
                }
            }
        }

        section { class: "works",
            div { class: "container",
                if visible.is_empty() {
                    div { class: "empty_state",
                        div { class: "empty_icon", "▦" }
                        h3 { {t(lang, "works.empty.title")} }
                        p { class: "hint", {t(lang, "works.empty.hint")} }
                    }
                } else {
                    div { class: "results_bar",
                        div { class: "result_count",
                            {t_args(lang, "works.found", &[("count", count.as_str())])}
                        }
                        ViewToggle {
                            mode: snapshot.view_mode,
                            on_change: move |mode| state.with_mut(|s| s.set_view_mode(mode)),
                        }
                    }
                    {match snapshot.view_mode {
                        ViewMode::Grid => rsx! {
                            div { class: "project_grid",
                                for project in visible.iter() {
                                    ProjectCard {
                                        key: "{project.id}",
                                        project: (*project).clone(),
                                        on_open: move |id| state.with_mut(|s| s.open(id)),
                                    }
                                }
                            }
                        },
                        ViewMode::List => rsx! {
                            table { class: "project_table",
                                thead {
                                    tr {
                                        th { {t(lang, "works.table.client")} }
                                        th { {t(lang, "works.work_types")} }
                                        th { {t(lang, "works.table.year")} }
                                        th { {t(lang, "works.table.status")} }
                                    }
                                }
                                tbody {
                                    for project in visible.iter() {
                                        ProjectRow {
                                            key: "{project.id}",
                                            project: (*project).clone(),
                                            on_open: move |id| state.with_mut(|s| s.open(id)),
                                        }
                                    }
                                }
                            }
                        },
                    }}
                }
            }
        }

        StatsSection { counts }

        if let Some(project) = selected {
            ProjectDialog {
                project,
                on_close: move |_| state.with_mut(|s| s.dismiss()),
            }
        }
    }
}

#[component]
fn ViewToggle(mode: ViewMode, on_change: EventHandler<ViewMode>) -> Element {
    let lang = crate::use_lang()();
    rsx! {
        div { class: "view_toggle", role: "group",
            for (option, label_key, glyph) in [(ViewMode::Grid, "works.view.grid", "▦"), (ViewMode::List, "works.view.list", "☰")] {
                button {
                    key: "{option.as_str()}",
                    class: if option == mode { "toggle_btn active" } else { "toggle_btn" },
                    "aria-label": t(lang, label_key),
                    "aria-pressed": if option == mode { "true" } else { "false" },
                    "data-view": option.as_str(),
                    onclick: move |_| on_change.call(option),
                    "{glyph}"
                }
            }
        }
    }
}

#[component]
fn StatusBadge(status: ProjectStatus) -> Element {
    let lang = crate::use_lang()();
    rsx! {
        span { class: status_class(status),
            span { class: "status_icon", {status_icon(status)} }
            {status_label(lang, status)}
        }
    }
}

#[component]
fn WorkTypeBadges(project: Project) -> Element {
    let lang = crate::use_lang()();
    rsx! {
        div { class: "tags",
            for (i, label) in work_type_texts(lang, &project).into_iter().enumerate() {
                span { key: "{i}", class: "badge secondary", "{label}" }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, on_open: EventHandler<u32>) -> Element {
    let lang = crate::use_lang()();
    let id = project.id;
    rsx! {
        div { class: "card project_card", onclick: move |_| on_open.call(id),
            div { class: "card_top",
                StatusBadge { status: project.status }
                span { class: "badge outline", "{project.year}" }
            }
            h3 { {client_text(lang, &project)} }
            div { class: "card_section_title", {format!("{}:", t(lang, "works.work_types"))} }
            WorkTypeBadges { project: project.clone() }
            p { class: "summary", {description_text(lang, &project)} }
        }
    }
}

#[component]
fn ProjectRow(project: Project, on_open: EventHandler<u32>) -> Element {
    let lang = crate::use_lang()();
    let id = project.id;
    rsx! {
        tr { class: "clickable", onclick: move |_| on_open.call(id),
            td { class: "strong", {client_text(lang, &project)} }
            td { WorkTypeBadges { project: project.clone() } }
            td { "{project.year}" }
            td { StatusBadge { status: project.status } }
        }
    }
}

#[component]
fn ProjectDialog(project: Project, on_close: EventHandler<()>) -> Element {
    let lang = crate::use_lang()();
    rsx! {
        div {
            class: "dialog_backdrop",
            tabindex: "-1",
            onmounted: move |e| async move {
                let _ = e.set_focus(true).await;
            },
            onclick: move |_| on_close.call(()),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "dialog",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),
                button {
                    class: "dialog_close",
                    "aria-label": t(lang, "common.close"),
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                h2 { {client_text(lang, &project)} }
                p { class: "hint",
                    {format!("{} • {}", status_label(lang, project.status), project.year)}
                }
                div { class: "card_section_title", {t(lang, "works.work_types")} }
                WorkTypeBadges { project: project.clone() }
                p { class: "summary", {description_text(lang, &project)} }
            }
        }
    }
}

#[component]
fn StatsSection(counts: StatusCounts) -> Element {
    let lang = crate::use_lang()();
    rsx! {
        section { class: "stats_section",
            div { class: "container",
                h2 { {t(lang, "works.stats.title")} }
                div { class: "stats_grid",
                    for status in ProjectStatus::ALL {
                        div { key: "{status.as_str()}", class: "stat",
                            div { class: "stat_icon {status_class(status)}", {status_icon(status)} }
                            div { class: "stat_value", "{counts.get(status)}" }
                            div { class: "stat_label", {t(lang, &format!("works.stats.{}", status.i18n_key()))} }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        api::catalog::project(1).cloned().expect("catalog has project 1")
    }

    #[test]
    fn russian_uses_catalog_text() {
        let p = sample();
        assert_eq!(client_text(Lang::Ru, &p), p.client);
        assert_eq!(description_text(Lang::Ru, &p), p.description);
        assert_eq!(work_type_texts(Lang::Ru, &p), p.work_types);
    }

    #[test]
    fn english_translates_tags_by_index() {
        let p = sample();
        assert_eq!(
            work_type_texts(Lang::En, &p),
            vec!["Electrical works and telecom", "Fibre-optic lines"]
        );
        // Client names have no English entry and keep the catalog spelling.
        assert_eq!(client_text(Lang::En, &p), p.client);
    }

    #[test]
    fn kazakh_falls_back_to_catalog_text() {
        let p = sample();
        assert_eq!(description_text(Lang::Kz, &p), p.description);
    }

    #[test]
    fn status_labels() {
        assert_eq!(status_label(Lang::Ru, ProjectStatus::InProgress), "В процессе");
        assert_eq!(status_label(Lang::En, ProjectStatus::Planned), "Planned");
        assert_ne!(status_class(ProjectStatus::Completed), status_class(ProjectStatus::Planned));
    }
}
