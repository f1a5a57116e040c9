//! Filtering, search and view state for the works page.
//!
//! Everything here is pure: the catalog comes in as a slice and results
//! borrow from it. The UI keeps a [`PortfolioState`] in a signal and
//! re-derives the visible list from it on every change.

use crate::types::{Project, ProjectStatus};
use std::collections::BTreeSet;

/// Year selector value. `All` is the `"all"` option; any other value is
/// compared against the project's year rendered as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum YearFilter {
    #[default]
    All,
    Year(String),
}

impl YearFilter {
    pub const ALL_VALUE: &'static str = "all";

    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            YearFilter::All
        } else {
            YearFilter::Year(value.to_string())
        }
    }

    pub fn year(year: i32) -> Self {
        YearFilter::Year(year.to_string())
    }

    /// Value for the `<select>` element.
    pub fn value(&self) -> &str {
        match self {
            YearFilter::All => Self::ALL_VALUE,
            YearFilter::Year(value) => value,
        }
    }

    pub fn accepts(&self, year: i32) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(value) => year.to_string() == *value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub search_term: String,
    pub year: YearFilter,
}

impl ProjectFilter {
    pub fn new(search_term: impl Into<String>, year: YearFilter) -> Self {
        Self {
            search_term: search_term.into(),
            year,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.year.accepts(project.year) && text_matches(project, &self.search_term.to_lowercase())
    }
}

/// `needle` must already be lowercase.
fn text_matches(project: &Project, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    project.client.to_lowercase().contains(needle)
        || project
            .work_types
            .iter()
            .any(|t| t.to_lowercase().contains(needle))
        || project.description.to_lowercase().contains(needle)
}

/// Newest first. `sort_by` is stable, so projects from the same year keep
/// their catalog order.
pub fn sorted_by_year(catalog: &[Project]) -> Vec<&Project> {
    let mut sorted: Vec<&Project> = catalog.iter().collect();
    sorted.sort_by(|a, b| b.year.cmp(&a.year));
    sorted
}

pub fn filter_projects<'a>(catalog: &'a [Project], filter: &ProjectFilter) -> Vec<&'a Project> {
    let needle = filter.search_term.to_lowercase();
    sorted_by_year(catalog)
        .into_iter()
        .filter(|p| filter.year.accepts(p.year) && text_matches(p, &needle))
        .collect()
}

/// Distinct years over the whole catalog, newest first. Feeds the year
/// selector, so it ignores the active filter.
pub fn distinct_years(catalog: &[Project]) -> Vec<i32> {
    let years: BTreeSet<i32> = catalog.iter().map(|p| p.year).collect();
    years.into_iter().rev().collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub completed: usize,
    pub in_progress: usize,
    pub planned: usize,
}

impl StatusCounts {
    pub fn from_catalog(catalog: &[Project]) -> Self {
        let mut counts = StatusCounts::default();
        for project in catalog {
            match project.status {
                ProjectStatus::Completed => counts.completed += 1,
                ProjectStatus::InProgress => counts.in_progress += 1,
                ProjectStatus::Planned => counts.planned += 1,
            }
        }
        counts
    }

    pub fn get(&self, status: ProjectStatus) -> usize {
        match status {
            ProjectStatus::Completed => self.completed,
            ProjectStatus::InProgress => self.in_progress,
            ProjectStatus::Planned => self.planned,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

/// Detail dialog. Holds the id of the bound record rather than a copy, so
/// the dialog always renders what the catalog says.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailView {
    #[default]
    Closed,
    Open(u32),
}

impl DetailView {
    /// Opens on `id`, or rebinds if already open.
    pub fn select(&mut self, id: u32) {
        *self = DetailView::Open(id);
    }

    pub fn dismiss(&mut self) {
        *self = DetailView::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailView::Open(_))
    }

    pub fn selected_id(&self) -> Option<u32> {
        match self {
            DetailView::Closed => None,
            DetailView::Open(id) => Some(*id),
        }
    }
}

/// Everything the works page remembers between renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioState {
    pub filter: ProjectFilter,
    pub view_mode: ViewMode,
    pub detail: DetailView,
}

impl PortfolioState {
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub fn set_year(&mut self, year: YearFilter) {
        self.filter.year = year;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn open(&mut self, id: u32) {
        self.detail.select(id);
    }

    pub fn dismiss(&mut self) {
        self.detail.dismiss();
    }

    pub fn visible<'a>(&self, catalog: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(catalog, &self.filter)
    }

    /// Record bound to the open dialog. Resolved against the full catalog so
    /// the dialog survives filter changes that hide its record.
    pub fn selected<'a>(&self, catalog: &'a [Project]) -> Option<&'a Project> {
        let id = self.detail.selected_id()?;
        catalog.iter().find(|p| p.id == id)
    }
}
