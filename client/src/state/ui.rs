//! Local UI chrome state (theme, dashboard filter).
//!
//! DESIGN
//! ======
//! Lab panels keep their own state; only presentation concerns shared by the
//! dashboard and the page chrome live here.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use labs::catalog::{Category, LABS, LabInfo};

/// UI state for theme and dashboard filtering.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// `None` shows every category.
    pub category_filter: Option<Category>,
    pub search: String,
}

impl UiState {
    /// Labs visible on the dashboard under the current filter and search text.
    ///
    /// Search matches title or blurb, case-insensitively.
    #[must_use]
    pub fn visible_labs(&self) -> Vec<&'static LabInfo> {
        let needle = self.search.trim().to_lowercase();
        LABS.iter()
            .filter(|lab| self.category_filter.is_none_or(|c| lab.category == c))
            .filter(|lab| {
                needle.is_empty()
                    || lab.title.to_lowercase().contains(&needle)
                    || lab.blurb.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

/// Categories in first-appearance order, for the filter chips.
#[must_use]
pub fn categories() -> Vec<Category> {
    let mut out: Vec<Category> = Vec::new();
    for lab in LABS {
        if !out.contains(&lab.category) {
            out.push(lab.category);
        }
    }
    out
}
