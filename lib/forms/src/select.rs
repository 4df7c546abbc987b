//! Select control with an optional search box.
//!
//! With few options the full list renders as-is; past
//! [`SEARCH_THRESHOLD`] a search input appears and filters the list on a
//! case-insensitive label substring.

use serde::{Deserialize, Serialize};

/// Option count above which the search box appears.
pub const SEARCH_THRESHOLD: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub value: String,
    pub label: String,
}

impl OptionItem {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectControl {
    options: Vec<OptionItem>,
    query: String,
    selected: Option<String>,
}

impl SelectControl {
    pub fn new(options: Vec<OptionItem>) -> Self {
        Self {
            options,
            query: String::new(),
            selected: None,
        }
    }

    /// Whether the search box is shown for this option count.
    pub fn searchable(&self) -> bool {
        self.options.len() > SEARCH_THRESHOLD
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Options currently visible. The filter only applies when the control
    /// is searchable and a query was typed.
    pub fn visible(&self) -> Vec<&OptionItem> {
        if !self.searchable() || self.query.is_empty() {
            return self.options.iter().collect();
        }
        let needle = self.query.to_lowercase();
        self.options
            .iter()
            .filter(|o| o.label.to_lowercase().contains(&needle))
            .collect()
    }

    /// Select by value; unknown values clear the selection.
    pub fn select(&mut self, value: &str) {
        self.selected = self
            .options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.value.clone());
    }

    pub fn selected(&self) -> Option<&OptionItem> {
        let value = self.selected.as_deref()?;
        self.options.iter().find(|o| o.value == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grades() -> Vec<OptionItem> {
        (1..=12)
            .map(|g| OptionItem::new(&format!("grade-{g}"), &format!("Khối {g}")))
            .collect()
    }

    #[test]
    fn few_options_are_not_searchable() {
        let select = SelectControl::new(grades().into_iter().take(7).collect());
        assert!(!select.searchable());
    }

    #[test]
    fn more_than_seven_options_enable_search() {
        let select = SelectControl::new(grades().into_iter().take(8).collect());
        assert!(select.searchable());
    }

    #[test]
    fn filter_is_case_insensitive_label_substring() {
        let mut select = SelectControl::new(grades());
        select.set_query("khối 1");
        let labels: Vec<_> = select.visible().iter().map(|o| o.label.as_str()).collect();
        // "Khối 1" matches 1, 10, 11, 12.
        assert_eq!(labels, vec!["Khối 1", "Khối 10", "Khối 11", "Khối 12"]);
    }

    #[test]
    fn empty_query_shows_everything() {
        let select = SelectControl::new(grades());
        assert_eq!(select.visible().len(), 12);
    }

    #[test]
    fn below_threshold_the_query_is_ignored() {
        let mut select = SelectControl::new(grades().into_iter().take(5).collect());
        select.set_query("không khớp gì cả");
        assert_eq!(select.visible().len(), 5);
    }

    #[test]
    fn unmatched_query_yields_an_empty_list() {
        let mut select = SelectControl::new(grades());
        select.set_query("trung học");
        assert!(select.visible().is_empty());
    }

    #[test]
    fn selection_tracks_known_values_only() {
        let mut select = SelectControl::new(grades());
        select.select("grade-3");
        assert_eq!(select.selected().map(|o| o.label.as_str()), Some("Khối 3"));

        select.select("grade-99");
        assert!(select.selected().is_none());
    }
}
