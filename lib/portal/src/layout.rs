//! Chrome stores the shell binds to: heading, breadcrumb trail, tab
//! title, theme, footer year.
//!
//! These are signal-backed rather than path-store entries because the
//! shell widgets each watch exactly one of them; page states stay in
//! the path store where the JSON bridge snapshots them.

use chrono::{Datelike, Utc};
use eduva_router::{BreadcrumbEntry, PageMetadata, DEFAULT_TITLE, HOME_LABEL};
use eduva_signals::{Computed, Signal};

use crate::state::Theme;

pub struct LayoutStores {
    pub heading: Signal<String>,
    pub breadcrumbs: Signal<Vec<BreadcrumbEntry>>,
    pub title: Signal<String>,
    pub theme: Signal<Theme>,
    pub year: Signal<i32>,
    show_date: Computed<bool>,
}

impl LayoutStores {
    pub fn new() -> Self {
        let heading = Signal::new(String::new());
        let breadcrumbs = Signal::new(vec![BreadcrumbEntry::home()]);
        let title = Signal::new(DEFAULT_TITLE.to_string());
        // The trail always starts with the fixed home entry, so the
        // dashboard header date shows when nothing follows it, or when
        // the only crumb after it is the dashboard's own.
        let show_date = Computed::from_signal(&breadcrumbs, |trail: &Vec<BreadcrumbEntry>| {
            trail.len() <= 1 || (trail.len() == 2 && trail[1].label == HOME_LABEL)
        });
        Self {
            heading,
            breadcrumbs,
            title,
            theme: Signal::new(Theme::Light),
            year: Signal::new(Utc::now().year()),
            show_date,
        }
    }

    /// Publish one page's resolved metadata. Heading is written first,
    /// then the trail, then the tab title, so a subscriber on any of
    /// the three sees the earlier ones already in place.
    pub fn apply_metadata(&self, meta: &PageMetadata) {
        self.heading.set(meta.heading.clone());
        self.breadcrumbs.set(meta.breadcrumbs.clone());
        self.title.set(meta.title.clone());
    }

    pub fn show_date(&self) -> bool {
        self.show_date.get()
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

impl Default for LayoutStores {
    fn default() -> Self {
        Self::new()
    }
}
