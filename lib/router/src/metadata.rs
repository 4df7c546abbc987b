//! Page metadata derivation.
//!
//! After every completed navigation (and once eagerly at startup) the
//! navigation handler feeds the fresh [`RouteSnapshot`] through
//! [`derive_metadata`] and publishes the result to the layout stores. The
//! derivation is a pure, synchronous traversal; absent route data degrades
//! to defined defaults and nothing here can fail.

use serde::Serialize;

use crate::recognize::RouteSnapshot;

/// Label of the forced first breadcrumb entry.
pub const HOME_LABEL: &str = "Bảng thống kê";
/// Icon of the forced first breadcrumb entry.
pub const HOME_ICON: &str = "home";
/// Link of the forced first breadcrumb entry.
pub const HOME_LINK: &str = "/";
/// Appended to a route-supplied document title.
pub const TITLE_SUFFIX: &str = " | by EDUVA";
/// Document title when the leaf supplies none.
pub const DEFAULT_TITLE: &str = "EDUVA - Học, Học Nữa, Học Mãi";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbEntry {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub link: String,
}

impl BreadcrumbEntry {
    /// The fixed home entry every trail starts with.
    pub fn home() -> Self {
        Self {
            label: HOME_LABEL.to_string(),
            tooltip: None,
            icon: Some(HOME_ICON.to_string()),
            link: HOME_LINK.to_string(),
        }
    }
}

/// Everything the layout needs for one route, derived in a single pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub heading: String,
    pub breadcrumbs: Vec<BreadcrumbEntry>,
    pub title: String,
    pub show_date: bool,
}

/// Compute heading, breadcrumb trail, document title, and the show-date flag
/// from an activated route chain.
///
/// - Heading: the leaf's `heading`, or `""` when absent.
/// - Breadcrumbs: walking root to leaf, each node's configured path segment
///   extends the running link (`:name` left verbatim); nodes with a
///   `breadcrumb` label append an entry carrying the node's own heading as
///   tooltip. The fixed home entry is prepended to whatever accumulated.
/// - Show-date: true when the route contributed no entry of its own, or only
///   a single entry duplicating the home label.
/// - Title: leaf `title` plus [`TITLE_SUFFIX`], else [`DEFAULT_TITLE`].
pub fn derive_metadata(snapshot: &RouteSnapshot) -> PageMetadata {
    let heading = snapshot
        .leaf()
        .and_then(|leaf| leaf.data.heading.clone())
        .unwrap_or_default();

    let mut link = String::new();
    let mut extra = Vec::new();
    for node in &snapshot.chain {
        if !node.config_path.is_empty() {
            link.push('/');
            link.push_str(&node.config_path);
        }
        if let Some(label) = &node.data.breadcrumb {
            extra.push(BreadcrumbEntry {
                label: label.clone(),
                tooltip: node.data.heading.clone(),
                icon: None,
                link: link.clone(),
            });
        }
    }

    let show_date = extra.is_empty() || (extra.len() == 1 && extra[0].label == HOME_LABEL);

    let mut breadcrumbs = Vec::with_capacity(extra.len() + 1);
    breadcrumbs.push(BreadcrumbEntry::home());
    breadcrumbs.append(&mut extra);

    let title = match snapshot.leaf().and_then(|leaf| leaf.data.title.as_deref()) {
        Some(title) => format!("{title}{TITLE_SUFFIX}"),
        None => DEFAULT_TITLE.to_string(),
    };

    PageMetadata {
        heading,
        breadcrumbs,
        title,
        show_date,
    }
}
