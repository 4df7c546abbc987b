//! Declarative route table.
//!
//! Routes form a tree: each node owns a configured path (one or more
//! `/`-separated segments, possibly empty for grouping nodes, `:name` for a
//! parameter, `**` for a catch-all), the page identifier rendered at that
//! node, and display data consumed by the metadata resolver.

use serde::Serialize;

/// Display data attached to a route node.
///
/// All fields are optional; the metadata resolver degrades missing values to
/// defined defaults (empty heading, no breadcrumb entry, default title).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// One node of the route tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteDef {
    /// Configured path: `""`, `"schools"`, `"schools/:id"`, or `"**"`.
    pub path: String,
    /// Page identifier published to `nav/route` when this node is the leaf.
    pub page: String,
    #[serde(flatten)]
    pub data: RouteData,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteDef>,
}

impl RouteDef {
    pub fn new(path: &str, page: &str) -> Self {
        Self {
            path: path.to_string(),
            page: page.to_string(),
            data: RouteData::default(),
            children: Vec::new(),
        }
    }

    pub fn heading(mut self, heading: &str) -> Self {
        self.data.heading = Some(heading.to_string());
        self
    }

    pub fn breadcrumb(mut self, breadcrumb: &str) -> Self {
        self.data.breadcrumb = Some(breadcrumb.to_string());
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.data.title = Some(title.to_string());
        self
    }

    pub fn child(mut self, child: RouteDef) -> Self {
        self.children.push(child);
        self
    }

    /// Configured segments of this node. Empty paths contribute none.
    pub(crate) fn segments(&self) -> Vec<&str> {
        if self.path.is_empty() {
            Vec::new()
        } else {
            self.path.split('/').collect()
        }
    }

    pub(crate) fn is_catch_all(&self) -> bool {
        self.path == "**"
    }
}

/// The full route table. Definition order is match order; a trailing `**`
/// route acts as the not-found fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteTable {
    pub routes: Vec<RouteDef>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDef>) -> Self {
        Self { routes }
    }

    /// Number of nodes in the whole tree, grouping nodes included.
    pub fn node_count(&self) -> usize {
        fn count(defs: &[RouteDef]) -> usize {
            defs.iter().map(|d| 1 + count(&d.children)).sum()
        }
        count(&self.routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RouteTable {
        RouteTable::new(vec![
            RouteDef::new("", "dashboard")
                .heading("Bảng thống kê")
                .title("Bảng thống kê"),
            RouteDef::new("schools", "schools/list")
                .heading("Danh sách trường học")
                .breadcrumb("Trường học")
                .title("Trường học")
                .child(RouteDef::new(":id", "schools/detail").breadcrumb("Chi tiết")),
            RouteDef::new("**", "not-found").heading("Không tìm thấy trang"),
        ])
    }

    #[test]
    fn builder_fills_data() {
        let def = RouteDef::new("teachers", "teachers/list")
            .heading("Giáo viên")
            .breadcrumb("Giáo viên")
            .title("Giáo viên");
        assert_eq!(def.data.heading.as_deref(), Some("Giáo viên"));
        assert_eq!(def.data.breadcrumb.as_deref(), Some("Giáo viên"));
        assert_eq!(def.data.title.as_deref(), Some("Giáo viên"));
        assert!(def.children.is_empty());
    }

    #[test]
    fn segments_split_on_slash() {
        assert!(RouteDef::new("", "dashboard").segments().is_empty());
        assert_eq!(RouteDef::new("schools", "s").segments(), vec!["schools"]);
        assert_eq!(
            RouteDef::new("schools/:id", "s").segments(),
            vec!["schools", ":id"]
        );
    }

    #[test]
    fn catch_all_is_detected() {
        assert!(RouteDef::new("**", "not-found").is_catch_all());
        assert!(!RouteDef::new("schools", "s").is_catch_all());
    }

    #[test]
    fn node_count_walks_children() {
        assert_eq!(sample().node_count(), 4);
    }

    #[test]
    fn serializes_without_empty_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        let dashboard = &json["routes"][0];
        assert_eq!(dashboard["page"], "dashboard");
        assert_eq!(dashboard["heading"], "Bảng thống kê");
        assert!(dashboard.get("breadcrumb").is_none());
        assert!(dashboard.get("children").is_none());

        let schools = &json["routes"][1];
        assert_eq!(schools["children"][0]["path"], ":id");
    }
}
