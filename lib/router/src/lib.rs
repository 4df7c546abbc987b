//! Eduva router — route table, URL recognition, page metadata.
//!
//! The portal declares its pages as a [`RouteTable`] tree; [`recognize`]
//! turns a URL into an activated [`RouteSnapshot`] chain, and
//! [`derive_metadata`] reduces that chain to what the layout renders:
//! heading, breadcrumb trail, document title, and the show-date flag.
//!
//! # Flow
//!
//! ```ignore
//! use eduva_router::{recognize, derive_metadata, RouteDef, RouteTable};
//!
//! let table = RouteTable::new(vec![
//!     RouteDef::new("", "dashboard").heading("Bảng thống kê"),
//!     RouteDef::new("schools", "schools/list")
//!         .heading("Danh sách trường học")
//!         .breadcrumb("Trường học")
//!         .child(RouteDef::new(":id", "schools/detail").breadcrumb("Chi tiết")),
//!     RouteDef::new("**", "not-found"),
//! ]);
//!
//! let snapshot = recognize(&table, "/schools")?;
//! let meta = derive_metadata(&snapshot);
//! assert_eq!(meta.heading, "Danh sách trường học");
//! ```
//!
//! Recognition is first-match-wins in definition order: `:name` segments
//! capture parameters, empty paths group without consuming, `**` is the
//! not-found fallback. Metadata derivation is pure and infallible; absent
//! route data degrades to documented defaults.

pub mod config;
pub mod metadata;
pub mod recognize;

pub use config::{RouteData, RouteDef, RouteTable};
pub use metadata::{
    derive_metadata, BreadcrumbEntry, PageMetadata, DEFAULT_TITLE, HOME_ICON, HOME_LABEL,
    HOME_LINK, TITLE_SUFFIX,
};
pub use recognize::{recognize, MatchedRoute, RecognizeError, RouteSnapshot};
