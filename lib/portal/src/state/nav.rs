//! Navigation state, stored at `nav/route`.

use std::collections::BTreeMap;

use eduva_derive::state;
use serde::{Deserialize, Serialize};

/// The recognized route the UI is currently on. Written by the
/// navigation handler after layout metadata has been published, so a
/// subscriber on this path always sees heading and breadcrumbs for the
/// same URL already in place.
#[state("nav/route")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteState {
    pub url: String,
    pub page: String,
    pub params: BTreeMap<String, String>,
}
