//! Navigation requests.

use eduva_derive::request;
use serde::{Deserialize, Serialize};

/// Navigate to a URL. Recognition, metadata, and `nav/route` all update
/// before the handler returns.
#[request("nav/goto")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateReq {
    pub url: String,
}
