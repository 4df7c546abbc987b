//! Invoice page state, stored at `pages/invoices/list`.

use eduva_derive::state;
use serde::{Deserialize, Serialize};

use crate::model::Invoice;

#[state("pages/invoices/list")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceList {
    pub rows: Vec<Invoice>,
    pub count: i64,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
