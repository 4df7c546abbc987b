//! Attribute macros for the portal's state and request definitions.
//!
//! - `#[state("path")]` — a struct stored in the state tree
//! - `#[request("path")]` — an intent payload
//!
//! Both emit `impl Name { pub const PATH: &'static str = "the/path"; }` and
//! fill in missing `Debug`/`Clone` derives; `#[state]` also adds `PartialEq`,
//! since state diffs compare old and new values.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod expand;

/// Declare a state-tree struct.
///
/// ```ignore
/// #[state("pages/schools/list")]
/// pub struct SchoolListState {
///     pub phase: LoadPhase,
///     pub rows: Vec<School>,
/// }
/// ```
#[proc_macro_attribute]
pub fn state(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as syn::ItemStruct);
    expand::expand(attr.into(), item, expand::Kind::State)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Declare an intent payload struct.
///
/// ```ignore
/// #[request("nav/goto")]
/// pub struct NavigateReq {
///     pub url: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn request(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as syn::ItemStruct);
    expand::expand(attr.into(), item, expand::Kind::Request)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
