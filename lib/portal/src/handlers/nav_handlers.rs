//! Navigation handling.
//!
//! One synchronous path from URL to rendered chrome: recognize, derive
//! metadata, publish layout stores, then write `nav/route`. By the time
//! anything observes the route state, heading, breadcrumbs, and title
//! already describe the same URL.

use eduva_router::{derive_metadata, recognize};
use eduva_signals::StateStore;

use crate::handlers::PortalContext;
use crate::request::NavigateReq;
use crate::routes::pages;
use crate::state::RouteState;

/// Handle `nav/goto`.
pub async fn handle_navigate(req: &NavigateReq, store: &StateStore, ctx: &PortalContext) {
    apply_navigation(&req.url, store, ctx);
}

/// Run the full metadata pass for `url`. Also called eagerly from
/// `app/initialize` so the first paint has real chrome, and after
/// login/logout redirects.
pub fn apply_navigation(url: &str, store: &StateStore, ctx: &PortalContext) {
    let snapshot = match recognize(&ctx.routes, url) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::warn!(url, %err, "navigation ignored");
            return;
        }
    };
    let meta = derive_metadata(&snapshot);
    ctx.layout.apply_metadata(&meta);
    let page = snapshot.page().unwrap_or(pages::NOT_FOUND).to_string();
    tracing::debug!(url = %snapshot.url, page, "navigated");
    store.set(
        RouteState::PATH,
        RouteState {
            url: snapshot.url,
            page,
            params: snapshot.params,
        },
    );
}
