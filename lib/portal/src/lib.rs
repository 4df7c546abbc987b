//! The EDUVA admin portal, headless.
//!
//! Everything the SPA did in the browser lives here: route recognition
//! and page metadata, form validation, session and page state, and the
//! intent handlers that talk to the backend. Rendering shells subscribe
//! to state paths and raise intents; they never own logic.
//!
//! [`Portal`] bundles the engine with the portal's context and wires
//! every handler at construction:
//!
//! ```ignore
//! use eduva_portal::Portal;
//!
//! let portal = Portal::connect("https://api.eduva.vn");
//! portal.initialize().await;
//! portal
//!     .engine()
//!     .emit("nav/goto", eduva_portal::request::NavigateReq { url: "/schools".into() })
//!     .await;
//! ```
//!
//! State paths, intent paths, and their payload types are listed in
//! [`state`] and [`request`]; the JSON forms hosts see are in [`bridge`].

pub mod bridge;
pub mod handlers;
pub mod i18n;
pub mod layout;
pub mod model;
pub mod request;
pub mod routes;
pub mod services;
pub mod state;

use std::sync::Arc;

use eduva_client::{ApiClient, SharedToken};
use eduva_router::RouteTable;
use eduva_signals::{Engine, I18nStore};

pub use handlers::{register_handlers, PortalContext};

use layout::LayoutStores;
use services::{HttpApi, MemoryApi, PortalApi};

/// One running portal: an engine with all handlers registered.
pub struct Portal {
    engine: Engine,
    ctx: Arc<PortalContext>,
}

impl Portal {
    /// Portal against the real backend at `base_url`.
    ///
    /// The bearer token starts unset; a successful `auth/login` fills it
    /// and every later request carries it.
    pub fn connect(base_url: &str) -> Self {
        let token = Arc::new(SharedToken::new());
        let client = ApiClient::new(base_url).with_token_source(token.clone());
        Self::with_api(Arc::new(HttpApi::new(client)), token)
    }

    /// Portal against the seeded in-memory backend. Used by the demo
    /// host's offline mode and throughout the integration tests.
    pub fn offline() -> Self {
        Self::with_api(Arc::new(MemoryApi::new()), Arc::new(SharedToken::new()))
    }

    /// Portal against any backend implementation.
    pub fn with_api(api: Arc<dyn PortalApi>, token: Arc<SharedToken>) -> Self {
        let engine = Engine::new();
        let i18n = Arc::new(I18nStore::new(i18n::DEFAULT_LOCALE));
        i18n::register_all(&i18n);
        let ctx = Arc::new(PortalContext {
            api,
            routes: routes::route_table(),
            layout: Arc::new(LayoutStores::new()),
            i18n,
            token,
        });
        register_handlers(&engine, ctx.clone());
        Self { engine, ctx }
    }

    /// Seed baseline state and land on `/`. Call once before the first
    /// render; the snapshot is complete afterwards.
    pub async fn initialize(&self) {
        self.engine
            .emit(request::InitializeReq::PATH, request::InitializeReq)
            .await;
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn layout(&self) -> &LayoutStores {
        &self.ctx.layout
    }

    pub fn i18n(&self) -> &I18nStore {
        &self.ctx.i18n
    }

    pub fn routes(&self) -> &RouteTable {
        &self.ctx.routes
    }

    pub fn token(&self) -> &SharedToken {
        &self.ctx.token
    }

    /// JSON snapshot of the whole portal, see [`bridge::snapshot_json`].
    pub fn snapshot_json(&self) -> serde_json::Value {
        bridge::snapshot_json(&self.engine, &self.ctx.layout)
    }
}
