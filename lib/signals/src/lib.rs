//! Reactive kernel of the EDUVA portal.
//!
//! Rust owns the portal's state, navigation, and validation; rendering
//! shells (web/desktop) subscribe and raise intents. Two complementary
//! state mechanisms:
//!
//! - **Signals** — typed single-value cells with versioning and memoized
//!   [`Computed`] derivations. The layout stores (heading, breadcrumb trail,
//!   document title, theme) are signals: one writer, many readers, writes
//!   pushed to subscribers before `set` returns.
//! - **State tree** — a path-addressed store for page view models and the
//!   session, with pattern subscriptions. Paths use `/` separators:
//!   `session`, `nav/route`, `pages/schools/list`, `lessons/job`.
//!
//! # Pattern matching
//!
//! Subscriptions, intent handlers, and i18n resolvers share one pattern
//! language:
//! - exact: `nav/route`
//! - one segment: `pages/+/list`
//! - remainder: `layout/#`, `#`
//!
//! # Intents
//!
//! UI events are typed payloads emitted at a path and routed to async
//! handlers ([`Engine::on`] / [`Engine::emit`]); handlers read and write
//! the state tree and the layout signals.
//!
//! ```ignore
//! use eduva_signals::Engine;
//!
//! let engine = Engine::new();
//! engine.on("nav/goto", |_, payload, store| async move {
//!     // recognize the URL, derive metadata, publish the route state
//! });
//! engine.subscribe("nav/#", |path, _| println!("{} changed", path));
//! engine.emit("nav/goto", NavigateReq { url: "/schools".into() }).await;
//! ```

pub mod dispatch;
pub mod engine;
pub mod i18n;
pub mod signal;
pub mod store;
pub mod trie;
pub mod value;

pub use dispatch::{Dispatcher, HandlerFuture, IntentPayload};
pub use engine::Engine;
pub use i18n::{I18nHandler, I18nStore, QueryParams};
pub use signal::{Computed, Signal};
pub use store::{ChangeHandler, StateStore};
pub use value::{StateValue, SubscriptionId};
