//! App-level handler implementations.

use eduva_signals::StateStore;

use crate::handlers::{nav_handlers, PortalContext};
use crate::request::SetLocaleReq;
use crate::state::{GenerationJob, LocaleState, SessionState, Theme, ThemeState};

/// Handle `app/initialize`. Seeds the baseline state tree and runs the
/// first metadata pass so `/` chrome is live before any navigation.
pub async fn handle_initialize(store: &StateStore, ctx: &PortalContext) {
    store.set(SessionState::PATH, SessionState::anonymous());
    store.set(
        LocaleState::PATH,
        LocaleState {
            locale: ctx.i18n.locale(),
        },
    );
    store.set(
        ThemeState::PATH,
        ThemeState {
            theme: ctx.layout.theme.get(),
        },
    );
    store.set(GenerationJob::PATH, GenerationJob::idle());
    nav_handlers::apply_navigation("/", store, ctx);
    tracing::info!("portal initialized");
}

/// Handle `app/set-locale`.
pub async fn handle_set_locale(req: &SetLocaleReq, store: &StateStore, ctx: &PortalContext) {
    ctx.i18n.set_locale(&req.locale);
    store.set(
        LocaleState::PATH,
        LocaleState {
            locale: req.locale.clone(),
        },
    );
}

/// Handle `app/toggle-theme`.
pub async fn handle_toggle_theme(store: &StateStore, ctx: &PortalContext) {
    ctx.layout.toggle_theme();
    let theme: Theme = ctx.layout.theme.get();
    store.set(ThemeState::PATH, ThemeState { theme });
}
