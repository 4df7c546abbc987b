//! Locale-aware string lookup, addressed like state paths.
//!
//! The portal is Vietnamese-first with an English fallback. Rendering
//! layers read strings through `i18n.get("path?args")` — synchronous, with
//! handlers registered per path pattern (`+`/`#` wildcards as elsewhere):
//!
//! ```ignore
//! let i18n = I18nStore::new("vi");
//! i18n.register("ui/#", Arc::new(ui_strings));
//! assert_eq!(i18n.get("ui/nav/schools"), "Trường học");
//! i18n.set_locale("en");
//! assert_eq!(i18n.get("ui/nav/schools"), "Schools");
//! ```

use std::sync::{Arc, RwLock};

use crate::trie::PatternTrie;

/// Parsed argument list from a lookup path: `count=3&unit=VND`.
#[derive(Debug, Clone)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Parse a query string (no leading `?`). Malformed pairs are skipped.
    pub fn parse(query: &str) -> Self {
        Self(
            query
                .split('&')
                .filter(|s| !s.is_empty())
                .filter_map(|pair| {
                    let (k, v) = pair.split_once('=')?;
                    Some((k.to_string(), v.to_string()))
                })
                .collect(),
        )
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A string resolver registered under a path pattern. Receives the matched
/// path, parsed args, and the active locale.
pub trait I18nHandler: Send + Sync + 'static {
    fn resolve(&self, path: &str, args: &QueryParams, locale: &str) -> String;
}

impl<F> I18nHandler for F
where
    F: Fn(&str, &QueryParams, &str) -> String + Send + Sync + 'static,
{
    fn resolve(&self, path: &str, args: &QueryParams, locale: &str) -> String {
        (self)(path, args, locale)
    }
}

/// Synchronous string store with trie-routed resolvers and a switchable
/// locale. Unresolved paths echo back, which makes missing strings visible
/// in the UI instead of blank.
pub struct I18nStore {
    handlers: PatternTrie<Arc<dyn I18nHandler>>,
    locale: RwLock<String>,
}

impl I18nStore {
    pub fn new(locale: &str) -> Self {
        Self {
            handlers: PatternTrie::new(),
            locale: RwLock::new(locale.to_string()),
        }
    }

    /// Register a resolver under a pattern (`ui/#`, `error/+`, an exact key).
    pub fn register(&self, pattern: &str, handler: Arc<dyn I18nHandler>) {
        self.handlers.insert(pattern, handler);
    }

    /// Resolve `"path"` or `"path?key=value"`. The first matching resolver
    /// wins; no match echoes the path.
    pub fn get(&self, url: &str) -> String {
        let (path, query) = split_url(url);
        let args = if query.is_empty() {
            QueryParams::empty()
        } else {
            QueryParams::parse(query)
        };
        let locale = self.locale.read().unwrap().clone();

        match self.handlers.matches(path).first() {
            Some(handler) => handler.resolve(path, &args, &locale),
            None => path.to_string(),
        }
    }

    pub fn set_locale(&self, locale: &str) {
        *self.locale.write().unwrap() = locale.to_string();
    }

    pub fn locale(&self) -> String {
        self.locale.read().unwrap().clone()
    }
}

/// `"format/currency?amount=5"` -> `("format/currency", "amount=5")`.
fn split_url(url: &str) -> (&str, &str) {
    match url.find('?') {
        Some(i) => (&url[..i], &url[i + 1..]),
        None => (url, ""),
    }
}
