//! URL recognition.
//!
//! `recognize` matches a URL against the route table top-down, one child per
//! level, and produces a fresh [`RouteSnapshot`] chain. Definition order is
//! match order; `:name` segments capture parameters; `**` consumes whatever
//! remains. Query strings and fragments are ignored for matching.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{RouteData, RouteDef, RouteTable};

#[derive(Debug, thiserror::Error)]
pub enum RecognizeError {
    #[error("no route matches {url:?}")]
    NotFound { url: String },
}

/// One node of the activated chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedRoute {
    /// Configured path of the route definition, `:name` left verbatim.
    pub config_path: String,
    /// Concrete URL segments this node consumed.
    pub matched: Vec<String>,
    /// Parameters captured by this node's `:name` segments.
    pub params: Vec<(String, String)>,
    pub page: String,
    pub data: RouteData,
}

/// The activated route chain for one URL, root first.
///
/// Produced fresh on every recognition; nothing is cached between
/// navigations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSnapshot {
    /// Normalized URL that was matched (`/` plus the joined segments).
    pub url: String,
    /// Parameters over the whole chain; deeper captures shadow shallower
    /// ones of the same name.
    pub params: BTreeMap<String, String>,
    pub chain: Vec<MatchedRoute>,
}

impl RouteSnapshot {
    /// Deepest activated node.
    pub fn leaf(&self) -> Option<&MatchedRoute> {
        self.chain.last()
    }

    /// Page identifier of the deepest node.
    pub fn page(&self) -> Option<&str> {
        self.leaf().map(|n| n.page.as_str())
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Match `url` against the table.
///
/// Falls through to a configured `**` route for unknown URLs; errors only
/// when the table has no catch-all either.
pub fn recognize(table: &RouteTable, url: &str) -> Result<RouteSnapshot, RecognizeError> {
    let segments = split_url(url);
    for def in &table.routes {
        if let Some(chain) = match_def(def, &segments) {
            let snapshot = build_snapshot(&segments, chain);
            tracing::trace!(url, page = snapshot.page(), "route recognized");
            return Ok(snapshot);
        }
    }
    tracing::debug!(url, "no route matched");
    Err(RecognizeError::NotFound {
        url: url.to_string(),
    })
}

/// Path segments of `url`, query string and fragment stripped.
fn split_url(url: &str) -> Vec<String> {
    let path = url.split(['?', '#']).next().unwrap_or("");
    path.trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Match one definition against the remaining segments, returning the chain
/// from this node down to the leaf.
fn match_def(def: &RouteDef, segments: &[String]) -> Option<Vec<MatchedRoute>> {
    if def.is_catch_all() {
        return Some(vec![MatchedRoute {
            config_path: def.path.clone(),
            matched: segments.to_vec(),
            params: Vec::new(),
            page: def.page.clone(),
            data: def.data.clone(),
        }]);
    }

    let config = def.segments();
    if segments.len() < config.len() {
        return None;
    }
    let mut params = Vec::new();
    for (piece, segment) in config.iter().zip(segments) {
        match piece.strip_prefix(':') {
            Some(name) => params.push((name.to_string(), segment.clone())),
            None => {
                if *piece != segment.as_str() {
                    return None;
                }
            }
        }
    }

    let rest = &segments[config.len()..];
    let node = MatchedRoute {
        config_path: def.path.clone(),
        matched: segments[..config.len()].to_vec(),
        params,
        page: def.page.clone(),
        data: def.data.clone(),
    };

    if rest.is_empty() {
        // Fully consumed. Descend into an empty-path default child when one
        // exists, otherwise this node is the leaf.
        let tail = def
            .children
            .iter()
            .filter(|c| c.path.is_empty())
            .find_map(|c| match_def(c, rest));
        let mut chain = vec![node];
        if let Some(mut tail) = tail {
            chain.append(&mut tail);
        }
        return Some(chain);
    }

    let mut tail = def.children.iter().find_map(|c| match_def(c, rest))?;
    let mut chain = vec![node];
    chain.append(&mut tail);
    Some(chain)
}

fn build_snapshot(segments: &[String], chain: Vec<MatchedRoute>) -> RouteSnapshot {
    let mut url = String::from("/");
    url.push_str(&segments.join("/"));
    let mut params = BTreeMap::new();
    for node in &chain {
        for (name, value) in &node.params {
            params.insert(name.clone(), value.clone());
        }
    }
    RouteSnapshot { url, params, chain }
}
