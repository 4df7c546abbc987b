use std::collections::BTreeMap;
use std::sync::RwLock;

/// Thread-safe pattern index over `/`-separated state paths.
///
/// Both state subscriptions and intent handlers register against patterns:
/// - `+` matches exactly one path segment
/// - `#` matches the whole remainder (must be the last segment)
///
/// A subscriber on `pages/+/list` fires for `pages/schools/list` and
/// `pages/teachers/list`; one on `layout/#` fires for every layout write.
pub struct PatternTrie<T> {
    root: RwLock<Node<T>>,
}

struct Node<T> {
    /// Literal children keyed by segment.
    children: BTreeMap<String, Node<T>>,
    /// `+` child.
    one: Option<Box<Node<T>>>,
    /// `#` child. Values live directly on it; nothing nests below a `#`.
    rest: Option<Box<Node<T>>>,
    /// Values whose pattern terminates at this node.
    values: Vec<T>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
            one: None,
            rest: None,
            values: Vec::new(),
        }
    }
}

impl<T: Clone> PatternTrie<T> {
    pub fn new() -> Self {
        Self {
            root: RwLock::new(Node::default()),
        }
    }

    /// Register a value under a pattern such as `"nav/route"`, `"pages/+/list"`
    /// or `"layout/#"`.
    pub fn insert(&self, pattern: &str, value: T) {
        let mut root = self.root.write().unwrap();
        root.insert(pattern, value);
    }

    /// Collect every registered value whose pattern matches the concrete
    /// `path`, in deterministic order: literal before `+` before `#` at each
    /// level, with outer-level `#` values last.
    pub fn matches(&self, path: &str) -> Vec<T> {
        let root = self.root.read().unwrap();
        let mut out = Vec::new();
        root.collect(path, &mut out);
        out
    }

    /// Remove values under `pattern` for which the predicate holds.
    /// Returns whether anything was removed.
    pub fn remove<F>(&self, pattern: &str, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        let mut root = self.root.write().unwrap();
        root.remove(pattern, &predicate)
    }

    /// Whether any value is registered under exactly this pattern
    /// (no wildcard expansion).
    pub fn has_pattern(&self, pattern: &str) -> bool {
        let root = self.root.read().unwrap();
        root.has_pattern(pattern)
    }
}

impl<T: Clone> Default for PatternTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Node<T> {
    fn insert(&mut self, pattern: &str, value: T) {
        if pattern.is_empty() {
            self.values.push(value);
            return;
        }

        let (head, tail) = split_head(pattern);
        match head {
            "+" => {
                let child = self.one.get_or_insert_with(|| Box::new(Node::default()));
                child.insert(tail, value);
            }
            "#" => {
                let child = self.rest.get_or_insert_with(|| Box::new(Node::default()));
                child.values.push(value);
            }
            segment => {
                let child = self.children.entry(segment.to_string()).or_default();
                child.insert(tail, value);
            }
        }
    }

    fn collect(&self, path: &str, out: &mut Vec<T>) {
        if path.is_empty() {
            out.extend(self.values.iter().cloned());
            // `#` also covers "zero remaining segments".
            if let Some(rest) = &self.rest {
                out.extend(rest.values.iter().cloned());
            }
            return;
        }

        let (head, tail) = split_head(path);

        if let Some(child) = self.children.get(head) {
            child.collect(tail, out);
        }
        if let Some(one) = &self.one {
            one.collect(tail, out);
        }
        if let Some(rest) = &self.rest {
            out.extend(rest.values.iter().cloned());
        }
    }

    fn remove<F>(&mut self, pattern: &str, predicate: &F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        if pattern.is_empty() {
            let before = self.values.len();
            self.values.retain(|v| !predicate(v));
            return self.values.len() < before;
        }

        let (head, tail) = split_head(pattern);
        match head {
            "+" => {
                if let Some(one) = &mut self.one {
                    return one.remove(tail, predicate);
                }
            }
            "#" => {
                if let Some(rest) = &mut self.rest {
                    let before = rest.values.len();
                    rest.values.retain(|v| !predicate(v));
                    return rest.values.len() < before;
                }
            }
            segment => {
                if let Some(child) = self.children.get_mut(segment) {
                    return child.remove(tail, predicate);
                }
            }
        }
        false
    }

    fn has_pattern(&self, pattern: &str) -> bool {
        if pattern.is_empty() {
            return !self.values.is_empty();
        }

        let (head, tail) = split_head(pattern);
        match head {
            "+" => self
                .one
                .as_ref()
                .is_some_and(|child| child.has_pattern(tail)),
            "#" => self
                .rest
                .as_ref()
                .is_some_and(|child| !child.values.is_empty()),
            segment => self
                .children
                .get(segment)
                .is_some_and(|child| child.has_pattern(tail)),
        }
    }
}

/// `"pages/schools/list"` -> `("pages", "schools/list")`; no separator means
/// the tail is empty.
fn split_head(path: &str) -> (&str, &str) {
    match path.find('/') {
        Some(i) => (&path[..i], &path[i + 1..]),
        None => (path, ""),
    }
}
