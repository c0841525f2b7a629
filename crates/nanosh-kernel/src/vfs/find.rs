//! Recursive search over the tree.

use super::fs::Vfs;
use super::node::{Node, NodeType};
use super::path::resolve_segments;

/// Size predicate parsed from a `+N` / `-N` / `N` spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeFilter {
    /// Strictly larger than N bytes (`+N`).
    Over(u64),
    /// Strictly smaller than N bytes (`-N`).
    Under(u64),
    /// Exactly N bytes (`N`).
    Exactly(u64),
}

impl SizeFilter {
    /// Parse a size spec like `+1000`, `-500` or `80`.
    pub fn parse(spec: &str) -> Option<Self> {
        let (sign, rest) = match spec.chars().next()? {
            '+' => ('+', &spec[1..]),
            '-' => ('-', &spec[1..]),
            _ => ('=', spec),
        };
        let n: u64 = rest.parse().ok()?;
        Some(match sign {
            '+' => SizeFilter::Over(n),
            '-' => SizeFilter::Under(n),
            _ => SizeFilter::Exactly(n),
        })
    }

    pub fn matches(self, size: u64) -> bool {
        match self {
            SizeFilter::Over(n) => size > n,
            SizeFilter::Under(n) => size < n,
            SizeFilter::Exactly(n) => size == n,
        }
    }
}

/// Search criteria; a node matches when every given criterion matches.
#[derive(Debug, Clone, Default)]
pub struct FindCriteria {
    /// Substring match on the node name.
    pub name: Option<String>,
    /// Exact node type.
    pub kind: Option<NodeType>,
    /// Size comparison.
    pub size: Option<SizeFilter>,
}

impl FindCriteria {
    fn matches(&self, node: &Node) -> bool {
        if let Some(name) = &self.name {
            if !node.name.contains(name.as_str()) {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if node.node_type() != kind {
                return false;
            }
        }
        if let Some(size) = self.size {
            if !size.matches(node.size) {
                return false;
            }
        }
        true
    }
}

impl Vfs {
    /// Pre-order depth-first search rooted at `path`.
    ///
    /// Returns absolute path strings in traversal order; children are
    /// visited in insertion order. The base node itself is tested, and
    /// non-matching directories are still descended into. A base that
    /// does not resolve yields an empty result.
    pub fn find(&self, path: &str, current_dir: &str, criteria: &FindCriteria) -> Vec<String> {
        let Some(base) = self.get_node(path, current_dir) else {
            return Vec::new();
        };
        // The displayed base is the lexical canonical form of the
        // requested path; the root renders as "" so children join as
        // "/name" and the root itself as "/".
        let segments = resolve_segments(path, current_dir);
        let base_path = if segments.is_empty() {
            String::new()
        } else {
            format!("/{}", segments.join("/"))
        };

        let mut results = Vec::new();
        walk(base, &base_path, criteria, &mut results);
        results
    }
}

fn walk(node: &Node, path: &str, criteria: &FindCriteria, results: &mut Vec<String>) {
    if criteria.matches(node) {
        results.push(if path.is_empty() { "/".to_string() } else { path.to_string() });
    }
    if let Some(children) = node.children() {
        for child in children {
            walk(child, &format!("{}/{}", path, child.name), criteria, results);
        }
    }
}
