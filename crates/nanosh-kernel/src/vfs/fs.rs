//! The in-memory filesystem engine.
//!
//! All operations take a target path plus the caller's current working
//! directory and report failure as `None`/`false` — the command layer
//! turns those into user-facing messages. The engine never panics and
//! never partially applies a mutation.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::node::{Node, NodeType};
use super::path::{join_segments, resolve_segments};

/// Maximum symlink dereferences per lookup.
///
/// The budget is shared across the whole resolution, including
/// recursive hops, so it also bounds acyclic chains that are merely
/// long. Exceeding it resolves to not-found rather than an error.
const MAX_LINK_DEPTH: u32 = 10;

static MODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-7]{3}$").expect("static regex"));

/// An owned tree of [`Node`]s with POSIX-like resolution and mutation
/// semantics.
///
/// Constructed from a seed template by deep copy, so instances never
/// share state with the template or with each other. The root is
/// always a directory named `/` and cannot be removed.
#[derive(Debug, Clone)]
pub struct Vfs {
    root: Node,
}

impl Vfs {
    /// Materialize a filesystem from a seed tree.
    ///
    /// The seed must be a directory; its subtree is deep-copied so the
    /// live tree owns every node outright.
    pub fn new(seed: &Node) -> Self {
        debug_assert!(seed.is_dir(), "seed root must be a directory");
        let mut root = seed.clone();
        root.name = "/".to_string();
        Self { root }
    }

    /// The root directory.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Look up a node, following symlinks.
    pub fn get_node(&self, path: &str, current_dir: &str) -> Option<&Node> {
        if path == "/" {
            return Some(&self.root);
        }
        let mut budget = 0;
        let segments = self.locate(path, current_dir, true, &mut budget)?;
        self.node_at(&segments)
    }

    /// Look up a node without dereferencing a final-segment symlink.
    ///
    /// Intermediate symlinks are not followed either, so a path that
    /// routes through a link resolves to not-found. Used by callers
    /// that need the link itself, e.g. `readlink` or reading
    /// permission-sensitive files by their literal path.
    pub fn get_node_nofollow(&self, path: &str, current_dir: &str) -> Option<&Node> {
        if path == "/" {
            return Some(&self.root);
        }
        let mut budget = 0;
        let segments = self.locate(path, current_dir, false, &mut budget)?;
        self.node_at(&segments)
    }

    /// Canonical absolute path of an existing node, symlinks resolved.
    pub fn canonical_path(&self, path: &str, current_dir: &str) -> Option<String> {
        let mut budget = 0;
        let segments = self.locate(path, current_dir, true, &mut budget)?;
        self.node_at(&segments)?;
        Some(join_segments(&segments))
    }

    /// Children of a directory, in insertion order.
    pub fn list_nodes(&self, path: &str, current_dir: &str) -> Option<&[Node]> {
        self.get_node(path, current_dir)?.children()
    }

    /// Create a file or directory with default metadata.
    ///
    /// Fails if the parent path does not resolve to an existing
    /// directory chain, or a child of that name already exists. The
    /// new node is owned by the fixed creator identity (see
    /// [`crate::vfs::CREATOR`]), not the acting session user.
    /// Symlinks are created via [`Vfs::create_symlink`].
    pub fn create_node(
        &mut self,
        path: &str,
        current_dir: &str,
        kind: NodeType,
        content: &str,
    ) -> bool {
        let mut segments = resolve_segments(path, current_dir);
        let Some(name) = segments.pop() else {
            return false;
        };
        let node = match kind {
            NodeType::File => Node::file(name, content),
            NodeType::Directory => Node::directory(name),
            NodeType::Symlink => return false,
        };
        let Some(parent) = self.node_at_mut(&segments) else {
            return false;
        };
        let created = parent.insert_child(node);
        if created {
            debug!(path, ?kind, "created node");
        }
        created
    }

    /// Create a symlink to `target`.
    ///
    /// The target is not checked for existence — dangling links are
    /// legal. An existing child of the same name is replaced.
    pub fn create_symlink(&mut self, path: &str, target: &str, current_dir: &str) -> bool {
        let mut segments = resolve_segments(path, current_dir);
        let Some(name) = segments.pop() else {
            return false;
        };
        let Some(parent) = self.node_at_mut(&segments) else {
            return false;
        };
        parent.put_child(Node::symlink(name, target))
    }

    /// Remove a node, excising its entire subtree.
    ///
    /// A non-empty directory is only removed when `recursive` is set.
    /// The root itself can never be removed (its path resolves to an
    /// empty segment list).
    pub fn remove_node(&mut self, path: &str, current_dir: &str, recursive: bool) -> bool {
        let mut segments = resolve_segments(path, current_dir);
        let Some(name) = segments.pop() else {
            return false;
        };
        let Some(parent) = self.node_at_mut(&segments) else {
            return false;
        };
        let Some(target) = parent.child(&name) else {
            return false;
        };
        if !recursive && target.children().is_some_and(|c| !c.is_empty()) {
            return false;
        }
        let removed = parent.remove_child(&name).is_some();
        if removed {
            debug!(path, "removed node");
        }
        removed
    }

    /// Copy a node to a new location as a fully independent duplicate.
    ///
    /// The source is resolved through symlinks; copying a directory
    /// requires `recursive`. An existing destination is overwritten.
    pub fn copy_node(
        &mut self,
        src_path: &str,
        dest_path: &str,
        current_dir: &str,
        recursive: bool,
    ) -> bool {
        let Some(src) = self.get_node(src_path, current_dir) else {
            return false;
        };
        if src.is_dir() && !recursive {
            return false;
        }
        let mut copy = src.clone();

        let mut segments = resolve_segments(dest_path, current_dir);
        let Some(name) = segments.pop() else {
            return false;
        };
        copy.name = name;
        let Some(parent) = self.node_at_mut(&segments) else {
            return false;
        };
        parent.put_child(copy)
    }

    /// Move a node: deep-copy to the destination, then remove the
    /// original. A failed copy leaves the source untouched, so a move
    /// can never lose data.
    pub fn move_node(&mut self, src_path: &str, dest_path: &str, current_dir: &str) -> bool {
        if !self.copy_node(src_path, dest_path, current_dir, true) {
            return false;
        }
        debug!(src_path, dest_path, "moved node");
        self.remove_node(src_path, current_dir, true)
    }

    /// Replace a file's content, keeping size and timestamp current.
    pub fn update_file_content(&mut self, path: &str, current_dir: &str, content: &str) -> bool {
        let mut budget = 0;
        let Some(segments) = self.locate(path, current_dir, true, &mut budget) else {
            return false;
        };
        let Some(node) = self.node_at_mut(&segments) else {
            return false;
        };
        node.set_content(content)
    }

    /// Apply a 3-digit octal mode string, e.g. `755`.
    ///
    /// Anything that is not exactly three octal digits is rejected.
    /// The resulting permission string keeps the node's type flag.
    pub fn chmod(&mut self, path: &str, mode: &str, current_dir: &str) -> bool {
        if !MODE_RE.is_match(mode) {
            return false;
        }
        let mut budget = 0;
        let Some(segments) = self.locate(path, current_dir, true, &mut budget) else {
            return false;
        };
        let Some(node) = self.node_at_mut(&segments) else {
            return false;
        };
        let mut permissions = String::with_capacity(10);
        permissions.push(node.type_char());
        for digit in mode.chars() {
            let bits = digit.to_digit(8).unwrap_or(0);
            permissions.push(if bits & 4 != 0 { 'r' } else { '-' });
            permissions.push(if bits & 2 != 0 { 'w' } else { '-' });
            permissions.push(if bits & 1 != 0 { 'x' } else { '-' });
        }
        node.permissions = permissions;
        true
    }

    /// Apply an `owner`, `:group`, or `owner:group` spec.
    ///
    /// Each half is updated independently; an absent or empty half
    /// leaves the current value untouched.
    pub fn chown(&mut self, path: &str, owner_group: &str, current_dir: &str) -> bool {
        let mut budget = 0;
        let Some(segments) = self.locate(path, current_dir, true, &mut budget) else {
            return false;
        };
        let Some(node) = self.node_at_mut(&segments) else {
            return false;
        };
        let mut parts = owner_group.split(':');
        let owner = parts.next().unwrap_or("");
        let group = parts.next().unwrap_or("");
        if !owner.is_empty() {
            node.owner = owner.to_string();
        }
        if !group.is_empty() {
            node.group = group.to_string();
        }
        true
    }

    /// Resolve a path to the canonical segments of the node it names.
    ///
    /// When `follow` is set, a symlink at any position is dereferenced:
    /// a relative target resolves against the directory containing the
    /// link, unwalked segments are appended, and resolution recurses.
    /// `budget` counts dereferences across the whole resolution and
    /// caps them at [`MAX_LINK_DEPTH`].
    fn locate(
        &self,
        path: &str,
        current_dir: &str,
        follow: bool,
        budget: &mut u32,
    ) -> Option<Vec<String>> {
        let segments = resolve_segments(path, current_dir);
        let mut current = &self.root;
        for (i, segment) in segments.iter().enumerate() {
            let child = current.child(segment)?;
            if follow {
                if let Some(target) = child.target().filter(|t| !t.is_empty()) {
                    *budget += 1;
                    if *budget > MAX_LINK_DEPTH {
                        return None;
                    }
                    let mut next = if target.starts_with('/') {
                        target.to_string()
                    } else {
                        format!("{}/{}", join_segments(&segments[..i]), target)
                    };
                    let remaining = &segments[i + 1..];
                    if !remaining.is_empty() {
                        next = format!("{}/{}", next, remaining.join("/"));
                    }
                    return self.locate(&next, "/", follow, budget);
                }
            }
            current = child;
        }
        Some(segments)
    }

    /// Walk canonical segments from the root, no symlink processing.
    fn node_at(&self, segments: &[String]) -> Option<&Node> {
        let mut current = &self.root;
        for segment in segments {
            current = current.child(segment)?;
        }
        Some(current)
    }

    fn node_at_mut(&mut self, segments: &[String]) -> Option<&mut Node> {
        let mut current = &mut self.root;
        for segment in segments {
            current = current.child_mut(segment)?;
        }
        Some(current)
    }
}
