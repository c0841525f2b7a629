//! Filesystem node types.

use chrono::{DateTime, Utc};

/// Nominal size reported for directories.
pub const DIR_SIZE: u64 = 4096;

/// Identity new nodes are created under.
///
/// The engine stamps every created node with this fixed owner/group
/// rather than the acting session identity; callers that want
/// different ownership follow up with `chown`.
pub const CREATOR: &str = "user";

/// Type of a filesystem node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeType {
    File,
    Directory,
    Symlink,
}

/// Permission operation to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perm {
    Read,
    Write,
    Execute,
}

impl Perm {
    /// The character this operation occupies in an `rwx` triplet.
    pub fn as_char(self) -> char {
        match self {
            Perm::Read => 'r',
            Perm::Write => 'w',
            Perm::Execute => 'x',
        }
    }
}

/// Variant payload of a node.
///
/// A file never has children, a directory never has content or a
/// target, a symlink carries only its target string.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    File { content: String },
    Directory { children: Vec<Node> },
    Symlink { target: String },
}

/// One entry in the filesystem tree.
///
/// `name` is the node's own basename, not its path. Children are held
/// in insertion order; names are unique within a directory (enforced
/// by [`Node::insert_child`]). `Clone` is a full recursive structural
/// copy — every level of the subtree is freshly owned.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    /// 10-character POSIX-style permission string, e.g. `drwxr-xr-x`.
    pub permissions: String,
    pub owner: String,
    pub group: String,
    pub modified: DateTime<Utc>,
    /// Content byte length for files, target length for symlinks,
    /// [`DIR_SIZE`] for directories.
    pub size: u64,
}

impl Node {
    /// Create a file with default metadata.
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let size = content.len() as u64;
        Self {
            name: name.into(),
            kind: NodeKind::File { content },
            permissions: "-rw-r--r--".to_string(),
            owner: CREATOR.to_string(),
            group: CREATOR.to_string(),
            modified: Utc::now(),
            size,
        }
    }

    /// Create an empty directory with default metadata.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory { children: Vec::new() },
            permissions: "drwxr-xr-x".to_string(),
            owner: CREATOR.to_string(),
            group: CREATOR.to_string(),
            modified: Utc::now(),
            size: DIR_SIZE,
        }
    }

    /// Create a symlink. The target is stored as an opaque string and
    /// only checked at resolution time; dangling links are legal.
    pub fn symlink(name: impl Into<String>, target: impl Into<String>) -> Self {
        let target = target.into();
        let size = target.len() as u64;
        Self {
            name: name.into(),
            kind: NodeKind::Symlink { target },
            permissions: "lrwxrwxrwx".to_string(),
            owner: CREATOR.to_string(),
            group: CREATOR.to_string(),
            modified: Utc::now(),
            size,
        }
    }

    /// Override the owner and group (builder style, for seed data).
    pub fn owned_by(mut self, owner: impl Into<String>, group: impl Into<String>) -> Self {
        self.owner = owner.into();
        self.group = group.into();
        self
    }

    /// Override the permission string (builder style, for seed data).
    pub fn with_permissions(mut self, permissions: impl Into<String>) -> Self {
        self.permissions = permissions.into();
        self
    }

    pub fn node_type(&self) -> NodeType {
        match self.kind {
            NodeKind::File { .. } => NodeType::File,
            NodeKind::Directory { .. } => NodeType::Directory,
            NodeKind::Symlink { .. } => NodeType::Symlink,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// The type flag character used as the first column of `permissions`.
    pub fn type_char(&self) -> char {
        match self.kind {
            NodeKind::Directory { .. } => 'd',
            NodeKind::Symlink { .. } => 'l',
            NodeKind::File { .. } => '-',
        }
    }

    /// File content, if this is a file.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            _ => None,
        }
    }

    /// Symlink target, if this is a symlink.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Symlink { target } => Some(target),
            _ => None,
        }
    }

    /// Children in insertion order, if this is a directory.
    pub fn children(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            _ => None,
        }
    }

    /// Look up a child by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children()?.iter().find(|c| c.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        match &mut self.kind {
            NodeKind::Directory { children } => children.iter_mut().find(|c| c.name == name),
            _ => None,
        }
    }

    /// Append a child, keeping names unique.
    ///
    /// Returns false (and leaves the tree unchanged) if this node is
    /// not a directory or already has a child of that name.
    pub fn insert_child(&mut self, node: Node) -> bool {
        let NodeKind::Directory { children } = &mut self.kind else {
            return false;
        };
        if children.iter().any(|c| c.name == node.name) {
            return false;
        }
        children.push(node);
        true
    }

    /// Replace or append a child under the given name.
    pub fn put_child(&mut self, node: Node) -> bool {
        let NodeKind::Directory { children } = &mut self.kind else {
            return false;
        };
        match children.iter_mut().find(|c| c.name == node.name) {
            Some(slot) => *slot = node,
            None => children.push(node),
        }
        true
    }

    /// Excise a child and its entire subtree.
    pub fn remove_child(&mut self, name: &str) -> Option<Node> {
        let NodeKind::Directory { children } = &mut self.kind else {
            return None;
        };
        let idx = children.iter().position(|c| c.name == name)?;
        Some(children.remove(idx))
    }

    /// Replace file content, keeping size and timestamp consistent.
    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        let NodeKind::File { content: slot } = &mut self.kind else {
            return false;
        };
        let content = content.into();
        self.size = content.len() as u64;
        *slot = content;
        self.modified = Utc::now();
        true
    }

    /// POSIX-style permission check.
    ///
    /// `root` always passes. Otherwise the owner triplet applies when
    /// the user matches, else the group triplet when the group matches,
    /// else the other triplet.
    pub fn permits(&self, user: &str, group: &str, op: Perm) -> bool {
        if user == "root" {
            return true;
        }
        let triplet = if user == self.owner {
            self.permissions.get(1..4)
        } else if group == self.group {
            self.permissions.get(4..7)
        } else {
            self.permissions.get(7..10)
        };
        triplet.unwrap_or("").contains(op.as_char())
    }
}
