//! Seed trees: the static initial filesystem.
//!
//! A seed is describable as a JSON document with the shape
//! `{name, type, content?, target?, children?, permissions, owner,
//! group, lastModified, size}`, where `children` is a name-keyed,
//! insertion-ordered map. [`default_tree`] builds the standard seed in
//! code; [`from_json`]/[`to_json`] load and snapshot that document
//! shape, validating the tree invariants on the way in.
//!
//! The `/etc` entries are fixed: authentication-style commands outside
//! this crate consult `passwd`, `shadow`, `sudoers` and `motd` by name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vfs::{Node, NodeKind, NodeType};

/// Errors from loading a seed document.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("malformed seed document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed root must be a directory, got a {0:?}")]
    RootNotDirectory(NodeType),
    #[error("duplicate child name {name:?} under {parent:?}")]
    DuplicateChild { parent: String, name: String },
    #[error("node {0:?} has a payload inconsistent with its type")]
    InconsistentPayload(String),
}

/// One node of the seed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedNode {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "children_map")]
    pub children: Option<Vec<SeedNode>>,
    pub permissions: String,
    pub owner: String,
    pub group: String,
    pub last_modified: DateTime<Utc>,
    pub size: u64,
}

/// `children` as a name-keyed JSON map.
///
/// Serde streams map entries in document order, so insertion order
/// survives the round trip without an ordered-map dependency.
mod children_map {
    use super::SeedNode;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        children: &Option<Vec<SeedNode>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let children = children.as_deref().unwrap_or(&[]);
        let mut map = serializer.serialize_map(Some(children.len()))?;
        for child in children {
            map.serialize_entry(&child.name, child)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<SeedNode>>, D::Error> {
        struct ChildrenVisitor;

        impl<'de> Visitor<'de> for ChildrenVisitor {
            type Value = Vec<SeedNode>;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a name-keyed map of child nodes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut children = Vec::new();
                while let Some((_, child)) = map.next_entry::<String, SeedNode>()? {
                    children.push(child);
                }
                Ok(children)
            }
        }

        deserializer.deserialize_map(ChildrenVisitor).map(Some)
    }
}

/// Parse a seed document, validating tree invariants.
pub fn from_json(document: &str) -> Result<Node, SeedError> {
    let doc: SeedNode = serde_json::from_str(document)?;
    if doc.node_type != NodeType::Directory {
        return Err(SeedError::RootNotDirectory(doc.node_type));
    }
    build(doc)
}

/// Snapshot a tree back into the seed document shape.
pub fn to_json(node: &Node) -> Result<String, SeedError> {
    Ok(serde_json::to_string_pretty(&snapshot(node))?)
}

fn build(doc: SeedNode) -> Result<Node, SeedError> {
    let kind = match doc.node_type {
        NodeType::File => {
            if doc.children.is_some() || doc.target.is_some() {
                return Err(SeedError::InconsistentPayload(doc.name));
            }
            NodeKind::File { content: doc.content.unwrap_or_default() }
        }
        NodeType::Symlink => {
            if doc.children.is_some() || doc.content.is_some() {
                return Err(SeedError::InconsistentPayload(doc.name));
            }
            let Some(target) = doc.target else {
                return Err(SeedError::InconsistentPayload(doc.name));
            };
            NodeKind::Symlink { target }
        }
        NodeType::Directory => {
            if doc.content.is_some() || doc.target.is_some() {
                return Err(SeedError::InconsistentPayload(doc.name));
            }
            NodeKind::Directory { children: Vec::new() }
        }
    };

    let mut node = Node {
        name: doc.name,
        kind,
        permissions: doc.permissions,
        owner: doc.owner,
        group: doc.group,
        modified: doc.last_modified,
        size: doc.size,
    };

    for child_doc in doc.children.unwrap_or_default() {
        let child_name = child_doc.name.clone();
        if !node.insert_child(build(child_doc)?) {
            return Err(SeedError::DuplicateChild { parent: node.name, name: child_name });
        }
    }
    Ok(node)
}

fn snapshot(node: &Node) -> SeedNode {
    SeedNode {
        name: node.name.clone(),
        node_type: node.node_type(),
        content: node.content().map(str::to_string),
        target: node.target().map(str::to_string),
        children: node.children().map(|c| c.iter().map(snapshot).collect()),
        permissions: node.permissions.clone(),
        owner: node.owner.clone(),
        group: node.group.clone(),
        last_modified: node.modified,
        size: node.size,
    }
}

/// The standard initial filesystem.
pub fn default_tree() -> Node {
    let mut root = Node::directory("/").owned_by("root", "root");

    root.insert_child(Node::directory("bin").owned_by("root", "root"));

    let mut etc = Node::directory("etc").owned_by("root", "root");
    etc.insert_child(
        Node::file(
            "passwd",
            "root:x:0:0:root:/root:/bin/bash\n\
             user:x:1000:1000:user:/home/user:/bin/bash\n\
             guest:x:1001:1001:guest:/home/guest:/bin/bash",
        )
        .owned_by("root", "root"),
    );
    etc.insert_child(
        Node::file("shadow", "root:password123\nuser:admin\nguest:guest")
            .owned_by("root", "root")
            .with_permissions("-rw-------"),
    );
    etc.insert_child(
        Node::file("sudoers", "root ALL=(ALL:ALL) ALL\nuser ALL=(ALL:ALL) ALL")
            .owned_by("root", "root")
            .with_permissions("-r--r-----"),
    );
    etc.insert_child(
        Node::file(
            "motd",
            "Welcome to POSIX Nanokernel v1.2.0 LTS\n\
             Networking: Enabled (Shared from Host)\n\
             Symlink Support: Active",
        )
        .owned_by("root", "root"),
    );
    root.insert_child(etc);

    let mut home = Node::directory("home").owned_by("root", "root");
    let mut user_home = Node::directory("user");
    user_home.insert_child(Node::file(
        "README.md",
        "# System v1.2.0\nTry: 'ls -l', 'find / -name README', or 'ln -s README.md link'.",
    ));
    home.insert_child(user_home);
    home.insert_child(Node::directory("guest").owned_by("guest", "guest"));
    root.insert_child(home);

    root.insert_child(
        Node::directory("root")
            .owned_by("root", "root")
            .with_permissions("drwx------"),
    );

    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::Vfs;

    #[test]
    fn default_tree_has_the_fixed_entries() {
        let fs = Vfs::new(&default_tree());
        for path in ["/etc/passwd", "/etc/shadow", "/etc/sudoers", "/etc/motd"] {
            assert!(fs.get_node(path, "/").is_some(), "{path} missing");
        }
        assert!(fs.get_node("/home/user/README.md", "/").is_some());
        assert!(fs.get_node("/home/guest", "/").is_some());

        let shadow = fs.get_node("/etc/shadow", "/").unwrap();
        assert_eq!(shadow.permissions, "-rw-------");
        assert_eq!(shadow.owner, "root");

        let user_home = fs.get_node("/home/user", "/").unwrap();
        assert_eq!(user_home.owner, "user");
    }

    #[test]
    fn json_round_trip_preserves_structure_and_order() {
        let tree = default_tree();
        let json = to_json(&tree).unwrap();
        let reparsed = from_json(&json).unwrap();

        let names = |n: &Node| -> Vec<String> {
            n.children().unwrap().iter().map(|c| c.name.clone()).collect()
        };
        assert_eq!(names(&tree), names(&reparsed));
        assert_eq!(
            names(tree.child("etc").unwrap()),
            names(reparsed.child("etc").unwrap())
        );
        assert_eq!(
            reparsed.child("etc").unwrap().child("motd").unwrap().content(),
            tree.child("etc").unwrap().child("motd").unwrap().content()
        );
    }

    #[test]
    fn from_json_minimal_document() {
        let doc = r#"{
            "name": "/",
            "type": "DIRECTORY",
            "permissions": "drwxr-xr-x",
            "owner": "root",
            "group": "root",
            "lastModified": "2024-01-01T00:00:00Z",
            "size": 4096,
            "children": {
                "b.txt": {
                    "name": "b.txt", "type": "FILE", "content": "bee",
                    "permissions": "-rw-r--r--", "owner": "user", "group": "user",
                    "lastModified": "2024-01-01T00:00:00Z", "size": 3
                },
                "a.txt": {
                    "name": "a.txt", "type": "FILE", "content": "ay",
                    "permissions": "-rw-r--r--", "owner": "user", "group": "user",
                    "lastModified": "2024-01-01T00:00:00Z", "size": 2
                }
            }
        }"#;
        let tree = from_json(doc).unwrap();
        // Document order, not alphabetical.
        let names: Vec<_> = tree.children().unwrap().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["b.txt", "a.txt"]);
    }

    #[test]
    fn from_json_rejects_file_root() {
        let doc = r#"{
            "name": "/", "type": "FILE", "content": "",
            "permissions": "-rw-r--r--", "owner": "root", "group": "root",
            "lastModified": "2024-01-01T00:00:00Z", "size": 0
        }"#;
        assert!(matches!(from_json(doc), Err(SeedError::RootNotDirectory(NodeType::File))));
    }

    #[test]
    fn from_json_rejects_inconsistent_payload() {
        // A symlink without a target.
        let doc = r#"{
            "name": "/", "type": "DIRECTORY",
            "permissions": "drwxr-xr-x", "owner": "root", "group": "root",
            "lastModified": "2024-01-01T00:00:00Z", "size": 4096,
            "children": {
                "link": {
                    "name": "link", "type": "SYMLINK",
                    "permissions": "lrwxrwxrwx", "owner": "user", "group": "user",
                    "lastModified": "2024-01-01T00:00:00Z", "size": 0
                }
            }
        }"#;
        assert!(matches!(from_json(doc), Err(SeedError::InconsistentPayload(name)) if name == "link"));
    }

    #[test]
    fn from_json_rejects_duplicate_children() {
        let doc = r#"{
            "name": "/", "type": "DIRECTORY",
            "permissions": "drwxr-xr-x", "owner": "root", "group": "root",
            "lastModified": "2024-01-01T00:00:00Z", "size": 4096,
            "children": {
                "x": {
                    "name": "x", "type": "FILE", "content": "",
                    "permissions": "-rw-r--r--", "owner": "user", "group": "user",
                    "lastModified": "2024-01-01T00:00:00Z", "size": 0
                },
                "x2": {
                    "name": "x", "type": "FILE", "content": "",
                    "permissions": "-rw-r--r--", "owner": "user", "group": "user",
                    "lastModified": "2024-01-01T00:00:00Z", "size": 0
                }
            }
        }"#;
        // Child identity is the node's own name field; two entries
        // collapsing to "x" collide regardless of their map keys.
        assert!(matches!(
            from_json(doc),
            Err(SeedError::DuplicateChild { name, .. }) if name == "x"
        ));
    }

    #[test]
    fn parse_error_is_reported() {
        assert!(matches!(from_json("not json"), Err(SeedError::Parse(_))));
    }
}
