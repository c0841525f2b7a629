//! Virtual filesystem for nanosh.
//!
//! An owned tree of nodes plus a path-resolution / permission /
//! mutation API:
//!
//! - **node**: the `Node` data model (files, directories, symlinks)
//! - **path**: lexical canonicalization of path strings
//! - **fs**: the `Vfs` engine — lookup, symlink traversal, mutations
//! - **find**: recursive search with name/type/size criteria
//!
//! The engine is a leaf component: it owns nothing but the tree and is
//! driven entirely by the command layer, which supplies the target
//! path, current working directory, and acting identity per call.

mod find;
mod fs;
mod node;
mod path;

pub use find::{FindCriteria, SizeFilter};
pub use fs::Vfs;
pub use node::{Node, NodeKind, NodeType, Perm, CREATOR, DIR_SIZE};
pub use path::{join_segments, resolve_segments};
