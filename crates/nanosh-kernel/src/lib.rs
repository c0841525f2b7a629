//! nanosh-kernel: the core of nanosh.
//!
//! This crate provides:
//!
//! - **VFS**: an in-memory filesystem tree with POSIX-like path
//!   resolution, symlinks, and owner/group/mode permission checks
//! - **Seed**: the static initial filesystem and its JSON document form
//! - **Session**: per-session identity, cwd, and hostname
//! - **Tools**: the `Tool` trait, registry, and builtin commands
//! - **Kernel**: the facade that owns all of the above and dispatches
//!   command lines
//!
//! The engine is synchronous and single-session: every operation runs
//! to completion before the next command is accepted.

pub mod kernel;
pub mod seed;
pub mod session;
pub mod tools;
pub mod vfs;

pub use kernel::{Kernel, KernelConfig};
pub use session::Session;
pub use tools::{ExecContext, ExecResult, Tool, ToolArgs, ToolRegistry};
pub use vfs::{FindCriteria, Node, NodeKind, NodeType, Perm, SizeFilter, Vfs};
