//! Tool system for nanosh.
//!
//! Every command is a tool: an implementation of the [`Tool`] trait,
//! registered by name in a [`ToolRegistry`] built once at startup.
//! Tools receive parsed [`ToolArgs`] and an [`ExecContext`] borrowing
//! the VFS and session, and return an [`ExecResult`]. The engine only
//! reports success or absence; tools manufacture the user-facing
//! error text.

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::register_builtins;
pub use context::ExecContext;
pub use registry::ToolRegistry;
pub use traits::{ExecResult, Tool, ToolArgs};
