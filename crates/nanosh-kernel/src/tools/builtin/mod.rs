//! Built-in tools for nanosh.
//!
//! These are always available and cover the filesystem surface of the
//! shell. Each builtin parses its own arguments and is responsible for
//! any permission check it needs before sensitive reads.

mod cat;
mod cd;
mod chmod;
mod chown;
mod cp;
mod echo;
mod find;
mod ln;
mod ls;
mod mkdir;
mod mv;
mod pwd;
mod readlink;
mod rm;
mod touch;
mod whoami;
mod write;

use super::ToolRegistry;

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(cat::Cat);
    registry.register(cd::Cd);
    registry.register(chmod::Chmod);
    registry.register(chown::Chown);
    registry.register(cp::Cp);
    registry.register(echo::Echo);
    registry.register(find::Find);
    registry.register(ln::Ln);
    registry.register(ls::Ls);
    registry.register(mkdir::Mkdir);
    registry.register(mv::Mv);
    registry.register(pwd::Pwd);
    registry.register(readlink::Readlink);
    registry.register(rm::Rm);
    registry.register(touch::Touch);
    registry.register(whoami::Whoami);
    registry.register(write::Write);
}
