//! readlink — Print a symlink's target.

use crate::tools::{ExecContext, ExecResult, Tool, ToolArgs};

/// Readlink tool: print a symlink's target without following it.
pub struct Readlink;

impl Tool for Readlink {
    fn name(&self) -> &str {
        "readlink"
    }

    fn description(&self) -> &str {
        "Print the target of a symbolic link"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(path) = args.positional(0) else {
            return ExecResult::failure(1, "readlink: missing operand");
        };

        match ctx.vfs.get_node_nofollow(path, &ctx.session.cwd) {
            None => {
                ExecResult::failure(1, format!("readlink: {path}: No such file or directory"))
            }
            Some(node) => match node.target() {
                Some(target) => ExecResult::success(target),
                None => ExecResult::failure(1, format!("readlink: {path}: not a symbolic link")),
            },
        }
    }
}
