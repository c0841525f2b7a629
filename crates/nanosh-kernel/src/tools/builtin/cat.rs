//! cat — Print file contents.

use crate::tools::{ExecContext, ExecResult, Tool, ToolArgs};
use crate::vfs::Perm;

/// Cat tool: print file contents.
pub struct Cat;

impl Tool for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn description(&self) -> &str {
        "Concatenate and print files"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(path) = args.positional(0) else {
            return ExecResult::failure(1, "cat: missing operand");
        };

        let Some(node) = ctx.vfs.get_node(path, &ctx.session.cwd) else {
            return ExecResult::failure(1, format!("cat: {path}: No such file or directory"));
        };

        // Read permission is checked here, at the point of use.
        if !node.permits(&ctx.session.user, &ctx.session.group, Perm::Read) {
            return ExecResult::failure(1, "cat: Permission denied");
        }

        ExecResult::success(node.content().unwrap_or_default())
    }
}
