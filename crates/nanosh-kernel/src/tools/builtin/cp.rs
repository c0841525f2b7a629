//! cp — Copy files and directories.

use crate::tools::{ExecContext, ExecResult, Tool, ToolArgs};

/// Cp tool: copy files and directories.
pub struct Cp;

impl Tool for Cp {
    fn name(&self) -> &str {
        "cp"
    }

    fn description(&self) -> &str {
        "Copy files and directories"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let recursive = args.has_flag("r") || args.has_flag("R");
        let (Some(src), Some(dest)) = (args.positional(0), args.positional(1)) else {
            return ExecResult::failure(1, "cp: missing file operand");
        };
        let (src, dest) = (src.to_string(), dest.to_string());

        if ctx.vfs.copy_node(&src, &dest, &ctx.session.cwd, recursive) {
            return ExecResult::success("");
        }

        match ctx.vfs.get_node(&src, &ctx.session.cwd) {
            None => ExecResult::failure(
                1,
                format!("cp: cannot stat '{src}': No such file or directory"),
            ),
            Some(node) if node.is_dir() && !recursive => ExecResult::failure(
                1,
                format!("cp: -r not specified; omitting directory '{src}'"),
            ),
            Some(_) => ExecResult::failure(
                1,
                format!("cp: cannot create '{dest}': No such file or directory"),
            ),
        }
    }
}
