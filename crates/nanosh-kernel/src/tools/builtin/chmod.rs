//! chmod — Change file mode bits.

use crate::tools::{ExecContext, ExecResult, Tool, ToolArgs};

/// Chmod tool: apply a 3-digit octal mode.
pub struct Chmod;

impl Tool for Chmod {
    fn name(&self) -> &str {
        "chmod"
    }

    fn description(&self) -> &str {
        "Change file mode bits"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let (Some(mode), Some(path)) = (args.positional(0), args.positional(1)) else {
            return ExecResult::failure(1, "chmod: missing operand");
        };
        let (mode, path) = (mode.to_string(), path.to_string());

        if ctx.vfs.chmod(&path, &mode, &ctx.session.cwd) {
            return ExecResult::success("");
        }
        if ctx.vfs.get_node(&path, &ctx.session.cwd).is_none() {
            ExecResult::failure(
                1,
                format!("chmod: cannot access '{path}': No such file or directory"),
            )
        } else {
            ExecResult::failure(1, format!("chmod: invalid mode: '{mode}'"))
        }
    }
}
