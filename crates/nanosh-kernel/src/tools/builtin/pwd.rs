//! pwd — Print the working directory.

use crate::tools::{ExecContext, ExecResult, Tool, ToolArgs};

/// Pwd tool: print the session's working directory.
pub struct Pwd;

impl Tool for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn description(&self) -> &str {
        "Print the working directory"
    }

    fn execute(&self, _args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::success(ctx.session.cwd.clone())
    }
}
