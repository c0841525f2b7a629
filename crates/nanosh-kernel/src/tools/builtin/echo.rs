//! echo — Print arguments.

use crate::tools::{ExecContext, ExecResult, Tool, ToolArgs};

/// Echo tool: print arguments verbatim.
pub struct Echo;

impl Tool for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Print arguments"
    }

    fn execute(&self, args: &ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        // Raw tokens: echo does not interpret dashes.
        ExecResult::success(args.raw.join(" "))
    }
}
