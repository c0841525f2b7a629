//! write — Write text to a file.
//!
//! Replaces the file's content, creating the file if it does not
//! exist. The shell has no redirection, so this is the way text gets
//! into files.

use crate::tools::{ExecContext, ExecResult, Tool, ToolArgs};
use crate::vfs::NodeType;

/// Write tool: write text to a file.
pub struct Write;

impl Tool for Write {
    fn name(&self) -> &str {
        "write"
    }

    fn description(&self) -> &str {
        "Write text to a file"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(path) = args.positional(0) else {
            return ExecResult::failure(1, "write: missing file operand");
        };
        let path = path.to_string();
        let content = args.positional[1..].join(" ");

        if ctx.vfs.update_file_content(&path, &ctx.session.cwd, &content) {
            return ExecResult::success("");
        }
        // Not an existing file; try to create one.
        if ctx.vfs.create_node(&path, &ctx.session.cwd, NodeType::File, &content) {
            return ExecResult::success("");
        }
        ExecResult::failure(1, format!("write: cannot write '{path}'"))
    }
}
