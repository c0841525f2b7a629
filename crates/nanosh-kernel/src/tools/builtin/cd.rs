//! cd — Change the working directory.

use crate::tools::{ExecContext, ExecResult, Tool, ToolArgs};

/// Cd tool: change the session's working directory.
pub struct Cd;

impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn description(&self) -> &str {
        "Change the working directory"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let target = match args.positional(0) {
            None => ctx.home_dir(),
            Some("-") => match &ctx.session.prev_cwd {
                Some(prev) => prev.clone(),
                None => return ExecResult::failure(1, "cd: OLDPWD not set"),
            },
            Some(path) => path.to_string(),
        };

        match ctx.vfs.get_node(&target, &ctx.session.cwd) {
            None => ExecResult::failure(1, format!("cd: {target}: No such file or directory")),
            Some(node) if !node.is_dir() => {
                ExecResult::failure(1, format!("cd: {target}: Not a directory"))
            }
            Some(_) => {
                let Some(canonical) = ctx.vfs.canonical_path(&target, &ctx.session.cwd) else {
                    return ExecResult::failure(1, format!("cd: {target}: No such file or directory"));
                };
                ctx.session.set_cwd(canonical);
                ExecResult::success("")
            }
        }
    }
}
