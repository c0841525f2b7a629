//! rm — Remove files and directories.

use crate::tools::{ExecContext, ExecResult, Tool, ToolArgs};

/// Rm tool: remove files and directories.
pub struct Rm;

impl Tool for Rm {
    fn name(&self) -> &str {
        "rm"
    }

    fn description(&self) -> &str {
        "Remove files and directories"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let recursive = args.has_flag("r") || args.has_flag("rf") || args.has_flag("R");
        let Some(path) = args.positional(0) else {
            return ExecResult::failure(1, "rm: missing operand");
        };

        if ctx.vfs.remove_node(path, &ctx.session.cwd, recursive) {
            return ExecResult::success("");
        }

        // The engine only reports absence of effect; recover the
        // reason here for the message.
        match ctx.vfs.get_node_nofollow(path, &ctx.session.cwd) {
            None => ExecResult::failure(
                1,
                format!("rm: cannot remove '{path}': No such file or directory"),
            ),
            Some(node) if node.is_dir() && !recursive => ExecResult::failure(
                1,
                format!("rm: cannot remove '{path}': Directory not empty"),
            ),
            Some(_) => ExecResult::failure(1, format!("rm: cannot remove '{path}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::session::Session;
    use crate::vfs::Vfs;

    #[test]
    fn removes_file() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["README.md"]);
        let result = Rm.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(result.ok());
        assert!(vfs.get_node("/home/user/README.md", "/").is_none());
    }

    #[test]
    fn nonempty_directory_needs_r() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();

        let args = ToolArgs::parse(["/etc"]);
        let result = Rm.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(!result.ok());
        assert!(result.err.contains("Directory not empty"));

        let args = ToolArgs::parse(["-r", "/etc"]);
        let result = Rm.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(result.ok());
        assert!(vfs.get_node("/etc", "/").is_none());
    }

    #[test]
    fn removes_the_link_not_the_target() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        vfs.create_symlink("/home/user/link", "/etc/motd", "/");

        let args = ToolArgs::parse(["link"]);
        let result = Rm.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(result.ok());
        assert!(vfs.get_node_nofollow("/home/user/link", "/").is_none());
        assert!(vfs.get_node("/etc/motd", "/").is_some());
    }

    #[test]
    fn missing_path_fails() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["/nope"]);
        let result = Rm.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(result.err.contains("No such file or directory"));
    }
}
