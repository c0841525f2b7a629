//! mkdir — Create a directory.

use crate::tools::{ExecContext, ExecResult, Tool, ToolArgs};
use crate::vfs::NodeType;

/// Mkdir tool: create a directory.
pub struct Mkdir;

impl Tool for Mkdir {
    fn name(&self) -> &str {
        "mkdir"
    }

    fn description(&self) -> &str {
        "Create a directory"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(path) = args.positional(0) else {
            return ExecResult::failure(1, "mkdir: missing operand");
        };

        if ctx.vfs.create_node(path, &ctx.session.cwd, NodeType::Directory, "") {
            ExecResult::success("")
        } else {
            ExecResult::failure(1, format!("mkdir: cannot create directory '{path}'"))
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
    fn creates_directory() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["projects"]);
        let result = Mkdir.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(result.ok());
        assert!(vfs.get_node("/home/user/projects", "/").unwrap().is_dir());
    }

    #[test]
    fn intermediate_directories_are_not_created() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["/a/b/c"]);
        let result = Mkdir.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(!result.ok());
        assert!(result.err.contains("cannot create directory"));
    }

    #[test]
    fn collision_fails() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["/etc"]);
        let result = Mkdir.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(!result.ok());
    }
}
