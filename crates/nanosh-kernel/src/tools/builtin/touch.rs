//! touch — Create an empty file.

use crate::tools::{ExecContext, ExecResult, Tool, ToolArgs};
use crate::vfs::NodeType;

/// Touch tool: create an empty file.
pub struct Touch;

impl Tool for Touch {
    fn name(&self) -> &str {
        "touch"
    }

    fn description(&self) -> &str {
        "Create an empty file"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(path) = args.positional(0) else {
            return ExecResult::failure(1, "touch: missing file operand");
        };

        if ctx.vfs.create_node(path, &ctx.session.cwd, NodeType::File, "") {
            ExecResult::success("")
        } else {
            ExecResult::failure(1, format!("touch: cannot touch '{path}'"))
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
    fn creates_empty_file_in_cwd() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["notes.txt"]);
        let result = Touch.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(result.ok());

        let node = vfs.get_node("/home/user/notes.txt", "/").unwrap();
        assert_eq!(node.content(), Some(""));
        assert_eq!(node.size, 0);
    }

    #[test]
    fn existing_name_fails() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["README.md"]);
        let result = Touch.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(!result.ok());
    }

    #[test]
    fn missing_parent_fails() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["/no/where/f"]);
        let result = Touch.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(!result.ok());
        assert!(result.err.contains("cannot touch"));
    }
}
