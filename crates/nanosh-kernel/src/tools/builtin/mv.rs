//! mv — Move (rename) files and directories.

use crate::tools::{ExecContext, ExecResult, Tool, ToolArgs};

/// Mv tool: move files and directories.
pub struct Mv;

impl Tool for Mv {
    fn name(&self) -> &str {
        "mv"
    }

    fn description(&self) -> &str {
        "Move files and directories"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let (Some(src), Some(dest)) = (args.positional(0), args.positional(1)) else {
            return ExecResult::failure(1, "mv: missing file operand");
        };
        let (src, dest) = (src.to_string(), dest.to_string());

        if ctx.vfs.move_node(&src, &dest, &ctx.session.cwd) {
            return ExecResult::success("");
        }

        if ctx.vfs.get_node(&src, &ctx.session.cwd).is_none() {
            ExecResult::failure(1, format!("mv: cannot stat '{src}': No such file or directory"))
        } else {
            ExecResult::failure(1, format!("mv: cannot move '{src}' to '{dest}'"))
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
    fn renames_in_place() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["README.md", "INTRO.md"]);
        let result = Mv.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(result.ok());
        assert!(vfs.get_node("/home/user/README.md", "/").is_none());
        assert!(vfs.get_node("/home/user/INTRO.md", "/").is_some());
    }

    #[test]
    fn moves_directories_without_a_flag() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["/home/guest", "/home/user/guest"]);
        let result = Mv.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(result.ok());
        assert!(vfs.get_node("/home/guest", "/").is_none());
    }

    #[test]
    fn failed_move_keeps_the_source() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["README.md", "/no/such/dir/x"]);
        let result = Mv.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(!result.ok());
        assert!(result.err.contains("cannot move"));
        assert!(vfs.get_node("/home/user/README.md", "/").is_some());
    }
}
