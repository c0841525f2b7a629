//! ln — Create symbolic links.
//!
//! Hard links have no representation in the tree (there are no
//! inodes), so only `-s` is supported.

use crate::tools::{ExecContext, ExecResult, Tool, ToolArgs};

/// Ln tool: create symbolic links.
pub struct Ln;

impl Tool for Ln {
    fn name(&self) -> &str {
        "ln"
    }

    fn description(&self) -> &str {
        "Create symbolic links"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        if !args.has_flag("s") {
            return ExecResult::failure(1, "ln: hard links not supported, use -s");
        }
        let (Some(target), Some(link)) = (args.positional(0), args.positional(1)) else {
            return ExecResult::failure(1, "ln: missing operand");
        };
        let (target, link) = (target.to_string(), link.to_string());

        // The target is stored as-is; it may be relative, absolute, or
        // dangling.
        if ctx.vfs.create_symlink(&link, &target, &ctx.session.cwd) {
            ExecResult::success("")
        } else {
            ExecResult::failure(1, format!("ln: failed to create symbolic link '{link}'"))
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
    fn creates_symlink() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["-s", "README.md", "link"]);
        let result = Ln.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(result.ok());

        let node = vfs.get_node_nofollow("/home/user/link", "/").unwrap();
        assert_eq!(node.target(), Some("README.md"));
        assert_eq!(node.permissions, "lrwxrwxrwx");
    }

    #[test]
    fn dangling_target_is_fine() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["-s", "/not/yet/there", "future"]);
        let result = Ln.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(result.ok());
        assert!(vfs.get_node_nofollow("/home/user/future", "/").is_some());
    }

    #[test]
    fn without_s_is_rejected() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["README.md", "hardlink"]);
        let result = Ln.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(!result.ok());
        assert!(result.err.contains("hard links not supported"));
    }

    #[test]
    fn missing_parent_fails() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["-s", "x", "/no/dir/link"]);
        let result = Ln.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(!result.ok());
    }
}
