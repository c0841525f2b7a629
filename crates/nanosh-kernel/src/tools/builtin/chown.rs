//! chown — Change file owner and group.

use crate::tools::{ExecContext, ExecResult, Tool, ToolArgs};

/// Chown tool: apply an `owner`, `:group` or `owner:group` spec.
pub struct Chown;

impl Tool for Chown {
    fn name(&self) -> &str {
        "chown"
    }

    fn description(&self) -> &str {
        "Change file owner and group"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let (Some(spec), Some(path)) = (args.positional(0), args.positional(1)) else {
            return ExecResult::failure(1, "chown: missing operand");
        };
        let (spec, path) = (spec.to_string(), path.to_string());

        if ctx.vfs.chown(&path, &spec, &ctx.session.cwd) {
            ExecResult::success("")
        } else {
            ExecResult::failure(
                1,
                format!("chown: cannot access '{path}': No such file or directory"),
            )
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
    fn changes_owner_and_group() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["guest:guest", "README.md"]);
        let result = Chown.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(result.ok());
        let node = vfs.get_node("/home/user/README.md", "/").unwrap();
        assert_eq!(node.owner, "guest");
        assert_eq!(node.group, "guest");
    }

    #[test]
    fn owner_only_leaves_group() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["root", "README.md"]);
        assert!(Chown.execute(&args, &mut ExecContext::new(&mut vfs, &mut session)).ok());
        let node = vfs.get_node("/home/user/README.md", "/").unwrap();
        assert_eq!(node.owner, "root");
        assert_eq!(node.group, "user");
    }

    #[test]
    fn missing_path_fails() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(["root", "/ghost"]);
        let result = Chown.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(result.err.contains("cannot access"));
    }
}
