//! ls — List directory contents.

use crate::tools::{ExecContext, ExecResult, Tool, ToolArgs};
use crate::vfs::NodeType;

/// Ls tool: list directory contents.
pub struct Ls;

impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn description(&self) -> &str {
        "List directory contents"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let long = args.has_flag("l");
        let classify = args.has_flag("F");
        let path = args.positional(0).unwrap_or(".");

        let Some(nodes) = ctx.vfs.list_nodes(path, &ctx.session.cwd) else {
            return ExecResult::failure(
                1,
                format!("ls: cannot access '{path}': No such file or directory"),
            );
        };

        let mut lines = Vec::with_capacity(nodes.len());
        for node in nodes {
            let mut name = node.name.clone();
            if classify {
                match node.node_type() {
                    NodeType::Directory => name.push('/'),
                    NodeType::Symlink => name.push('@'),
                    NodeType::File if node.permissions.contains('x') => name.push('*'),
                    NodeType::File => {}
                }
            }
            if long {
                if let Some(target) = node.target() {
                    name.push_str(&format!(" -> {target}"));
                }
                lines.push(format!(
                    "{} {} {} {:>5} {} {}",
                    node.permissions,
                    node.owner,
                    node.group,
                    node.size,
                    node.modified.format("%b %e %H:%M"),
                    name
                ));
            } else {
                lines.push(name);
            }
        }

        ExecResult::success(lines.join(if long { "\n" } else { "  " }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::session::Session;
    use crate::vfs::Vfs;

    fn run(tokens: &[&str]) -> ExecResult {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        let args = ToolArgs::parse(tokens.iter().copied());
        Ls.execute(&args, &mut ExecContext::new(&mut vfs, &mut session))
    }

    #[test]
    fn lists_etc() {
        let result = run(&["/etc"]);
        assert!(result.ok());
        assert_eq!(result.out, "passwd  shadow  sudoers  motd");
    }

    #[test]
    fn defaults_to_cwd() {
        // Session cwd is /home/user.
        let result = run(&[]);
        assert!(result.ok());
        assert_eq!(result.out, "README.md");
    }

    #[test]
    fn long_format_shows_metadata() {
        let result = run(&["-l", "/etc"]);
        assert!(result.ok());
        let first = result.out.lines().next().unwrap();
        assert!(first.starts_with("-rw-r--r-- root root"));
        assert!(first.ends_with("passwd"));
    }

    #[test]
    fn classify_marks_directories() {
        let result = run(&["-F", "/"]);
        assert!(result.ok());
        assert!(result.out.contains("etc/"));
        assert!(result.out.contains("home/"));
    }

    #[test]
    fn long_format_shows_symlink_target() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::default();
        vfs.create_symlink("/home/user/link", "README.md", "/");
        let args = ToolArgs::parse(["-l"]);
        let result = Ls.execute(&args, &mut ExecContext::new(&mut vfs, &mut session));
        assert!(result.out.contains("link -> README.md"));
    }

    #[test]
    fn missing_path_fails() {
        let result = run(&["/nope"]);
        assert!(!result.ok());
        assert!(result.err.contains("No such file or directory"));
    }
}
