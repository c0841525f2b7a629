//! find — Search the directory hierarchy.
//!
//! ```text
//! find /home -name README          # substring match on name
//! find . -type d                   # directories only
//! find / -size +100                # larger than 100 bytes
//! ```

use crate::tools::{ExecContext, ExecResult, Tool, ToolArgs};
use crate::vfs::{FindCriteria, NodeType, SizeFilter};

/// Find tool: recursive search with name/type/size criteria.
pub struct Find;

impl Tool for Find {
    fn name(&self) -> &str {
        "find"
    }

    fn description(&self) -> &str {
        "Search for files in a directory hierarchy"
    }

    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        // Options take values, so parse the raw token list by hand.
        let mut path: Option<&str> = None;
        let mut criteria = FindCriteria::default();

        let raw = &args.raw;
        let mut i = 0;
        while i < raw.len() {
            match raw[i].as_str() {
                "-name" => {
                    let Some(value) = raw.get(i + 1) else {
                        return ExecResult::failure(1, "find: missing argument to '-name'");
                    };
                    criteria.name = Some(value.clone());
                    i += 2;
                }
                "-type" => {
                    let Some(value) = raw.get(i + 1) else {
                        return ExecResult::failure(1, "find: missing argument to '-type'");
                    };
                    criteria.kind = Some(match value.as_str() {
                        "f" => NodeType::File,
                        "d" => NodeType::Directory,
                        "l" => NodeType::Symlink,
                        other => {
                            return ExecResult::failure(
                                1,
                                format!("find: invalid argument '{other}' to '-type'"),
                            )
                        }
                    });
                    i += 2;
                }
                "-size" => {
                    let Some(value) = raw.get(i + 1) else {
                        return ExecResult::failure(1, "find: missing argument to '-size'");
                    };
                    let Some(filter) = SizeFilter::parse(value) else {
                        return ExecResult::failure(
                            1,
                            format!("find: invalid argument '{value}' to '-size'"),
                        );
                    };
                    criteria.size = Some(filter);
                    i += 2;
                }
                token if !token.starts_with('-') && path.is_none() => {
                    path = Some(&raw[i]);
                    i += 1;
                }
                // Unknown switches are ignored.
                _ => i += 1,
            }
        }

        let path = path.unwrap_or(".");
        if ctx.vfs.get_node(path, &ctx.session.cwd).is_none() {
            return ExecResult::failure(1, format!("find: '{path}': No such file or directory"));
        }

        let results = ctx.vfs.find(path, &ctx.session.cwd, &criteria);
        ExecResult::success(results.join("\n"))
    }
}
