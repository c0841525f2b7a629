//! whoami — Print the acting user.

use crate::tools::{ExecContext, ExecResult, Tool, ToolArgs};

/// Whoami tool: print the session's user.
pub struct Whoami;

impl Tool for Whoami {
    fn name(&self) -> &str {
        "whoami"
    }

    fn description(&self) -> &str {
        "Print the current user"
    }

    fn execute(&self, _args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::success(ctx.session.user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::session::Session;
    use crate::vfs::Vfs;

    #[test]
    fn prints_user() {
        let mut vfs = Vfs::new(&seed::default_tree());
        let mut session = Session::new("root", "root", "/", "host");
        let result =
            Whoami.execute(&ToolArgs::default(), &mut ExecContext::new(&mut vfs, &mut session));
        assert_eq!(result.out, "root");
    }
}
