//! Execution context for tools.

use crate::session::Session;
use crate::vfs::Vfs;

/// Everything a tool sees for one command execution.
///
/// Both borrows last only for the call — the kernel hands them out per
/// command, keeping the engine and session free of shared ownership.
pub struct ExecContext<'a> {
    /// The filesystem engine.
    pub vfs: &'a mut Vfs,
    /// The acting session (identity, cwd, hostname).
    pub session: &'a mut Session,
}

impl<'a> ExecContext<'a> {
    pub fn new(vfs: &'a mut Vfs, session: &'a mut Session) -> Self {
        Self { vfs, session }
    }

    /// The session's home directory.
    pub fn home_dir(&self) -> String {
        if self.session.user == "root" {
            "/root".to_string()
        } else {
            format!("/home/{}", self.session.user)
        }
    }
}
