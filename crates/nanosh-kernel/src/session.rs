//! Session state for one interactive shell.
//!
//! The acting identity, working directory and hostname live here and
//! are passed by reference into every command execution — there are no
//! ambient globals.

/// Per-session state the VFS consults but does not own.
#[derive(Debug, Clone)]
pub struct Session {
    /// Acting username, e.g. `user` or `root`.
    pub user: String,
    /// Acting group.
    pub group: String,
    /// Current working directory (canonical absolute path).
    pub cwd: String,
    /// Previous working directory, for `cd -`.
    pub prev_cwd: Option<String>,
    /// Hostname shown in the prompt.
    pub hostname: String,
}

impl Session {
    pub fn new(
        user: impl Into<String>,
        group: impl Into<String>,
        cwd: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            group: group.into(),
            cwd: cwd.into(),
            prev_cwd: None,
            hostname: hostname.into(),
        }
    }

    /// Change the working directory, remembering the old one.
    pub fn set_cwd(&mut self, cwd: impl Into<String>) {
        self.prev_cwd = Some(std::mem::replace(&mut self.cwd, cwd.into()));
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new("user", "user", "/home/user", "nanokernel")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_cwd_remembers_previous() {
        let mut session = Session::default();
        assert_eq!(session.cwd, "/home/user");
        assert!(session.prev_cwd.is_none());

        session.set_cwd("/etc");
        assert_eq!(session.cwd, "/etc");
        assert_eq!(session.prev_cwd.as_deref(), Some("/home/user"));
    }
}
