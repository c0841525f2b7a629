//! The Kernel — the heart of nanosh.
//!
//! The Kernel owns and coordinates the core components:
//! - the VFS engine (the filesystem tree)
//! - the session (identity, cwd, hostname)
//! - the tool registry (builtin commands)
//!
//! One call to [`Kernel::execute`] runs one command to completion;
//! there is no internal parallelism and nothing blocks inside the
//! engine.

use tracing::debug;

use crate::seed;
use crate::session::Session;
use crate::tools::{register_builtins, ExecContext, ExecResult, ToolArgs, ToolRegistry};
use crate::vfs::{Node, Vfs};

/// Configuration for kernel initialization.
#[derive(Debug, Clone)]
pub struct KernelConfig {
    /// Hostname shown in the prompt.
    pub hostname: String,
    /// Initial user.
    pub user: String,
    /// Initial group.
    pub group: String,
    /// Initial working directory.
    pub cwd: String,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            hostname: "nanokernel".to_string(),
            user: "user".to_string(),
            group: "user".to_string(),
            cwd: "/home/user".to_string(),
        }
    }
}

/// Owns the VFS, session and registry; dispatches command lines.
pub struct Kernel {
    vfs: Vfs,
    session: Session,
    tools: ToolRegistry,
}

impl Kernel {
    /// Create a kernel over the default seed filesystem.
    pub fn new(config: KernelConfig) -> Self {
        Self::with_seed(config, &seed::default_tree())
    }

    /// Create a kernel over a custom seed tree.
    ///
    /// The seed is deep-copied; kernels never share filesystem state.
    pub fn with_seed(config: KernelConfig, seed: &Node) -> Self {
        let vfs = Vfs::new(seed);
        let session = Session::new(config.user, config.group, config.cwd, config.hostname);
        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools);
        Self { vfs, session, tools }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn vfs(&self) -> &Vfs {
        &self.vfs
    }

    /// Registered command names, sorted (for completion).
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.names()
    }

    /// The login banner, if the seed carries `/etc/motd`.
    pub fn motd(&self) -> Option<&str> {
        self.vfs.get_node("/etc/motd", "/")?.content()
    }

    /// Execute one command line.
    ///
    /// The line is split on whitespace; the first token selects the
    /// tool, the rest become its arguments. An empty line is a no-op
    /// success.
    pub fn execute(&mut self, line: &str) -> ExecResult {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return ExecResult::success("");
        };
        let args = ToolArgs::parse(tokens);

        let Some(tool) = self.tools.get(name) else {
            return ExecResult::failure(127, format!("sh: command not found: {name}"));
        };

        debug!(command = name, "dispatch");
        let mut ctx = ExecContext::new(&mut self.vfs, &mut self.session);
        tool.execute(&args, &mut ctx)
    }
}
