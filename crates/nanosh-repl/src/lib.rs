//! nanosh REPL — the interactive front end.
//!
//! A thin client over the kernel: it reads lines, hands them to
//! [`Kernel::execute`], and prints the result. It owns everything the
//! engine does not: the prompt, the motd banner, history persistence,
//! and turning results into terminal output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::info;

use nanosh_kernel::{Kernel, KernelConfig, Session};

/// REPL state: the kernel plus the line editor.
pub struct Repl {
    kernel: Kernel,
    editor: DefaultEditor,
}

impl Repl {
    /// Create a REPL over the default seed filesystem.
    pub fn new() -> Result<Self> {
        Self::with_config(KernelConfig::default())
    }

    /// Create a REPL with a custom kernel configuration.
    pub fn with_config(config: KernelConfig) -> Result<Self> {
        let kernel = Kernel::new(config);
        let editor = DefaultEditor::new().context("initializing line editor")?;
        Ok(Self { kernel, editor })
    }

    /// Run the interactive loop until EOF or `exit`.
    pub fn run(&mut self) -> Result<()> {
        if let Some(motd) = self.kernel.motd() {
            println!("{motd}\n");
        }
        info!("session started");

        let history = history_path();
        if let Some(path) = &history {
            // Missing history is fine on first run.
            let _ = self.editor.load_history(path);
        }

        loop {
            let line = match self.editor.readline(&prompt(self.kernel.session())) {
                Ok(line) => line,
                // ^C drops the current line, ^D ends the session.
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e).context("reading input"),
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "exit" {
                break;
            }
            let _ = self.editor.add_history_entry(line);

            let result = self.kernel.execute(line);
            if !result.out.is_empty() {
                println!("{}", result.out);
            }
            if !result.err.is_empty() {
                eprintln!("{}", result.err);
            }
        }

        if let Some(path) = &history {
            let _ = self.editor.save_history(path);
        }
        println!("logout");
        Ok(())
    }
}

/// Run the interactive REPL with defaults.
pub fn run() -> Result<()> {
    Repl::new()?.run()
}

/// Execute a single command line and print its output (for `-c`).
///
/// Returns the command's exit code.
pub fn run_command(cmd: &str) -> i32 {
    let mut kernel = Kernel::new(KernelConfig::default());
    let result = kernel.execute(cmd);
    if !result.out.is_empty() {
        println!("{}", result.out);
    }
    if !result.err.is_empty() {
        eprintln!("{}", result.err);
    }
    result.code
}

fn prompt(session: &Session) -> String {
    format!("{}@{}:{}$ ", session.user, session.hostname, session.cwd)
}

fn history_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "nanosh")?;
    std::fs::create_dir_all(dirs.data_dir()).ok()?;
    Some(dirs.data_dir().join("history"))
}
