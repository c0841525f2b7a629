//! Core tool traits and types.

use std::collections::HashSet;

use super::context::ExecContext;

/// The result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i32,
    /// Standard output.
    pub out: String,
    /// Standard error.
    pub err: String,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self { code: 0, out: out.into(), err: String::new() }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i32, err: impl Into<String>) -> Self {
        Self { code, out: String::new(), err: err.into() }
    }

    /// True if the command succeeded (exit code 0).
    pub fn ok(&self) -> bool {
        self.code == 0
    }
}

impl Default for ExecResult {
    fn default() -> Self {
        Self::success("")
    }
}

/// Tokenized arguments for one command invocation.
///
/// Tokens starting with `-` are collected as flags with their dashes
/// stripped; everything else is positional. `raw` keeps the original
/// token list for tools that do their own option parsing (e.g. `find`,
/// whose options take values).
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// All tokens, in order, as given.
    pub raw: Vec<String>,
    /// Non-flag tokens in order.
    pub positional: Vec<String>,
    /// Flag names with leading dashes stripped (`-l` → `l`).
    pub flags: HashSet<String>,
}

impl ToolArgs {
    /// Split tokens into flags and positionals.
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = Self::default();
        for token in tokens {
            let token = token.into();
            // A lone "-" is an operand (`cd -`), not a flag.
            if token == "-" {
                args.positional.push(token.clone());
            } else if let Some(stripped) = token.strip_prefix('-') {
                let name = stripped.trim_start_matches('-');
                if !name.is_empty() {
                    args.flags.insert(name.to_string());
                }
            } else {
                args.positional.push(token.clone());
            }
            args.raw.push(token);
        }
        args
    }

    /// Get a positional argument by index.
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// Check whether a flag was given.
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }
}

/// A command that can be executed against the VFS and session.
pub trait Tool {
    /// The tool's name (used for lookup).
    fn name(&self) -> &str;

    /// Short description for help text.
    fn description(&self) -> &str;

    /// Execute the tool with the given arguments and context.
    fn execute(&self, args: &ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult;
}
