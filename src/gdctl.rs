//! gdctl process invocation.
//!
//! gdswitch never talks to the compositor itself. It reads the current
//! configuration with `gdctl show --verbose` and applies a new one with
//! `gdctl set <args>`, where the arguments come from [`crate::planner::plan`].
//!
//! [`DisplayTool`] is the seam between the switching workflow and the real
//! process, so the workflow can run against a fake.

use crate::error::{Result, SwitchError};
use std::process::{Command, Output};
use tracing::debug;

/// Source of display status and sink for new configurations.
pub trait DisplayTool {
    /// Return the raw text of a verbose status listing.
    fn show(&self) -> Result<String>;

    /// Apply a configuration; `args` follow the `set` subcommand verbatim.
    fn set(&self, args: &[String]) -> Result<()>;
}

/// The `gdctl` command-line tool.
#[derive(Debug, Clone)]
pub struct Gdctl {
    program: String,
}

impl Gdctl {
    /// Use `program` as the gdctl binary (a name on `PATH` or a full path).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The program this instance invokes.
    pub fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        let command = command_line(&self.program, args);
        debug!(%command, "Running gdctl");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| SwitchError::ToolError {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => output.status.to_string(),
                msg => format!("{}: {}", output.status, msg),
            };
            return Err(SwitchError::ToolError { command, reason });
        }

        Ok(output)
    }
}

impl Default for Gdctl {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_GDCTL)
    }
}

impl DisplayTool for Gdctl {
    fn show(&self) -> Result<String> {
        let output = self.run(&["show", "--verbose"])?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn set(&self, args: &[String]) -> Result<()> {
        let mut full = vec!["set"];
        full.extend(args.iter().map(String::as_str));
        self.run(&full)?;
        Ok(())
    }
}

/// Render a command for messages, e.g. `gdctl set --logical-monitor ...`.
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
