//! External command execution

use std::path::Path;
use std::process::{Command, Stdio};

use crate::{Error, Result};

/// Runs external tools (`npm`, and whatever an app needs) on behalf of the
/// install workflows.
pub trait ToolRunner: Send + Sync {
    /// Run `program` with `args` in `working_dir`, failing on non-zero exit.
    fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<()>;
}

/// Build a [`Command`] for `program`.
///
/// On Windows tools such as `npm` are `.cmd` scripts that only `cmd` can
/// resolve, so the program is started through `cmd /C`.
fn program_command(program: &str) -> Command {
    #[cfg(windows)]
    {
        let mut c = Command::new("cmd");
        c.args(["/C", program]);
        c
    }
    #[cfg(not(windows))]
    {
        Command::new(program)
    }
}

/// [`ToolRunner`] that spawns the program directly. Each argument reaches the
/// program as-is; nothing is split or expanded by a shell.
///
/// Output is inherited so progress from long installs stays visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<()> {
        let command = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        tracing::info!(%command, dir = %working_dir.display(), "Running");

        let status = program_command(program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                tracing::debug!(error = %e, "Failed to spawn");
                Error::ToolFailed {
                    command: command.clone(),
                    exit_code: None,
                }
            })?;

        if !status.success() {
            return Err(Error::ToolFailed {
                command,
                exit_code: status.code(),
            });
        }
        Ok(())
    }
}
