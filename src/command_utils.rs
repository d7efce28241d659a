use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::Command;

use anyhow::{Context, Result};
use log::debug;

use crate::error::SyncError;

/// A single external command: the program and its argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    #[cfg(test)]
    pub(crate) fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Exit status of a finished command. `code` is `None` when the child was
/// terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait CommandRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<CommandStatus>;
}

/// Runs commands on the local machine with inherited stdio.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<CommandStatus> {
        execute_command(&invocation.program, &invocation.args)
    }
}

/// Execute a command with debug logging
pub fn execute_command(cmd: &str, args: &[OsString]) -> Result<CommandStatus> {
    let line = Invocation {
        program: cmd.to_string(),
        args: args.to_vec(),
    };
    debug!("Executing command: {}", line);

    let status = Command::new(cmd)
        .args(args)
        .status()
        .map_err(SyncError::from)
        .with_context(|| format!("Failed to run {}", cmd))?;

    if status.success() {
        debug!("Command succeeded: {}", line);
    } else {
        debug!("Command failed: {} (exit code: {:?})", line, status.code());
    }

    Ok(CommandStatus {
        code: status.code(),
    })
}
