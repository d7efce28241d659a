use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;

use crate::command_utils::{CommandRunner, Invocation};
use crate::config::{resolve_local_path, resolve_remote_path};
use crate::error::SyncError;
use crate::system_config::SystemConfig;

pub const SYNCIGNORE_FILE: &str = ".syncignore";
pub const VCS_METADATA_DIR: &str = ".git";

#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    pub repo_path: String,
    pub host: String,
    pub include_git: bool,
    pub dest: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionRule {
    /// `.syncignore` at the root of the source tree, handed to rsync as-is.
    IgnoreFile(PathBuf),
    VcsMetadata,
    Nothing,
}

impl ExclusionRule {
    pub fn select(local_path: &Path, include_git: bool) -> Self {
        let ignore_file = local_path.join(SYNCIGNORE_FILE);
        if ignore_file.is_file() {
            ExclusionRule::IgnoreFile(ignore_file)
        } else if !include_git {
            ExclusionRule::VcsMetadata
        } else {
            ExclusionRule::Nothing
        }
    }

    pub fn args(&self) -> Vec<OsString> {
        match self {
            ExclusionRule::IgnoreFile(path) => {
                vec!["--exclude-from".into(), path.as_os_str().to_os_string()]
            }
            ExclusionRule::VcsMetadata => vec!["--exclude".into(), VCS_METADATA_DIR.into()],
            ExclusionRule::Nothing => Vec::new(),
        }
    }
}

pub fn mkdir_invocation(ssh_path: &str, host: &str, remote_path: &str) -> Invocation {
    Invocation::new(ssh_path)
        .arg(host)
        .arg(format!("mkdir -p {}", remote_path))
}

pub fn rsync_invocation(
    rsync_path: &str,
    local_path: &Path,
    host: &str,
    remote_path: &str,
    exclusion: &ExclusionRule,
) -> Invocation {
    // Trailing separator: mirror the directory's contents, not the directory.
    let mut source = local_path.as_os_str().to_os_string();
    if !source.to_string_lossy().ends_with('/') {
        source.push("/");
    }

    let mut invocation = Invocation::new(rsync_path).arg("-avz").arg("--delete");
    for arg in exclusion.args() {
        invocation = invocation.arg(arg);
    }
    invocation
        .arg(source)
        .arg(format!("{}:{}", host, remote_path))
}

/// Mirror `options.repo_path` onto `options.host`. Stops at the first failing
/// step; nothing runs remotely until both paths are resolved.
pub fn run<R: CommandRunner>(
    options: &SyncOptions,
    system: &SystemConfig,
    runner: &mut R,
) -> Result<()> {
    let home = system.home_dir.as_deref();

    let local_path = resolve_local_path(&options.repo_path, home)?;
    let remote_path = resolve_remote_path(&local_path, home, options.dest.as_deref())?;

    let mkdir = mkdir_invocation(&system.ssh_path, &options.host, &remote_path);
    println!("Running command: {}", mkdir);
    let status = runner.run(&mkdir)?;
    if !status.success() {
        return Err(SyncError::RemoteCommand {
            host: options.host.clone(),
            code: status.code,
        }
        .into());
    }

    let exclusion = ExclusionRule::select(&local_path, options.include_git);
    debug!("Exclusion rule: {:?}", exclusion);

    let rsync = rsync_invocation(
        &system.rsync_path,
        &local_path,
        &options.host,
        &remote_path,
        &exclusion,
    );
    println!("Running command: {}", rsync);
    let status = runner.run(&rsync)?;
    if !status.success() {
        return Err(SyncError::Transfer { code: status.code }.into());
    }

    Ok(())
}
