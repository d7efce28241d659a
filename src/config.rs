use std::path::{Component, Path, PathBuf};

use anyhow::Result;
use log::debug;

use crate::error::SyncError;

/// Expand a leading `~` or `~/` against `home`. Other forms (`~user`) are
/// left untouched, as is everything when no home directory is known.
pub fn expand_tilde(raw: &str, home: Option<&Path>) -> PathBuf {
    match home {
        Some(home) if raw == "~" => home.to_path_buf(),
        Some(home) => match raw.strip_prefix("~/") {
            Some(rest) => home.join(rest),
            None => PathBuf::from(raw),
        },
        None => PathBuf::from(raw),
    }
}

/// Make `path` absolute against the current directory and drop `.`/`..`
/// components lexically. Symlinks are left in place.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map_err(SyncError::from)?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

/// Turn the user-supplied source path into an absolute directory path.
pub fn resolve_local_path(raw: &str, home: Option<&Path>) -> Result<PathBuf> {
    let resolved = absolutize(&expand_tilde(raw, home))?;

    // is_dir follows symlinks, so a linked project directory is accepted.
    if !resolved.is_dir() {
        return Err(SyncError::Validation { path: resolved }.into());
    }

    debug!("Resolved local path: {}", resolved.display());
    Ok(resolved)
}

/// Pick the remote directory: `dest` verbatim if given, otherwise the path of
/// `local` relative to `home`, re-rooted under the remote `~`.
pub fn resolve_remote_path(local: &Path, home: Option<&Path>, dest: Option<&str>) -> Result<String> {
    if let Some(dest) = dest {
        debug!("Using explicit destination: {}", dest);
        return Ok(dest.to_string());
    }

    let home = home.ok_or_else(|| SyncError::Configuration {
        message: "Cannot determine the home directory. Please specify --dest.".to_string(),
    })?;
    let home = absolutize(home)?;

    let relative = local.strip_prefix(&home).map_err(|_| SyncError::Configuration {
        message: "Local path is outside the home directory. Please specify --dest.".to_string(),
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            let part = part.to_str().ok_or_else(|| SyncError::Configuration {
                message: format!(
                    "Local path \"{}\" is not valid UTF-8. Please specify --dest.",
                    local.display()
                ),
            })?;
            parts.push(part);
        }
    }

    let remote_path = if parts.is_empty() {
        "~".to_string()
    } else {
        format!("~/{}", parts.join("/"))
    };

    debug!("Derived remote path {} from {}", remote_path, local.display());
    Ok(remote_path)
}
