use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Local path \"{}\" does not exist or is not a directory.", .path.display())]
    Validation { path: PathBuf },

    #[error("{message}")]
    Configuration { message: String },

    #[error("Failed to create remote directory on {host} (exit code: {code:?})")]
    RemoteCommand { host: String, code: Option<i32> },

    #[error("rsync failed (exit code: {code:?})")]
    Transfer { code: Option<i32> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
