use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SystemConfig {
    pub ssh_path: String,
    pub rsync_path: String,
    pub home_dir: Option<PathBuf>,
}

impl SystemConfig {
    pub fn from_env() -> Self {
        let ssh_path = std::env::var("CODE_SYNC_SSH").unwrap_or_else(|_| "ssh".to_string());
        let rsync_path = std::env::var("CODE_SYNC_RSYNC").unwrap_or_else(|_| "rsync".to_string());

        Self {
            ssh_path,
            rsync_path,
            home_dir: dirs::home_dir(),
        }
    }
}
