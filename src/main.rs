use anyhow::Result;
use clap::Parser;

use code_sync::command_utils::SystemRunner;
use code_sync::sync::{self, SyncOptions};
use code_sync::system_config::SystemConfig;

#[derive(Parser)]
#[command(name = "code-sync")]
#[command(version, about = "Sync a local code directory to a remote host with rsync over ssh")]
struct Cli {
    /// Local directory to sync
    repo_path: String,

    /// Remote host (user@hostname or ssh alias)
    host: String,

    /// Include the .git directory
    #[arg(long)]
    include_git: bool,

    /// Destination path on the remote host
    #[arg(long)]
    dest: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let options = SyncOptions {
        repo_path: cli.repo_path,
        host: cli.host,
        include_git: cli.include_git,
        dest: cli.dest,
    };

    sync::run(&options, &SystemConfig::from_env(), &mut SystemRunner)?;

    Ok(())
}
