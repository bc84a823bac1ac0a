//! First-time setup of the working copy

use log::info;
use tx_sync_config::Settings;

use crate::error::Result;
use crate::git::{Git, TARGET_REMOTE};
use crate::process::CommandRunner;

/// Setup runs when asked for or when there is no working copy yet
pub fn needs_setup(settings: &Settings, setup_requested: bool) -> bool {
    setup_requested || !settings.working_repo.path.exists()
}

/// Clone the working repository, set the commit identity and add the
/// upstream repository as the `target` remote
pub async fn bootstrap(runner: &dyn CommandRunner, settings: &Settings) -> Result<()> {
    let path = &settings.working_repo.path;
    info!("Setting up git repo in {}", path.display());

    Git::clone_into(runner, &settings.working_repo.url, path).await?;

    let git = Git::new(runner, path);
    git.config("user.name", &settings.github.user).await?;
    git.config("user.email", &settings.github.email).await?;
    git.remote_add(TARGET_REMOTE, &settings.target_repo.url).await?;

    info!("Done");
    Ok(())
}
