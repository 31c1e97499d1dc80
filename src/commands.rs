use std::sync::atomic::{AtomicBool, Ordering};

use tauri::{AppHandle, Manager, State};

use crate::auth::Authenticator;
use crate::config::LauncherConfig;
use crate::error::Result;
use crate::install::Installer;
use crate::launch::{build_classpath, build_jvm_args, find_java, start_game};
use crate::progress::Progress;

/// Shared launcher state. The flag stays set from the moment a launch is
/// accepted until the game process exits, so a second click cannot start an
/// interleaved install.
#[derive(Default)]
pub struct AppState {
    launch_active: AtomicBool,
}

/// Install, sign in and start the game, streaming progress lines to the
/// `launcher-log` event. The frontend treats this as fire-and-forget; the
/// returned error string doubles as the final progress line.
#[tauri::command]
pub async fn launch(app: AppHandle, state: State<'_, AppState>) -> std::result::Result<(), String> {
    if state
        .launch_active
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err("A launch is already in progress".to_string());
    }

    let progress = Progress::new(app.clone());
    match run_launch(&app, &progress).await {
        Ok(()) => Ok(()),
        Err(err) => {
            state.launch_active.store(false, Ordering::SeqCst);
            log::error!("launch failed: {err}");
            progress.line(format!("Launch failed: {err}"));
            Err(err.to_string())
        }
    }
}

async fn run_launch(app: &AppHandle, progress: &Progress) -> Result<()> {
    let config = LauncherConfig::load(None)?;
    let mut installer = Installer::new(&config)?;
    let game_dir = installer.game_dir().to_path_buf();

    let profile = Authenticator::new(&game_dir).sign_in(app, progress).await?;

    let version_file = installer.install(progress).await?;

    progress.line("Starting the game...");
    let classpath = build_classpath(&game_dir)?;
    let args = build_jvm_args(&config, &version_file, &profile, &game_dir, classpath)?;
    let child = start_game(&game_dir, &args)?;
    progress.line(format!("Game started (pid {})", child.id()));

    // Reap the child off the command path; the launch guard clears once the
    // game is gone.
    let app = app.clone();
    std::thread::spawn(move || {
        let mut child = child;
        let progress = Progress::new(app.clone());
        match child.wait() {
            Ok(status) => progress.line(format!("Game exited ({status})")),
            Err(err) => progress.line(format!("Game exited (status unknown: {err})")),
        }
        app.state::<AppState>()
            .launch_active
            .store(false, Ordering::SeqCst);
    });

    Ok(())
}

/// Effective configuration: the config file when present, defaults otherwise.
#[tauri::command]
pub fn load_config() -> std::result::Result<LauncherConfig, String> {
    LauncherConfig::load(None).map_err(|e| e.to_string())
}

/// Whether a usable Java runtime can be located.
#[tauri::command]
pub fn check_java() -> bool {
    find_java().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_guard_admits_one_flight() {
        let state = AppState::default();
        assert!(state
            .launch_active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok());
        assert!(state
            .launch_active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err());

        state.launch_active.store(false, Ordering::SeqCst);
        assert!(state
            .launch_active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok());
    }
}
