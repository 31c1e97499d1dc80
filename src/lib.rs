mod auth;
mod commands;
mod config;
mod downloader;
mod error;
mod fabric;
mod install;
mod launch;
mod logger;
mod mods;
mod progress;

use config::LauncherConfig;
use logger::FileLogger;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .manage(commands::AppState::default())
        .invoke_handler(tauri::generate_handler![
            commands::launch,
            commands::load_config,
            commands::check_java,
        ])
        .setup(|app| {
            match LauncherConfig::load(None).and_then(|config| config.game_dir()) {
                Ok(game_dir) => {
                    if let Err(err) = FileLogger::init(&game_dir) {
                        eprintln!("logger init failed: {err}");
                    }
                }
                Err(err) => eprintln!("config unavailable, file logging disabled: {err}"),
            }

            #[cfg(debug_assertions)]
            {
                use tauri::Manager;
                let window = app.get_webview_window("main").unwrap();
                window.open_devtools();
            }
            #[cfg(not(debug_assertions))]
            let _ = app;

            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
