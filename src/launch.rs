use std::path::{Path, PathBuf};
use std::process::{Child, Command};

use sysinfo::System;
use walkdir::WalkDir;

use crate::auth::AuthResult;
use crate::config::LauncherConfig;
use crate::error::{LauncherError, Result};
use crate::install::VersionFile;

const LAUNCHER_BRAND: &str = "nimbus";
const LAUNCHER_VERSION: &str = env!("CARGO_PKG_VERSION");

const FABRIC_MAIN_CLASS: &str = "net.fabricmc.loader.impl.launch.knot.KnotClient";
const FABRIC_EMU_PROPERTY: &str = "-DFabricMcEmu=net.minecraft.client.main.Main";

const MIN_HEAP_GB: u64 = 2;
const MAX_AUTO_HEAP_GB: u64 = 6;

/// Natives directory name for the current platform, matching the layout the
/// installer produced.
pub fn natives_dir_name() -> Result<&'static str> {
    match std::env::consts::OS {
        "linux" => Ok("linux"),
        "macos" => Ok("osx"),
        "windows" => Ok("windows"),
        other => Err(LauncherError::UnsupportedPlatform(other.to_string())),
    }
}

fn classpath_separator() -> &'static str {
    if cfg!(windows) {
        ";"
    } else {
        ":"
    }
}

/// Every regular file under `client/`, the platform natives directory and
/// `libraries/`, joined with the platform separator.
pub fn build_classpath(game_dir: &Path) -> Result<String> {
    let roots = [
        game_dir.join("client"),
        game_dir.join("natives").join(natives_dir_name()?),
        game_dir.join("libraries"),
    ];

    let mut entries = Vec::new();
    for root in roots {
        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry
                .path()
                .to_str()
                .ok_or_else(|| LauncherError::NonUtf8Path(entry.path().to_path_buf()))?;
            entries.push(path.to_string());
        }
    }
    Ok(entries.join(classpath_separator()))
}

/// Heap cap in GiB: the configured value if set, otherwise half of total
/// system memory clamped to a sane range.
pub fn max_heap_gb(configured: Option<u64>, total_memory_bytes: u64) -> u64 {
    match configured {
        Some(gb) => gb.max(1),
        None => {
            let half_gb = total_memory_bytes / 2 / (1024 * 1024 * 1024);
            half_gb.clamp(MIN_HEAP_GB, MAX_AUTO_HEAP_GB)
        }
    }
}

fn total_memory_bytes() -> u64 {
    let mut sys = System::new();
    sys.refresh_memory();
    sys.total_memory()
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| LauncherError::NonUtf8Path(path.to_path_buf()))
}

/// Full argument vector for the java invocation: JVM flags, main class,
/// then game arguments.
pub fn build_jvm_args(
    config: &LauncherConfig,
    version_file: &VersionFile,
    profile: &AuthResult,
    game_dir: &Path,
    classpath: String,
) -> Result<Vec<String>> {
    let natives_path = game_dir.join("natives").join(natives_dir_name()?);
    let assets_dir = game_dir.join("assets");
    let heap_gb = max_heap_gb(config.max_memory_gb, total_memory_bytes());

    let mut args = vec![
        format!("-Djava.library.path={}", path_str(&natives_path)?),
        format!("-Dminecraft.launcher.brand={LAUNCHER_BRAND}"),
        format!("-Dminecraft.launcher.version={LAUNCHER_VERSION}"),
        format!("-Xmx{heap_gb}G"),
        "-XX:+UnlockExperimentalVMOptions".to_string(),
        "-XX:+UseG1GC".to_string(),
        "-XX:G1NewSizePercent=20".to_string(),
        "-XX:G1ReservePercent=20".to_string(),
        "-XX:MaxGCPauseMillis=50".to_string(),
        "-XX:G1HeapRegionSize=32M".to_string(),
    ];
    args.extend(config.extra_jvm_args.iter().cloned());

    args.push("-cp".to_string());
    args.push(classpath);

    if config.fabric {
        args.push(FABRIC_EMU_PROPERTY.to_string());
        args.push(FABRIC_MAIN_CLASS.to_string());
    } else {
        args.push(version_file.main_class.clone());
    }

    args.extend([
        "--username".to_string(),
        profile.username.clone(),
        "--version".to_string(),
        config.minecraft_version.clone(),
        "--gameDir".to_string(),
        path_str(game_dir)?.to_string(),
        "--assetsDir".to_string(),
        path_str(&assets_dir)?.to_string(),
        "--assetIndex".to_string(),
        version_file.asset_index.id.clone(),
        "--uuid".to_string(),
        profile.uuid.clone(),
        "--accessToken".to_string(),
        profile.access_token.clone(),
        "--userType".to_string(),
        "msa".to_string(),
        "--versionType".to_string(),
        "release".to_string(),
    ]);

    Ok(args)
}

/// `$JAVA_HOME/bin/java` when it exists, otherwise `java` from `PATH`.
pub fn find_java() -> Result<PathBuf> {
    let java_binary = if cfg!(windows) { "java.exe" } else { "java" };

    if let Ok(java_home) = std::env::var("JAVA_HOME") {
        let candidate = Path::new(&java_home).join("bin").join(java_binary);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    let probe = if cfg!(windows) { "where" } else { "which" };
    let on_path = Command::new(probe)
        .arg("java")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);
    if on_path {
        return Ok(PathBuf::from("java"));
    }

    Err(LauncherError::JavaNotFound)
}

/// Spawn the game detached. The caller owns reaping the child.
pub fn start_game(game_dir: &Path, args: &[String]) -> Result<Child> {
    let java = find_java()?;
    log::info!("starting game: {} {:?}", java.display(), args);

    let child = Command::new(java).args(args).current_dir(game_dir).spawn()?;
    Ok(child)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn version_file() -> VersionFile {
        serde_json::from_str(
            r#"{
                "id": "1.19.2",
                "assetIndex": { "id": "1.19", "url": "https://example.com/1.19.json" },
                "downloads": { "client": { "sha1": "s", "size": 1, "url": "https://example.com/client.jar" } },
                "libraries": [],
                "mainClass": "net.minecraft.client.main.Main"
            }"#,
        )
        .unwrap()
    }

    fn profile() -> AuthResult {
        AuthResult {
            access_token: "token".to_string(),
            uuid: "uuid-1234".to_string(),
            username: "Steve".to_string(),
        }
    }

    #[test]
    fn natives_dir_matches_host() {
        let name = natives_dir_name().unwrap();
        assert!(["linux", "osx", "windows"].contains(&name));
    }

    #[test]
    fn classpath_lists_files_not_directories() {
        let dir = tempfile::tempdir().unwrap();
        let libs = dir.path().join("libraries/sub");
        fs::create_dir_all(&libs).unwrap();
        fs::write(libs.join("a.jar"), b"jar").unwrap();
        fs::write(dir.path().join("libraries/b.jar"), b"jar").unwrap();

        let classpath = build_classpath(dir.path()).unwrap();
        let entries: Vec<&str> = classpath.split(classpath_separator()).collect();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|entry| entry.ends_with(".jar")));
    }

    #[test]
    fn heap_uses_configured_cap() {
        assert_eq!(max_heap_gb(Some(8), 0), 8);
        assert_eq!(max_heap_gb(Some(0), 0), 1);
    }

    #[test]
    fn heap_derives_from_total_memory() {
        const GIB: u64 = 1024 * 1024 * 1024;
        assert_eq!(max_heap_gb(None, 16 * GIB), 6);
        assert_eq!(max_heap_gb(None, 8 * GIB), 4);
        assert_eq!(max_heap_gb(None, 2 * GIB), 2);
    }

    #[test]
    fn vanilla_args_use_version_main_class() {
        let dir = tempfile::tempdir().unwrap();
        let config = LauncherConfig {
            fabric: false,
            game_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        let args =
            build_jvm_args(&config, &version_file(), &profile(), dir.path(), String::new())
                .unwrap();

        assert!(args.contains(&"net.minecraft.client.main.Main".to_string()));
        assert!(!args.contains(&FABRIC_MAIN_CLASS.to_string()));
        assert!(!args.contains(&FABRIC_EMU_PROPERTY.to_string()));
    }

    #[test]
    fn fabric_args_boot_through_knot() {
        let dir = tempfile::tempdir().unwrap();
        let config = LauncherConfig {
            fabric: true,
            game_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        let args =
            build_jvm_args(&config, &version_file(), &profile(), dir.path(), String::new())
                .unwrap();

        let knot = args.iter().position(|a| a == FABRIC_MAIN_CLASS).unwrap();
        let emu = args.iter().position(|a| a == FABRIC_EMU_PROPERTY).unwrap();
        assert!(emu < knot, "JVM property must precede the main class");
    }

    #[test]
    fn game_args_carry_profile_and_asset_index() {
        let dir = tempfile::tempdir().unwrap();
        let config = LauncherConfig {
            game_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        let args =
            build_jvm_args(&config, &version_file(), &profile(), dir.path(), String::new())
                .unwrap();

        let value_after = |flag: &str| {
            let index = args.iter().position(|a| a == flag).unwrap();
            args[index + 1].as_str()
        };
        assert_eq!(value_after("--username"), "Steve");
        assert_eq!(value_after("--uuid"), "uuid-1234");
        assert_eq!(value_after("--assetIndex"), "1.19");
        assert_eq!(value_after("--version"), "1.19.2");
        assert_eq!(value_after("--userType"), "msa");
    }

    #[test]
    fn extra_jvm_args_come_before_main_class() {
        let dir = tempfile::tempdir().unwrap();
        let config = LauncherConfig {
            fabric: false,
            game_dir: Some(dir.path().to_path_buf()),
            extra_jvm_args: vec!["-XX:+AlwaysPreTouch".to_string()],
            ..Default::default()
        };

        let args =
            build_jvm_args(&config, &version_file(), &profile(), dir.path(), String::new())
                .unwrap();

        let extra = args
            .iter()
            .position(|a| a == "-XX:+AlwaysPreTouch")
            .unwrap();
        let main = args
            .iter()
            .position(|a| a == "net.minecraft.client.main.Main")
            .unwrap();
        assert!(extra < main);
    }
}
