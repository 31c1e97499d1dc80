use std::fs;
use std::path::{Path, PathBuf};

use crate::config::LauncherConfig;
use crate::downloader::Downloader;
use crate::error::{LauncherError, Result};
use crate::progress::Progress;
use crate::{fabric, mods};

mod manifest;
mod version_file;

pub use version_file::VersionFile;

use self::manifest::VersionManifest;
use self::version_file::{AssetIndex, Library};

const VERSION_MANIFEST_URL: &str =
    "https://piston-meta.mojang.com/mc/game/version_manifest_v2.json";
const ASSET_BASE_URL: &str = "https://resources.download.minecraft.net";

/// Resolves the configured version against Mojang's manifest and queues
/// everything the game needs onto the downloader: asset index and objects,
/// libraries, natives, the client jar, and (optionally) the Fabric loader
/// plus the bundled mod set.
pub struct Installer {
    version: String,
    fabric: bool,
    game_dir: PathBuf,
    downloader: Downloader,
}

impl Installer {
    pub fn new(config: &LauncherConfig) -> Result<Self> {
        let game_dir = config.game_dir()?;
        fs::create_dir_all(&game_dir)?;

        Ok(Self {
            version: config.minecraft_version.clone(),
            fabric: config.fabric,
            game_dir,
            downloader: Downloader::new(),
        })
    }

    pub fn game_dir(&self) -> &Path {
        &self.game_dir
    }

    /// Run the full install and return the resolved version metadata, which
    /// the launch step needs for the main class and asset index id.
    pub async fn install(&mut self, progress: &Progress) -> Result<VersionFile> {
        progress.line("Preparing installation...");

        let manifest: VersionManifest = self.downloader.fetch_json(VERSION_MANIFEST_URL).await?;
        let summary = manifest
            .find(&self.version)
            .ok_or_else(|| LauncherError::VersionNotFound(self.version.clone()))?;
        let version_file: VersionFile = self.downloader.fetch_json(&summary.url).await?;

        self.queue_assets(&version_file, progress).await?;
        self.queue_libraries(&version_file);
        self.queue_client(&version_file);
        if self.fabric {
            self.queue_fabric();
            self.queue_mods();
        }

        progress.line(format!("Fetching {} files...", self.downloader.queued()));
        self.downloader.run(progress).await?;

        progress.line("Installation complete");
        Ok(version_file)
    }

    async fn queue_assets(&mut self, version_file: &VersionFile, progress: &Progress) -> Result<()> {
        progress.line("Resolving assets...");

        self.downloader.push(
            version_file.asset_index.url.clone(),
            self.game_dir.join("assets/indexes"),
        );

        let index: AssetIndex = self
            .downloader
            .fetch_json(&version_file.asset_index.url)
            .await?;

        for (name, object) in &index.objects {
            let Some(prefix) = object.hash_prefix() else {
                log::warn!("asset {name} has a malformed hash, skipping");
                continue;
            };
            self.downloader.push(
                format!("{ASSET_BASE_URL}/{prefix}/{hash}", hash = object.hash),
                self.game_dir.join("assets/objects").join(prefix),
            );
        }
        Ok(())
    }

    fn queue_libraries(&mut self, version_file: &VersionFile) {
        for library in &version_file.libraries {
            let Some(artifact) = &library.downloads.artifact else {
                log::debug!("library {} has no artifact, skipping", library.name);
                continue;
            };
            let dest = self.game_dir.join(library_dest(library));
            self.downloader.push(artifact.url.clone(), dest);
        }
    }

    fn queue_client(&mut self, version_file: &VersionFile) {
        self.downloader.push(
            version_file.downloads.client.url.clone(),
            self.game_dir.join("client"),
        );
    }

    fn queue_fabric(&mut self) {
        for url in fabric::loader_libraries() {
            self.downloader
                .push(url, self.game_dir.join("libraries/fabric"));
        }
    }

    fn queue_mods(&mut self) {
        for url in mods::mod_list() {
            self.downloader.push(url, self.game_dir.join("mods"));
        }
    }
}

/// Libraries whose first rule names an OS are native bundles and land in that
/// OS's natives directory; everything else goes under `libraries/`.
fn library_dest(library: &Library) -> &'static str {
    match library.rules.first().and_then(|rule| rule.os.as_ref()) {
        Some(os) => match os.name.as_str() {
            "linux" => "natives/linux",
            "osx" => "natives/osx",
            "windows" => "natives/windows",
            _ => "libraries",
        },
        None => "libraries",
    }
}
