use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tauri::AppHandle;
use tauri_plugin_shell::ShellExt;

use crate::error::{LauncherError, Result};
use crate::progress::Progress;

mod microsoft;
mod minecraft;

use microsoft::TokenResponse;

const TOKEN_FILE: &str = "token.json";
const PROFILE_FILE: &str = "profile.json";

/// What the rest of the launcher needs from a completed sign-in.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResult {
    pub access_token: String,
    pub uuid: String,
    pub username: String,
}

/// Runs the whole sign-in chain: cached/refreshed Microsoft token (or a
/// fresh device-code flow), Xbox Live, XSTS, Minecraft services, profile.
pub struct Authenticator {
    client: Client,
    game_dir: PathBuf,
}

impl Authenticator {
    pub fn new(game_dir: &Path) -> Self {
        Self {
            client: Client::new(),
            game_dir: game_dir.to_path_buf(),
        }
    }

    pub async fn sign_in(&self, app: &AppHandle, progress: &Progress) -> Result<AuthResult> {
        progress.line("Signing in...");

        let msa_token = self.microsoft_token(app, progress).await?;

        let xbox = minecraft::xbox_live_authenticate(&self.client, &msa_token.access_token).await?;
        let xsts = minecraft::xsts_authorize(&self.client, &xbox.token).await?;
        let user_hash = xsts
            .user_hash()
            .ok_or_else(|| LauncherError::Auth("XSTS response carried no user hash".into()))?;

        let minecraft_auth =
            minecraft::login_with_xbox(&self.client, user_hash, &xsts.token).await?;
        let profile = minecraft::fetch_profile(&self.client, &minecraft_auth.access_token).await?;

        let result = AuthResult {
            access_token: minecraft_auth.access_token,
            uuid: profile.id,
            username: profile.name,
        };
        fs::write(
            self.game_dir.join(PROFILE_FILE),
            serde_json::to_string(&result)?,
        )?;

        progress.line(format!("Signed in as {}", result.username));
        Ok(result)
    }

    /// A saved token is refreshed; a failed refresh falls back to a fresh
    /// device-code flow rather than failing the launch.
    async fn microsoft_token(&self, app: &AppHandle, progress: &Progress) -> Result<TokenResponse> {
        if let Some(saved) = self.load_saved_token() {
            match microsoft::refresh_token(&self.client, &saved.refresh_token).await {
                Ok(token) => {
                    self.save_token(&token)?;
                    return Ok(token);
                }
                Err(err) => {
                    log::warn!("token refresh failed, starting a new sign-in: {err}");
                }
            }
        }

        let device = microsoft::request_device_code(&self.client).await?;
        progress.line(device.message.clone());
        // The progress line already carries the code and URL.
        let _ = app.shell().open(device.verification_uri.clone(), None);

        let token = microsoft::poll_for_token(&self.client, &device).await?;
        progress.line("Sign-in confirmed");
        self.save_token(&token)?;
        Ok(token)
    }

    fn token_path(&self) -> PathBuf {
        self.game_dir.join(TOKEN_FILE)
    }

    fn load_saved_token(&self) -> Option<TokenResponse> {
        let content = fs::read_to_string(self.token_path()).ok()?;
        match serde_json::from_str(&content) {
            Ok(token) => Some(token),
            Err(err) => {
                log::warn!("ignoring unreadable token cache: {err}");
                None
            }
        }
    }

    fn save_token(&self, token: &TokenResponse) -> Result<()> {
        fs::create_dir_all(&self.game_dir)?;
        fs::write(self.token_path(), serde_json::to_string(token)?)?;
        Ok(())
    }
}
