//! Xbox Live / XSTS / Minecraft services leg of the sign-in, per
//! https://wiki.vg/Microsoft_Authentication_Scheme

use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::error::{LauncherError, Result};

const XBOX_AUTH_URL: &str = "https://user.auth.xboxlive.com/user/authenticate";
const XSTS_AUTH_URL: &str = "https://xsts.auth.xboxlive.com/xsts/authorize";
const MC_LOGIN_URL: &str = "https://api.minecraftservices.com/authentication/login_with_xbox";
const MC_PROFILE_URL: &str = "https://api.minecraftservices.com/minecraft/profile";

/// Token shape shared by the Xbox Live and XSTS endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct XboxToken {
    pub issue_instant: String,
    pub not_after: String,
    pub token: String,
    pub display_claims: HashMap<String, Vec<HashMap<String, String>>>,
}

impl XboxToken {
    /// The `uhs` user hash needed for the Minecraft identity token.
    pub fn user_hash(&self) -> Option<&str> {
        self.display_claims
            .get("xui")?
            .first()?
            .get("uhs")
            .map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
pub struct MinecraftAuthenticationResponse {
    pub username: String,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Debug, Deserialize)]
pub struct MinecraftProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub skins: Vec<HashMap<String, String>>,
    #[serde(default)]
    pub capes: Vec<HashMap<String, String>>,
}

pub async fn xbox_live_authenticate(client: &Client, msa_access_token: &str) -> Result<XboxToken> {
    let request = json!({
        "Properties": {
            "AuthMethod": "RPS",
            "SiteName": "user.auth.xboxlive.com",
            "RpsTicket": format!("d={msa_access_token}")
        },
        "RelyingParty": "http://auth.xboxlive.com",
        "TokenType": "JWT"
    });

    let response = client
        .post(XBOX_AUTH_URL)
        .json(&request)
        .send()
        .await?
        .error_for_status()?;
    Ok(response.json().await?)
}

pub async fn xsts_authorize(client: &Client, xbox_token: &str) -> Result<XboxToken> {
    let request = json!({
        "Properties": {
            "SandboxId": "RETAIL",
            "UserTokens": [xbox_token]
        },
        "RelyingParty": "rp://api.minecraftservices.com/",
        "TokenType": "JWT"
    });

    let response = client
        .post(XSTS_AUTH_URL)
        .json(&request)
        .send()
        .await?
        .error_for_status()?;
    Ok(response.json().await?)
}

pub fn identity_token(user_hash: &str, xsts_token: &str) -> String {
    format!("XBL3.0 x={user_hash};{xsts_token}")
}

pub async fn login_with_xbox(
    client: &Client,
    user_hash: &str,
    xsts_token: &str,
) -> Result<MinecraftAuthenticationResponse> {
    let request = json!({
        "identityToken": identity_token(user_hash, xsts_token),
        "ensureLegacyEnabled": true
    });

    let response = client
        .post(MC_LOGIN_URL)
        .json(&request)
        .send()
        .await?
        .error_for_status()?;
    Ok(response.json().await?)
}

pub async fn fetch_profile(client: &Client, access_token: &str) -> Result<MinecraftProfile> {
    let response = client
        .get(MC_PROFILE_URL)
        .bearer_auth(access_token)
        .send()
        .await?;

    if !response.status().is_success() {
        // A 404 here means the account owns no copy of the game.
        return Err(LauncherError::Auth(format!(
            "profile request failed with status {}",
            response.status()
        )));
    }
    Ok(response.json().await?)
}
