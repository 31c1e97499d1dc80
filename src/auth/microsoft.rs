//! Microsoft device code flow:
//! https://learn.microsoft.com/en-us/entra/identity-platform/v2-oauth2-device-code

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::error::{LauncherError, Result};

pub const CLIENT_ID: &str = "c1e288f4-4793-4bfd-bb9e-e3ea3e14218e";
const SCOPE: &str = "XboxLive.signin offline_access";

const DEVICE_CODE_URL: &str =
    "https://login.microsoftonline.com/consumers/oauth2/v2.0/devicecode";
const TOKEN_URL: &str = "https://login.microsoftonline.com/consumers/oauth2/v2.0/token";

#[derive(Debug, Deserialize)]
pub struct DeviceAuthorizationResponse {
    pub device_code: String,
    pub user_code: String,
    pub verification_uri: String,
    pub expires_in: u64,
    pub interval: u64,
    /// Ready-made instruction text carrying the user code. Shown verbatim
    /// in the launcher log line.
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token_type: String,
    pub scope: String,
    pub expires_in: i64,
    pub access_token: String,
    pub refresh_token: String,
}

pub async fn request_device_code(client: &Client) -> Result<DeviceAuthorizationResponse> {
    let form = [("client_id", CLIENT_ID), ("scope", SCOPE)];
    let response = client
        .post(DEVICE_CODE_URL)
        .form(&form)
        .send()
        .await?
        .error_for_status()?;
    Ok(response.json().await?)
}

/// Poll the token endpoint until the user completes sign-in in the browser.
/// The endpoint answers 400 (`authorization_pending`) until then, 200 once
/// done; the device code expires after `expires_in` seconds.
pub async fn poll_for_token(
    client: &Client,
    device: &DeviceAuthorizationResponse,
) -> Result<TokenResponse> {
    let deadline = Instant::now() + Duration::from_secs(device.expires_in);
    let interval = Duration::from_secs(device.interval.max(1));
    let form = [
        ("grant_type", "urn:ietf:params:oauth:grant-type:device_code"),
        ("client_id", CLIENT_ID),
        ("device_code", device.device_code.as_str()),
    ];

    while Instant::now() < deadline {
        sleep(interval).await;

        let response = client.post(TOKEN_URL).form(&form).send().await?;
        if response.status() == StatusCode::OK {
            return Ok(response.json().await?);
        }
    }

    Err(LauncherError::AuthTimeout)
}

pub async fn refresh_token(client: &Client, refresh_token: &str) -> Result<TokenResponse> {
    let form = [
        ("grant_type", "refresh_token"),
        ("client_id", CLIENT_ID),
        ("refresh_token", refresh_token),
    ];
    let response = client
        .post(TOKEN_URL)
        .form(&form)
        .send()
        .await?
        .error_for_status()?;
    Ok(response.json().await?)
}
