use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use super::Credentials;

// AWS Federation API types (internal use only)
// These types match the exact JSON format expected by AWS federation endpoint

/// Session credentials format for AWS federation getSigninToken API
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
struct SessionCredentials {
    #[serde(rename = "sessionId")]
    session_id: String,
    #[serde(rename = "sessionKey")]
    session_key: String,
    #[serde(rename = "sessionToken")]
    session_token: String,
}

impl From<&Credentials> for SessionCredentials {
    fn from(creds: &Credentials) -> Self {
        Self {
            session_id: creds.access_key_id.clone(),
            session_key: creds.secret_access_key.clone(),
            session_token: creds.session_token.clone(),
        }
    }
}

/// Response from AWS federation getSigninToken API
#[derive(Debug, Deserialize)]
struct SigninTokenResponse {
    #[serde(rename = "SigninToken")]
    signin_token: String,
}

/// Settings for the login URL handed to the browser
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    /// Region used to pick the partition domain
    pub region: String,
    /// Land on the region's console home page instead of the global landing page
    pub region_destination: bool,
    pub issuer: String,
    pub duration_seconds: i32,
}

/// Exchange temporary credentials for a console login URL
pub async fn generate_console_url(creds: &Credentials, options: &ConsoleOptions) -> Result<Url> {
    let amazon_domain = get_console_domain(&options.region);
    debug!("Console domain: {}", amazon_domain);

    let token_url = signin_token_url(creds, options.duration_seconds, amazon_domain)?;
    let signin_token = get_signin_token(token_url).await?;

    let destination = match options.region_destination {
        true => format!(
            "https://console.{amazon_domain}/console/home?region={}",
            options.region
        ),
        false => format!("https://console.{amazon_domain}/"),
    };

    login_url(&signin_token, &options.issuer, &destination, amazon_domain)
}

fn federation_endpoint(amazon_domain: &str) -> Result<Url> {
    Url::parse(&format!("https://signin.{amazon_domain}/federation"))
        .context("Failed to build federation endpoint URL")
}

/// getSigninToken request URL carrying the serialized session
fn signin_token_url(creds: &Credentials, duration_seconds: i32, amazon_domain: &str) -> Result<Url> {
    let session_json = serde_json::to_string(&SessionCredentials::from(creds))?;

    let mut url = federation_endpoint(amazon_domain)?;
    url.query_pairs_mut()
        .append_pair("Action", "getSigninToken")
        .append_pair("DurationSeconds", &duration_seconds.to_string())
        .append_pair("Session", &session_json);

    Ok(url)
}

/// Get signin token from AWS federation endpoint
async fn get_signin_token(url: Url) -> Result<String> {
    info!("Requesting sign-in token from {}", url.host_str().unwrap_or_default());

    let response = Client::new()
        .get(url)
        .send()
        .await
        .context("Failed to get signin token")?;

    if !response.status().is_success() {
        bail!("Failed to get signin token: {}", response.status());
    }

    let body = response
        .text()
        .await
        .context("Failed to read signin token response")?;

    parse_signin_token(&body)
}

fn parse_signin_token(body: &str) -> Result<String> {
    let token_response: SigninTokenResponse =
        serde_json::from_str(body).context("Failed to parse signin token response")?;
    Ok(token_response.signin_token)
}

/// Login URL that opens the console for whoever holds it
fn login_url(
    signin_token: &str,
    issuer: &str,
    destination: &str,
    amazon_domain: &str,
) -> Result<Url> {
    let mut url = federation_endpoint(amazon_domain)?;
    url.query_pairs_mut()
        .append_pair("Action", "login")
        .append_pair("Issuer", issuer)
        .append_pair("Destination", destination)
        .append_pair("SigninToken", signin_token);

    Ok(url)
}

/// Get console domain based on region
pub fn get_console_domain(region: &str) -> &'static str {
    match region {
        r if r.starts_with("us-gov-") => "amazonaws-us-gov.com",
        r if r.starts_with("cn-") => "amazonaws.cn",
        _ => "aws.amazon.com",
    }
}
