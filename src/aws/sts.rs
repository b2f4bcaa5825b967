use anyhow::{Context, Result};
use aws_config::SdkConfig;
use aws_sdk_sts::{Client as StsClient, types::Tag};
use tracing::{debug, info};

use super::{Credentials, roles::{self, SessionTag}};

/// Everything needed for a single AssumeRole call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssumeRoleRequest {
    pub role_arn: String,
    pub session_name: String,
    pub tags: Vec<SessionTag>,
}

impl AssumeRoleRequest {
    pub fn new(account_id: &str, role_name: &str, username: &str, tags: Vec<SessionTag>) -> Self {
        Self {
            role_arn: roles::role_arn(account_id, role_name),
            session_name: username.to_string(),
            tags,
        }
    }

    /// Session tags in SDK form, or `None` when no tags were requested
    pub fn sdk_tags(&self) -> Result<Option<Vec<Tag>>> {
        if self.tags.is_empty() {
            return Ok(None);
        }

        self.tags
            .iter()
            .map(|tag| {
                Tag::builder()
                    .key(&tag.key)
                    .value(&tag.value)
                    .build()
                    .with_context(|| format!("Invalid session tag '{tag}'"))
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }
}

/// Assume a role with the base credentials carried by `config`
pub async fn assume_role(config: &SdkConfig, request: &AssumeRoleRequest) -> Result<Credentials> {
    info!("Calling AWS STS AssumeRole");
    debug!("Role ARN: {}", request.role_arn);
    debug!("Session name: {}", request.session_name);
    debug!("Session tags: {:?}", request.tags);

    let tags = request.sdk_tags()?;
    let client = StsClient::new(config);

    let response = client
        .assume_role()
        .role_arn(&request.role_arn)
        .role_session_name(&request.session_name)
        .set_tags(tags)
        .send()
        .await
        .with_context(|| format!("Failed to assume role {}", request.role_arn))?;

    let sts_creds = response
        .credentials()
        .context("AWS STS returned no credentials")?;

    let credentials = Credentials {
        access_key_id: sts_creds.access_key_id().to_string(),
        secret_access_key: sts_creds.secret_access_key().to_string(),
        session_token: sts_creds.session_token().to_string(),
        expiration: *sts_creds.expiration(),
    };

    info!("Successfully obtained temporary credentials");
    Ok(credentials)
}
