use anyhow::{Context, Result};
use aws_smithy_types::date_time::Format;
use clap::{Args, builder::NonEmptyStringValueParser};
use tracing::info;

use crate::{
    aws::{
        self, AssumeRoleRequest, CredentialSource, SessionTag,
        console::ConsoleOptions,
    },
    browser,
    constants::{
        DEFAULT_AWS_REGION, DEFAULT_ISSUER, DEFAULT_ROLE_NAME, DEFAULT_SESSION_DURATION_SECS,
        DEFAULT_USERNAME, MAX_SESSION_DURATION_SECS, MIN_SESSION_DURATION_SECS,
    },
};

#[derive(Debug, Clone, Args)]
pub struct ConsoleCommand {
    #[arg(
        value_name = "ACCOUNT_ID",
        required_unless_present = "completions",
        value_parser = NonEmptyStringValueParser::new(),
        help = "AWS account id that owns the role"
    )]
    pub account_id: Option<String>,

    #[arg(short = 'p', long, value_name = "PROFILE", help = "AWS profile to use")]
    pub profile: Option<String>,

    #[arg(
        short = 'r',
        long,
        value_name = "ROLE",
        default_value = DEFAULT_ROLE_NAME,
        value_parser = NonEmptyStringValueParser::new(),
        help = "Role name to assume"
    )]
    pub role: String,

    #[arg(
        short = 'u',
        long,
        value_name = "USERNAME",
        default_value = DEFAULT_USERNAME,
        help = "Username used as the role session name"
    )]
    pub username: String,

    #[arg(
        short = 't',
        long = "tags",
        value_name = "TAGS",
        help = "Session tag in key:value form (repeatable)"
    )]
    pub tags: Vec<SessionTag>,

    #[arg(
        long,
        value_name = "TIMEOUT",
        default_value_t = DEFAULT_SESSION_DURATION_SECS,
        value_parser = clap::value_parser!(i32)
            .range(i64::from(MIN_SESSION_DURATION_SECS)..=i64::from(MAX_SESSION_DURATION_SECS)),
        help = "Session timeout in seconds"
    )]
    pub timeout: i32,

    #[arg(long, help = "Open the link in the default browser")]
    pub browser: bool,

    #[arg(long, value_name = "REGION", help = "Region for STS and the console landing page")]
    pub region: Option<String>,

    #[arg(
        long,
        value_name = "ISSUER",
        default_value = DEFAULT_ISSUER,
        help = "Issuer reported in the login URL"
    )]
    pub issuer: String,
}

impl ConsoleCommand {
    pub async fn execute(self) -> Result<()> {
        let account_id = self.account_id.as_deref().context("Account id is required")?;

        // Everything that can fail locally happens before the first network call
        let source = CredentialSource::resolve(self.profile.as_deref())
            .context("Failed to resolve base AWS credentials")?;
        let request = AssumeRoleRequest::new(account_id, &self.role, &self.username, self.tags);

        info!("Using credential source: {:?}", source);

        let config = aws::credentials::load_sdk_config(&source, self.region.as_deref()).await;

        let credentials = aws::sts::assume_role(&config, &request)
            .await
            .context("Failed to assume AWS role")?;

        info!(
            "Temporary credentials expire at: {}",
            credentials
                .expiration
                .fmt(Format::DateTime)
                .unwrap_or_else(|_| "unknown".to_string())
        );

        let options = ConsoleOptions {
            region: self
                .region
                .clone()
                .or_else(|| config.region().map(|r| r.to_string()))
                .unwrap_or_else(|| DEFAULT_AWS_REGION.to_string()),
            region_destination: self.region.is_some(),
            issuer: self.issuer,
            duration_seconds: self.timeout,
        };

        let url = aws::console::generate_console_url(&credentials, &options)
            .await
            .context("Failed to generate console sign-in URL")?;

        println!("{url}");

        if self.browser {
            browser::open(url.as_str())?;
            info!("Opened AWS Management Console in browser");
        }

        Ok(())
    }
}
