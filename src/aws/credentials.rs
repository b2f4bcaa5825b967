use std::{
    collections::BTreeSet,
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use aws_config::{BehaviorVersion, ConfigLoader, Region, SdkConfig};
use aws_sdk_sts::config::Credentials as StaticCredentials;
use ini::{Ini, ParseOption};
use tracing::{debug, info, warn};

use crate::constants::{
    AWS_CONFIG_DIR_NAME, AWS_CONFIG_FILE_NAME, AWS_CREDENTIALS_FILE_NAME, DEFAULT_AWS_REGION,
    ENV_ACCESS_KEY_ID, ENV_CONFIG_FILE, ENV_SECRET_ACCESS_KEY, ENV_SESSION_TOKEN,
    ENV_SHARED_CREDENTIALS_FILE,
};

/// Where the base credentials used to call STS come from
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Named profile resolved by the AWS config layer (static keys, SSO, role chaining)
    Profile(String),
    /// Keys taken verbatim from the standard environment variables
    Environment {
        access_key_id: String,
        secret_access_key: String,
        session_token: String,
    },
}

impl std::fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Profile(name) => f.debug_tuple("Profile").field(name).finish(),
            Self::Environment { access_key_id, .. } => f
                .debug_struct("Environment")
                .field("access_key_id", access_key_id)
                .finish_non_exhaustive(),
        }
    }
}

impl CredentialSource {
    /// Pick the credential source for this invocation
    ///
    /// A profile must be known to the shared config files. Without a profile all three
    /// environment variables are required.
    pub fn resolve(profile: Option<&str>) -> Result<Self> {
        match profile {
            Some(name) => {
                ensure_profile_exists(name)?;
                Ok(Self::Profile(name.to_string()))
            }
            None => {
                warn!("No profile name specified. Falling back to environment variables.");
                Self::from_lookup(|name| env::var(name).ok())
            }
        }
    }

    /// Build an environment source from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .with_context(|| format!("Environment variable {name} is not set"))
        };

        Ok(Self::Environment {
            access_key_id: require(ENV_ACCESS_KEY_ID)?,
            secret_access_key: require(ENV_SECRET_ACCESS_KEY)?,
            session_token: require(ENV_SESSION_TOKEN)?,
        })
    }

    fn loader(&self) -> ConfigLoader {
        let loader = aws_config::defaults(BehaviorVersion::latest());
        match self {
            Self::Profile(name) => loader.profile_name(name),
            Self::Environment {
                access_key_id,
                secret_access_key,
                session_token,
            } => loader.credentials_provider(StaticCredentials::new(
                access_key_id,
                secret_access_key,
                Some(session_token.clone()),
                None,
                "Environment",
            )),
        }
    }
}

/// Load the SDK configuration for a credential source
///
/// Region priority: explicit region -> profile/environment -> DEFAULT_AWS_REGION
pub async fn load_sdk_config(source: &CredentialSource, region: Option<&str>) -> SdkConfig {
    if let Some(region) = region {
        info!("Using region: {}", region);
        return source
            .loader()
            .region(Region::new(region.to_string()))
            .load()
            .await;
    }

    let loaded = source.loader().load().await;
    match loaded.region() {
        Some(region) => {
            info!("Using region: {}", region);
            loaded
        }
        None => {
            info!(
                "No region configured, using default {} for STS",
                DEFAULT_AWS_REGION
            );
            source
                .loader()
                .region(Region::new(DEFAULT_AWS_REGION))
                .load()
                .await
        }
    }
}

/// Shared AWS config file path, honouring AWS_CONFIG_FILE
pub fn aws_config_path() -> Option<PathBuf> {
    shared_file_path(ENV_CONFIG_FILE, AWS_CONFIG_FILE_NAME)
}

/// Shared AWS credentials file path, honouring AWS_SHARED_CREDENTIALS_FILE
pub fn aws_credentials_path() -> Option<PathBuf> {
    shared_file_path(ENV_SHARED_CREDENTIALS_FILE, AWS_CREDENTIALS_FILE_NAME)
}

fn shared_file_path(override_var: &str, file_name: &str) -> Option<PathBuf> {
    env::var_os(override_var)
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(AWS_CONFIG_DIR_NAME).join(file_name)))
}

/// Collect profile names from the shared config and credentials files
///
/// Missing files are skipped. In the config file only `[default]` and
/// `[profile NAME]` sections name profiles.
pub fn known_profiles(
    config_path: Option<&Path>,
    credentials_path: Option<&Path>,
) -> Result<BTreeSet<String>> {
    let mut profiles = BTreeSet::new();

    if let Some(path) = config_path.filter(|p| p.exists()) {
        let ini = Ini::load_from_file_opt(path, aws_parse_option())
            .with_context(|| format!("Failed to read AWS config file: {}", path.display()))?;
        profiles.extend(ini.sections().flatten().filter_map(|section| {
            match section.trim() {
                "default" => Some("default".to_string()),
                s => s
                    .strip_prefix("profile ")
                    .map(|name| name.trim().to_string()),
            }
        }));
    }

    if let Some(path) = credentials_path.filter(|p| p.exists()) {
        let ini = Ini::load_from_file_opt(path, aws_parse_option())
            .with_context(|| format!("Failed to read AWS credentials file: {}", path.display()))?;
        profiles.extend(
            ini.sections()
                .flatten()
                .map(|section| section.trim().to_string()),
        );
    }

    Ok(profiles)
}

/// AWS shared files treat backslashes and quotes literally
fn aws_parse_option() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    }
}

fn ensure_profile_exists(profile: &str) -> Result<()> {
    let config_path = aws_config_path();
    let credentials_path = aws_credentials_path();
    let profiles = known_profiles(config_path.as_deref(), credentials_path.as_deref())?;
    debug!("Known profiles: {:?}", profiles);

    if profiles.contains(profile) {
        return Ok(());
    }

    match profiles.is_empty() {
        true => bail!("Profile '{profile}' not found: no profiles are configured"),
        false => bail!(
            "Profile '{profile}' not found. Available profiles: {}",
            profiles.into_iter().collect::<Vec<_>>().join(", ")
        ),
    }
}
