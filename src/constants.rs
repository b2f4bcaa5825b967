/// Role assumed when `--role` is not given
pub const DEFAULT_ROLE_NAME: &str = "Admin";

/// Role session name used when `--username` is not given
pub const DEFAULT_USERNAME: &str = "AssumeRoleUser";

/// Issuer reported to the federation endpoint in the login URL
pub const DEFAULT_ISSUER: &str = "cb-sbu.io";

/// Default sign-in token lifetime in seconds
pub const DEFAULT_SESSION_DURATION_SECS: i32 = 3600;

/// Shortest lifetime the federation endpoint accepts
pub const MIN_SESSION_DURATION_SECS: i32 = 900;

/// Longest lifetime the federation endpoint accepts
pub const MAX_SESSION_DURATION_SECS: i32 = 43200;

/// Default AWS region for STS operations when no region is configured
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Environment variables read when no profile is given
pub const ENV_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const ENV_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const ENV_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// Overrides for the shared AWS config and credentials file locations
pub const ENV_CONFIG_FILE: &str = "AWS_CONFIG_FILE";
pub const ENV_SHARED_CREDENTIALS_FILE: &str = "AWS_SHARED_CREDENTIALS_FILE";

/// AWS configuration directory name
pub const AWS_CONFIG_DIR_NAME: &str = ".aws";

/// AWS configuration file name
pub const AWS_CONFIG_FILE_NAME: &str = "config";

/// AWS credentials file name
pub const AWS_CREDENTIALS_FILE_NAME: &str = "credentials";
