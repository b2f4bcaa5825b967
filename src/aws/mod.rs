use aws_smithy_types::DateTime;

pub mod console;
pub mod credentials;
pub mod roles;
pub mod sts;

/// Temporary credentials returned by AssumeRole
///
/// Held in memory only for as long as it takes to obtain a sign-in token.
#[derive(Clone)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
    pub expiration: DateTime,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &"** redacted **")
            .field("expiration", &self.expiration)
            .finish()
    }
}

pub use credentials::CredentialSource;
pub use roles::SessionTag;
pub use sts::AssumeRoleRequest;
