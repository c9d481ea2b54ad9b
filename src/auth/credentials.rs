//! Credential management for Huobi API authentication.

use secrecy::{ExposeSecret, SecretString};

use crate::error::HuobiError;

/// Default environment variable holding the access key.
pub const ACCESS_KEY_VAR: &str = "HUOBI_ACCESS_KEY";
/// Default environment variable holding the secret key.
pub const SECRET_KEY_VAR: &str = "HUOBI_SECRET_KEY";

/// API credentials containing the access key and secret key.
///
/// Both halves are validated non-empty on construction. The secret is only
/// ever used as the HMAC key. Neither key shows up in `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    access_key_id: String,
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an access key and secret key.
    ///
    /// Fails with [`HuobiError::Config`] if either value is empty.
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, HuobiError> {
        let access_key_id = access_key.into();
        let secret_key = secret_key.into();

        if access_key_id.is_empty() || secret_key.is_empty() {
            return Err(HuobiError::Config(
                "Params missing: access key or secret key".to_string(),
            ));
        }

        Ok(Self {
            access_key_id,
            secret_key: SecretString::from(secret_key),
        })
    }

    /// Read credentials from `HUOBI_ACCESS_KEY` and `HUOBI_SECRET_KEY`.
    pub fn from_env() -> Result<Self, HuobiError> {
        Self::from_env_vars(ACCESS_KEY_VAR, SECRET_KEY_VAR)
    }

    /// Read credentials from custom environment variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, HuobiError> {
        let access_key = std::env::var(key_var)
            .map_err(|_| HuobiError::Config(format!("Environment variable {key_var} not set")))?;
        let secret_key = std::env::var(secret_var).map_err(|_| {
            HuobiError::Config(format!("Environment variable {secret_var} not set"))
        })?;

        Self::new(access_key, secret_key)
    }

    /// The public access key, sent as `AccessKeyId`.
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// Get the secret key for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub(crate) fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &"[REDACTED]")
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("my_key", "super_secret").unwrap();
        let debug_str = format!("{:?}", creds);
        assert!(!debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_credentials_require_both_keys() {
        assert!(matches!(
            Credentials::new("", "secret"),
            Err(HuobiError::Config(_))
        ));
        assert!(matches!(
            Credentials::new("key", ""),
            Err(HuobiError::Config(_))
        ));
    }

    #[test]
    fn test_credentials_keep_keys_verbatim() {
        let creds = Credentials::new(" key ", "secret").unwrap();
        assert_eq!(creds.access_key_id(), " key ");
    }

    #[test]
    fn test_credentials_from_missing_env() {
        let result = Credentials::from_env_vars(
            "HUOBI_TEST_SURELY_UNSET_KEY",
            "HUOBI_TEST_SURELY_UNSET_SECRET",
        );
        assert!(matches!(result, Err(HuobiError::Config(_))));
    }

    #[test]
    fn test_credentials_accessors() {
        let creds = Credentials::new("key", "secret").unwrap();
        assert_eq!(creds.access_key_id(), "key");
        assert_eq!(creds.expose_secret(), "secret");
    }
}
