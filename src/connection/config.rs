//! Handle configuration

use serde::Deserialize;
use std::fmt;

/// Credentials supplied alongside the connection URL
///
/// When set they take precedence over userinfo embedded in the URL.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Username
    pub username: Option<String>,
    /// Password
    pub password: Option<String>,
}

impl Credentials {
    /// Username and password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Password-only authentication (Redis `AUTH <password>`)
    pub fn password_only(password: impl Into<String>) -> Self {
        Self {
            username: None,
            password: Some(password.into()),
        }
    }

    /// Whether neither field is set
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "****"))
            .finish()
    }
}

/// Handle configuration
///
/// Stores the target URL and optional credentials. Driver options are
/// loaded separately through `ConnectionHandle::load_config`.
///
/// Deserializable so applications can keep it in their own config files:
///
/// ```
/// # use datastore_handle::HandleConfig;
/// let config: HandleConfig = serde_json::from_str(
///     r#"{ "url": "redis://cache:6379/0", "credentials": { "password": "secret" } }"#,
/// ).unwrap();
/// assert_eq!(config.url, "redis://cache:6379/0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HandleConfig {
    /// Connection URL
    pub url: String,
    /// Credentials (optional)
    #[serde(default)]
    pub credentials: Option<Credentials>,
}

impl HandleConfig {
    /// Create configuration without credentials
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            credentials: None,
        }
    }

    /// Create a builder
    ///
    /// # Examples
    ///
    /// ```
    /// # use datastore_handle::HandleConfig;
    /// let config = HandleConfig::builder("mongodb://db:27017")
    ///     .username("app")
    ///     .password("secret")
    ///     .build();
    /// assert_eq!(config.credentials.unwrap().username.as_deref(), Some("app"));
    /// ```
    pub fn builder(url: impl Into<String>) -> HandleConfigBuilder {
        HandleConfigBuilder {
            url: url.into(),
            username: None,
            password: None,
        }
    }

    /// Set credentials
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

/// Builder for `HandleConfig`
#[derive(Debug, Clone)]
pub struct HandleConfigBuilder {
    url: String,
    username: Option<String>,
    password: Option<String>,
}

impl HandleConfigBuilder {
    /// Set the username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set both credential fields at once
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.username = credentials.username;
        self.password = credentials.password;
        self
    }

    /// Build the configuration
    pub fn build(self) -> HandleConfig {
        let credentials = Credentials {
            username: self.username,
            password: self.password,
        };
        HandleConfig {
            url: self.url,
            credentials: (!credentials.is_empty()).then_some(credentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_config_new() {
        let config = HandleConfig::new("redis://localhost:6379");
        assert_eq!(config.url, "redis://localhost:6379");
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_builder_with_credentials() {
        let config = HandleConfig::builder("mongodb://db")
            .username("app")
            .password("secret")
            .build();

        assert_eq!(config.credentials, Some(Credentials::new("app", "secret")));
    }

    #[test]
    fn test_builder_takes_credentials() {
        let config = HandleConfig::builder("redis://cache")
            .credentials(Credentials::password_only("pw"))
            .build();
        assert_eq!(config.credentials, Some(Credentials::password_only("pw")));
    }

    #[test]
    fn test_builder_without_credentials() {
        let config = HandleConfig::builder("mongodb://db").build();
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_credentials_chain() {
        let config =
            HandleConfig::new("redis://cache").credentials(Credentials::password_only("pw"));
        let creds = config.credentials.unwrap();
        assert_eq!(creds.username, None);
        assert_eq!(creds.password.as_deref(), Some("pw"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("app", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("app"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_deserialize() {
        let config: HandleConfig = serde_json::from_str(
            r#"{ "url": "mongodb://db:27017", "credentials": { "username": "u", "password": "p" } }"#,
        )
        .unwrap();
        assert_eq!(config.credentials, Some(Credentials::new("u", "p")));

        let config: HandleConfig = serde_json::from_str(r#"{ "url": "redis://cache" }"#).unwrap();
        assert!(config.credentials.is_none());
    }
}
