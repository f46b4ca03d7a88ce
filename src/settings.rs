//! Profile and base-settings types.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::defaults::{
    ALLOWED_EXTENSIONS, APP_ENV_VAR, DEV_HOST, DEV_PORT, MAX_CONTENT_LENGTH, PROD_HOST, PROD_PORT,
    UPLOAD_FOLDER,
};
use crate::env;
use crate::error::UnknownProfileError;

/// Settings shared by every profile: the secret plus the upload limits the
/// serving layer enforces.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Signing/session secret. Redacted from `Debug` output and skipped
    /// during serialization.
    #[serde(skip_serializing)]
    pub secret_key: String,
    /// Directory uploads are written to, relative to the working directory.
    pub upload_folder: String,
    /// Maximum accepted request body in bytes.
    pub max_content_length: usize,
    /// Lowercase file extensions (no leading dot) the application accepts.
    pub allowed_extensions: HashSet<String>,
}

impl Settings {
    /// Build the base settings around the given secret.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            upload_folder: UPLOAD_FOLDER.to_string(),
            max_content_length: MAX_CONTENT_LENGTH,
            allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }

    /// Case-sensitive membership test against the configured extension set.
    ///
    /// Answers only whether the extension is configured; enforcing it on
    /// actual uploads is the consumer's job.
    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions.contains(extension)
    }
}

// Keep the secret out of log output.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("secret_key", &"[REDACTED]")
            .field("upload_folder", &self.upload_folder)
            .field("max_content_length", &self.max_content_length)
            .field("allowed_extensions", &self.allowed_extensions)
            .finish()
    }
}

/// A named bundle of deployment-specific settings layered on the shared base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Settings common to every profile.
    pub base: Settings,
    /// Whether the application should run with debug behavior enabled.
    pub debug: bool,
    /// Address the serving layer should bind.
    pub host: String,
    /// Port the serving layer should bind.
    pub port: u16,
}

impl Profile {
    pub(crate) fn development(base: Settings) -> Self {
        Self {
            base,
            debug: true,
            host: DEV_HOST.to_string(),
            port: DEV_PORT,
        }
    }

    pub(crate) fn production(base: Settings) -> Self {
        Self {
            base,
            debug: false,
            host: PROD_HOST.to_string(),
            port: PROD_PORT,
        }
    }

    /// Get the full listener address as `host:port`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The recognized registry keys.
///
/// `Default` is a stable alias resolving to the development profile, so
/// bootstrap code has a key to fall back to when no deployment flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileName {
    Development,
    Production,
    #[default]
    Default,
}

impl ProfileName {
    /// Render the name as its registry key.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Default => "default",
        }
    }

    /// Check if this name resolves to the production profile.
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this name resolves to the development profile (the
    /// `default` alias included).
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development | Self::Default)
    }

    /// Resolve the deployment-mode flag from `APP_ENV`.
    ///
    /// An unset or empty variable selects [`ProfileName::Default`]; any
    /// other value must be a recognized key, otherwise the error is handed
    /// back for the caller to report.
    pub fn from_env() -> Result<Self, UnknownProfileError> {
        let name = match env::var_non_empty(APP_ENV_VAR) {
            Some(value) => value.parse()?,
            None => Self::Default,
        };
        tracing::debug!(profile = %name, "deployment profile resolved");
        Ok(name)
    }
}

impl FromStr for ProfileName {
    type Err = UnknownProfileError;

    // Keys are exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            "default" => Ok(Self::Default),
            other => Err(UnknownProfileError {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
