//! Construction and lookup of the profile registry.

use crate::defaults::{DEFAULT_SECRET_KEY, SECRET_KEY_VAR};
use crate::env;
use crate::settings::{Profile, ProfileName, Settings};

/// Immutable mapping from profile name to [`Profile`].
///
/// Built once at startup from the process environment; afterwards the
/// registry and the profiles it hands out never change, so references can
/// be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct Registry {
    development: Profile,
    production: Profile,
}

impl Registry {
    /// Build the registry from the process environment.
    ///
    /// Loads a `.env` file when one is present, then reads `SECRET_KEY`
    /// once. An unset or empty variable falls back to the placeholder
    /// secret, which is only acceptable for local development.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secret_key = env::var_non_empty(SECRET_KEY_VAR).unwrap_or_else(|| {
            tracing::warn!("SECRET_KEY not set, using insecure default for development");
            DEFAULT_SECRET_KEY.to_string()
        });

        Self::with_secret_key(secret_key)
    }

    /// Build the registry around an explicit secret, without touching the
    /// environment.
    pub fn with_secret_key(secret_key: impl Into<String>) -> Self {
        let base = Settings::new(secret_key);
        Self {
            development: Profile::development(base.clone()),
            production: Profile::production(base),
        }
    }

    /// Look up a profile by registry key.
    ///
    /// Recognized keys are `"development"`, `"production"` and `"default"`
    /// (an alias of `"development"`). Any other key answers `None`; how to
    /// report that is the caller's decision.
    pub fn get(&self, name: &str) -> Option<&Profile> {
        name.parse::<ProfileName>().ok().map(|name| self.profile(name))
    }

    /// Look up a profile by typed name. Every name resolves.
    pub fn profile(&self, name: ProfileName) -> &Profile {
        match name {
            ProfileName::Production => &self.production,
            ProfileName::Development | ProfileName::Default => &self.development,
        }
    }

    /// The development profile.
    pub fn development(&self) -> &Profile {
        &self.development
    }

    /// The production profile.
    pub fn production(&self) -> &Profile {
        &self.production
    }
}
