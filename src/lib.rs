//! Runtime configuration for the filedrop upload service.
//!
//! This crate provides the profile registry the bootstrap selects from at
//! startup: shared base settings (secret key, upload folder, size cap,
//! allowed file extensions) plus a development and a production profile
//! layered on top. The environment is read exactly once, when the registry
//! is built; the resulting values are immutable for the life of the
//! process and are meant to be passed to consumers explicitly.
//!
//! ```no_run
//! use filedrop_config::{ProfileName, Registry};
//!
//! let registry = Registry::from_env();
//! let name = ProfileName::from_env().expect("unrecognized APP_ENV value");
//! let profile = registry.profile(name);
//! println!("binding {}", profile.addr());
//! ```

pub mod defaults;
pub mod env;
pub mod error;
pub mod registry;
pub mod settings;

pub use error::UnknownProfileError;
pub use registry::Registry;
pub use settings::{Profile, ProfileName, Settings};
