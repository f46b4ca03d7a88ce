//! Fixed configuration values shared by every profile.

/// Placeholder secret used when [`SECRET_KEY_VAR`] is unset or empty.
/// Intentionally unusable for real deployments, which must provide their own.
pub const DEFAULT_SECRET_KEY: &str = "your-secret-key-change-this-in-production";

/// Environment variable holding the signing/session secret.
pub const SECRET_KEY_VAR: &str = "SECRET_KEY";

/// Environment variable holding the deployment-mode flag.
pub const APP_ENV_VAR: &str = "APP_ENV";

/// Directory uploads are written to, relative to the working directory.
pub const UPLOAD_FOLDER: &str = "uploads";

/// Maximum accepted upload size in bytes (16 MB).
pub const MAX_CONTENT_LENGTH: usize = 16 * 1024 * 1024;

/// File extensions the application accepts: lowercase, no leading dot.
pub const ALLOWED_EXTENSIONS: [&str; 12] = [
    "txt", "pdf", "png", "jpg", "jpeg", "gif", "doc", "docx", "xls", "xlsx", "zip", "rar",
];

/// Development listener address.
pub const DEV_HOST: &str = "127.0.0.1";

/// Development listener port.
pub const DEV_PORT: u16 = 5000;

/// Production listener address.
pub const PROD_HOST: &str = "0.0.0.0";

/// Production listener port.
pub const PROD_PORT: u16 = 8000;
