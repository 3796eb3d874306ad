//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! backend defaults, and the user-facing failure messages.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "userdeck";

/// Crate version, as reported by `userdeck version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple (exported by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (looked up in the working directory).
pub const CONFIG_FILENAME: &str = ".userdeck.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "userdeck";

// ── Backend ─────────────────────────────────────────────────────────

/// Backend origin used when nothing overrides it.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Collection path, relative to the API base URL.
pub const USERS_PATH: &str = "/users";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ── User-facing messages ────────────────────────────────────────────

/// Banner text shown when the list fetch fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users";

/// Banner text shown when creating a user fails.
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create user";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_API_URL: &str = "USERDECK_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "USERDECK_TIMEOUT_SECS";
/// Log filter directive (`tracing_subscriber::EnvFilter` syntax).
pub const ENV_LOG: &str = "USERDECK_LOG";
