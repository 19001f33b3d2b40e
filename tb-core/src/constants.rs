//! Application-wide constants.

/// Application name.
pub const APP_NAME: &str = "Tinybeans";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root of the Tinybeans REST API. All endpoint paths are relative to this.
pub const API_BASE_URL: &str = "https://tinybeans.com/api/1/";

/// Registered API consumer identity sent as `clientId` on every
/// authenticated-flow call. This is the published iOS client identifier,
/// not a secret.
pub const IOS_CLIENT_ID: &str = "13bcd503-2137-9085-a437-d9f2ac9281a1";

/// Number of entries requested per page when walking a journal feed.
pub const ENTRIES_FETCH_SIZE: u32 = 200;

/// Default API request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Date format for export boundaries and child dates of birth.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
