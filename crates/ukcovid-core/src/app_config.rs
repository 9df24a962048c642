use std::path::PathBuf;

/// Application configuration, loaded from `UKCOVID_*` environment
/// variables. Every field has a default; see [`crate::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the statistics API endpoint.
    pub api_base_url: String,
    /// Per-request timeout for the HTTP client.
    pub request_timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Interval between scheduler ticks in the watch loop.
    pub tick_interval_secs: u64,
    /// Age of the last check beyond which data is considered stale and
    /// eligible for an automatic re-fetch.
    pub stale_after_secs: u64,
    /// Age of the last successful update beyond which the system is
    /// treated as never having loaded (initial "Loading..." state).
    pub initial_after_secs: u64,
    /// Path of the JSON file holding the persisted last-modified and
    /// last-notification strings.
    pub state_path: PathBuf,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}
