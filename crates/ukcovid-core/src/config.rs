use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// 120 days. Initial `FetchState` timestamps use a distant-past
/// sentinel, so anything older than this horizon means "never loaded".
const DEFAULT_INITIAL_AFTER_SECS: u64 = 60 * 60 * 24 * 120;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in
/// the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Err(_) => Ok(default),
            Ok(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    };

    let api_base_url = or_default(
        "UKCOVID_API_BASE_URL",
        "https://api.coronavirus.data.gov.uk/v1/data",
    );
    let user_agent = or_default("UKCOVID_USER_AGENT", "ukcovid/0.1 (statistics-refresh)");
    let state_path = PathBuf::from(or_default("UKCOVID_STATE_PATH", "./ukcovid-state.json"));
    let log_level = or_default("UKCOVID_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("UKCOVID_REQUEST_TIMEOUT_SECS", 30)?;
    let tick_interval_secs = parse_u64("UKCOVID_TICK_INTERVAL_SECS", 60)?;
    let stale_after_secs = parse_u64("UKCOVID_STALE_AFTER_SECS", 15 * 60)?;
    let initial_after_secs = parse_u64("UKCOVID_INITIAL_AFTER_SECS", DEFAULT_INITIAL_AFTER_SECS)?;

    Ok(AppConfig {
        api_base_url,
        request_timeout_secs,
        user_agent,
        tick_interval_secs,
        stale_after_secs,
        initial_after_secs,
        state_path,
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn empty_environment_loads_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            cfg.api_base_url,
            "https://api.coronavirus.data.gov.uk/v1/data"
        );
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.tick_interval_secs, 60);
        assert_eq!(cfg.stale_after_secs, 900);
        assert_eq!(cfg.initial_after_secs, 10_368_000);
        assert_eq!(cfg.state_path, PathBuf::from("./ukcovid-state.json"));
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn overrides_are_honoured() {
        let mut map = HashMap::new();
        map.insert("UKCOVID_API_BASE_URL", "http://localhost:9999/v1/data");
        map.insert("UKCOVID_STALE_AFTER_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.api_base_url, "http://localhost:9999/v1/data");
        assert_eq!(cfg.stale_after_secs, 60);
    }

    #[test]
    fn invalid_numeric_value_is_rejected() {
        let mut map = HashMap::new();
        map.insert("UKCOVID_TICK_INTERVAL_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "UKCOVID_TICK_INTERVAL_SECS"),
            "expected InvalidEnvVar(UKCOVID_TICK_INTERVAL_SECS), got: {result:?}"
        );
    }
}
