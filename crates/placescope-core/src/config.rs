use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; decoupling the lookup lets tests drive this
/// with a plain `HashMap` instead of mutating the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::str::FromStr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let optional_url = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let env = parse_environment(&or_default("PLACESCOPE_ENV", "development"))?;

    let bind_addr = or_default("PLACESCOPE_BIND_ADDR", "0.0.0.0:8000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("PLACESCOPE_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("PLACESCOPE_LOG_LEVEL", "info");
    let profile_source_url = optional_url("PLACESCOPE_PROFILE_SOURCE_URL");
    let probe_url = optional_url("PLACESCOPE_PROBE_URL");

    let request_timeout_secs: u64 = parse_number(&lookup, "PLACESCOPE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "PLACESCOPE_USER_AGENT",
        "placescope/0.1 (local-search-diagnostics)",
    );
    let max_retries: u32 = parse_number(&lookup, "PLACESCOPE_MAX_RETRIES", "3")?;
    let retry_backoff_base_ms: u64 =
        parse_number(&lookup, "PLACESCOPE_RETRY_BACKOFF_BASE_MS", "1000")?;
    let probe_delay_ms: u64 = parse_number(&lookup, "PLACESCOPE_PROBE_DELAY_MS", "0")?;

    let default_max_pages: u32 = parse_number(&lookup, "PLACESCOPE_DEFAULT_MAX_PAGES", "3")?;
    if !(1..=5).contains(&default_max_pages) {
        return Err(invalid(
            "PLACESCOPE_DEFAULT_MAX_PAGES",
            format!("must be between 1 and 5, got {default_max_pages}"),
        ));
    }

    let reference_seed = match lookup("PLACESCOPE_REFERENCE_SEED") {
        Ok(raw) if !raw.trim().is_empty() => Some(
            u64::from_str(raw.trim())
                .map_err(|e| invalid("PLACESCOPE_REFERENCE_SEED", e.to_string()))?,
        ),
        _ => None,
    };

    let locality_tokens = or_default("PLACESCOPE_LOCALITY_TOKENS", "")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect();

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        profile_source_url,
        probe_url,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_ms,
        probe_delay_ms,
        default_max_pages,
        reference_seed,
        locality_tokens,
    })
}

fn parse_number<F, T>(lookup: &F, var: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(var).unwrap_or_else(|_| default.to_string());
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PLACESCOPE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
