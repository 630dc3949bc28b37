use std::env;
use std::net::{IpAddr, SocketAddr};

use crate::tracker::OwnerId;

/// Runtime configuration for the tracker service: environment variables
/// first, `serve` command overrides on top.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    /// Owner whose records seed the in-memory store on startup.
    pub seed_owner: OwnerId,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None, None)
    }

    /// Load from `APP_HOST`, `APP_PORT`, `APP_LOG_LEVEL`, and `APP_OWNER_ID`,
    /// letting explicit `--host`/`--port` overrides win over the environment.
    /// The bind address is validated here rather than at listen time so a
    /// typo fails before the store is seeded.
    pub fn load_with(host: Option<&str>, port: Option<u16>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let host = match host {
            Some(value) => value.to_string(),
            None => env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
        };
        let port = match port {
            Some(value) => value,
            None => {
                let raw = env::var("APP_PORT").unwrap_or_else(|_| "3000".to_string());
                raw.parse::<u16>()
                    .map_err(|_| ConfigError::InvalidPort { value: raw })?
            }
        };
        let addr = SocketAddr::new(parse_host(&host)?, port);

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let raw_owner = env::var("APP_OWNER_ID").unwrap_or_else(|_| "1".to_string());
        let seed_owner = raw_owner
            .parse::<u64>()
            .map(OwnerId)
            .map_err(|_| ConfigError::InvalidOwner { value: raw_owner })?;

        Ok(Self {
            server: ServerConfig { addr },
            telemetry: TelemetryConfig { log_level },
            seed_owner,
        })
    }
}

/// Resolved HTTP server binding.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

fn parse_host(host: &str) -> Result<IpAddr, ConfigError> {
    if host.eq_ignore_ascii_case("localhost") {
        return Ok(IpAddr::from([127, 0, 0, 1]));
    }

    host.parse().map_err(|source| ConfigError::InvalidHost {
        value: host.to_string(),
        source,
    })
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16, got '{value}'")]
    InvalidPort { value: String },
    #[error("APP_HOST must be 'localhost' or an IP address, got '{value}'")]
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("APP_OWNER_ID must be an unsigned integer, got '{value}'")]
    InvalidOwner { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_OWNER_ID");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.server.addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.seed_owner, OwnerId(1));
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.server.addr.to_string(), "127.0.0.1:3000");
        env::remove_var("APP_HOST");
    }

    #[test]
    fn serve_overrides_win_over_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "192.168.1.10");
        env::set_var("APP_PORT", "4000");
        let config =
            AppConfig::load_with(Some("0.0.0.0"), Some(8080)).expect("overrides apply");
        assert_eq!(config.server.addr.to_string(), "0.0.0.0:8080");
        reset_env();
    }

    #[test]
    fn rejects_invalid_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "not-a-port");
        match AppConfig::load() {
            Err(ConfigError::InvalidPort { value }) => assert_eq!(value, "not-a-port"),
            other => panic!("expected invalid port error, got {other:?}"),
        }
        env::remove_var("APP_PORT");
    }

    #[test]
    fn rejects_invalid_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        match AppConfig::load_with(Some("not an address"), None) {
            Err(ConfigError::InvalidHost { value, .. }) => assert_eq!(value, "not an address"),
            other => panic!("expected invalid host error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_seed_owner() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_OWNER_ID", "-3");
        match AppConfig::load() {
            Err(ConfigError::InvalidOwner { value }) => assert_eq!(value, "-3"),
            other => panic!("expected invalid owner error, got {other:?}"),
        }
        env::remove_var("APP_OWNER_ID");
    }
}
