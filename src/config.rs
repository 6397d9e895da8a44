use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Sapu";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Address the server binds when `SAPU_LISTEN_ADDR` is not set.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> String {
    "info".to_string()
}

/// Default location of the SQLite file, relative to the working directory.
pub fn default_database_path() -> PathBuf {
    PathBuf::from("database").join("sapu.db")
}

/// Runtime configuration, built once at startup and carried in the router
/// state. No process-global mutable state.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub listen_addr: String,
    pub database_path: PathBuf,
}

impl ServiceConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let listen_addr = std::env::var("SAPU_LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let database_path = std::env::var("SAPU_DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_database_path());
        Self {
            listen_addr,
            database_path,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            database_path: default_database_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_database_path_under_database_dir() {
        let path = default_database_path();
        assert!(path.starts_with("database"));
        assert!(path.ends_with("sapu.db"));
    }

    #[test]
    fn default_config_uses_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.database_path, default_database_path());
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "1.2.3");
    }
}
