// Configuration module entry point
// Layers defaults, an optional config file, environment and CLI flags

mod cli;
mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use cli::Cli;
pub use state::AppState;
pub use types::{Config, LoggingConfig, PerformanceConfig, ServerConfig};

use crate::error::StartupError;

/// Config file looked up when `--config` is not given (any supported extension)
pub const DEFAULT_CONFIG_NAME: &str = "clean-url-server";

/// Environment variable prefix, e.g. `CLEAN_URL_SERVER__PORT=8001`
pub const ENV_PREFIX: &str = "CLEAN_URL";

impl Config {
    /// Load configuration: defaults < config file < environment < CLI flags
    pub fn load(cli: &Cli) -> Result<Self, StartupError> {
        let (file_name, required) = cli
            .config
            .as_deref()
            .map_or((DEFAULT_CONFIG_NAME, false), |path| (path, true));

        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name(file_name).required(required))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.root", ".")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.request_timeout", 30)?
            .set_override_option("server.port", cli.port.map(i64::from))?
            .set_override_option("server.host", cli.host.clone())?
            .set_override_option("server.root", cli.root.clone())?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, StartupError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| StartupError::InvalidAddress(format!("{}: {e}", self.server.host)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::load(&Cli::default()).unwrap();
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.root, ".");
        assert_eq!(cfg.server.workers, None);
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "common");
        assert!(cfg.performance.keep_alive);
        assert_eq!(cfg.performance.request_timeout, 30);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli {
            port: Some(8001),
            host: Some("127.0.0.1".to_string()),
            root: Some("public".to_string()),
            config: None,
        };
        let cfg = Config::load(&cli).unwrap();
        assert_eq!(cfg.server.port, 8001);
        assert_eq!(cfg.server.root, "public");
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "127.0.0.1:8001".parse().unwrap()
        );
    }

    #[test]
    fn test_explicit_config_file_must_exist() {
        let cli = Cli {
            config: Some("/nonexistent/clean-url-server-test.toml".to_string()),
            ..Cli::default()
        };
        assert!(matches!(Config::load(&cli), Err(StartupError::Config(_))));
    }

    #[test]
    fn test_config_file_values() {
        let dir = crate::test_support::ScratchDir::new("config");
        let file = dir.write(
            "server.toml",
            b"[server]\nport = 9100\nworkers = 2\n\n[logging]\naccess_log = false\naccess_log_format = \"json\"\n",
        );
        let cli = Cli {
            config: Some(file.to_string_lossy().into_owned()),
            ..Cli::default()
        };
        let cfg = Config::load(&cli).unwrap();
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.server.workers, Some(2));
        assert!(!cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "json");
    }

    #[test]
    fn test_invalid_host() {
        let cli = Cli {
            host: Some("not a host".to_string()),
            ..Cli::default()
        };
        let cfg = Config::load(&cli).unwrap();
        assert!(matches!(
            cfg.get_socket_addr(),
            Err(StartupError::InvalidAddress(_))
        ));
    }
}
