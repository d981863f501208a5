use serde::Deserialize;
use std::fmt;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesConfig {
    pub root: String,
    pub index_files: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    pub log_format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
}

/// The listen address in the configuration could not be parsed.
#[derive(Debug)]
pub struct AddrError(String);

impl fmt::Display for AddrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid listen address: {}", self.0)
    }
}

impl std::error::Error for AddrError {}

impl Config {
    /// Load configuration from an optional `config.toml` over built-in defaults.
    ///
    /// There is no CLI surface and no environment overrides; the optional
    /// file is the only way to change the defaults (0.0.0.0:8080, serving
    /// the current directory).
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Self::builder_with_defaults()?
            .add_source(config::File::with_name("config").required(false))
            .build()?;

        settings.try_deserialize()
    }

    /// Builder pre-populated with the hard defaults; `load` layers the
    /// optional config file on top of this.
    fn builder_with_defaults(
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("static_files.root", ".")?
            .set_default("static_files.index_files", vec!["index.html"])?
            .set_default("logging.access_log", true)?
            .set_default("logging.log_format", "common")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AddrError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| AddrError(format!("{}:{} ({e})", self.server.host, self.server.port)))
    }
}

/// Process-wide immutable state, created once at startup and shared via `Arc`.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> Config {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                workers: None,
            },
            static_files: StaticFilesConfig {
                root: ".".to_string(),
                index_files: vec!["index.html".to_string()],
            },
            logging: LoggingConfig {
                access_log: true,
                log_format: "common".to_string(),
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
            },
        }
    }

    #[test]
    fn test_builtin_defaults() {
        let cfg: Config = Config::builder_with_defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.workers, None);
        assert_eq!(cfg.static_files.root, ".");
        assert_eq!(cfg.static_files.index_files, vec!["index.html"]);
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.log_format, "common");
        assert_eq!(cfg.performance.keep_alive_timeout, 75);
        assert_eq!(cfg.performance.read_timeout, 30);
        assert_eq!(cfg.performance.write_timeout, 30);
    }

    #[test]
    fn test_socket_addr_valid() {
        let cfg = default_config();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_socket_addr_invalid_host() {
        let mut cfg = default_config();
        cfg.server.host = "not a host".to_string();
        let err = cfg.socket_addr().unwrap_err();
        assert!(err.to_string().contains("invalid listen address"));
    }
}
