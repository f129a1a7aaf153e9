//! Layered configuration for the taskboard server.
//!
//! Priority, highest first:
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/taskboard/config.toml`)
//! 4. Compiled defaults

use crate::task::services::DEFAULT_MAX_TASKS;
use std::path::{Path, PathBuf};

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Default number of pooled `PostgreSQL` connections.
const DEFAULT_POOL_SIZE: u32 = 8;

/// Errors that can occur when loading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// The `PostgreSQL` backend was selected without a connection string.
    #[error("the postgres storage backend requires a database URL")]
    MissingDatabaseUrl,

    /// The pool must hold at least one connection.
    #[error("storage.pool_size must be at least 1")]
    EmptyPool,
}

/// Persistence backend selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local storage, lost on shutdown.
    #[default]
    Memory,
    /// `PostgreSQL` through Diesel.
    Postgres,
}

// TOML file structs. Every field is optional so files can override a subset.

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    server: ServerFileConfig,
    storage: StorageFileConfig,
    tasks: TasksFileConfig,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ServerFileConfig {
    bind_addr: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct StorageFileConfig {
    backend: Option<StorageBackend>,
    database_url: Option<String>,
    pool_size: Option<u32>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct TasksFileConfig {
    max_tasks: Option<u64>,
}

/// CLI arguments for the taskboard server.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Task list tracking server")]
pub struct CliArgs {
    /// Address to bind the HTTP server to.
    #[arg(short, long, env = "TASKBOARD_ADDR")]
    pub bind: Option<String>,

    /// Path to config file (default: `~/.config/taskboard/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Persistence backend.
    #[arg(long, value_enum)]
    pub storage: Option<StorageBackend>,

    /// `PostgreSQL` connection string.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of tasks across all task lists.
    #[arg(long)]
    pub max_tasks: Option<u64>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "TASKBOARD_LOG")]
    pub log_level: String,
}

/// Resolved persistence settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// In-memory repositories.
    Memory,
    /// Diesel repositories over an r2d2 pool.
    Postgres {
        /// Connection string.
        database_url: String,
        /// Maximum pooled connections.
        pool_size: u32,
    },
}

/// Fully resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to bind the server to (e.g. `127.0.0.1:8080`).
    pub bind_addr: String,
    /// Persistence settings.
    pub storage: StorageConfig,
    /// Global task limit.
    pub max_tasks: u64,
    /// Log level filter string.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_owned(),
            storage: StorageConfig::Memory,
            max_tasks: DEFAULT_MAX_TASKS,
            log_level: "info".to_owned(),
        }
    }
}

impl AppConfig {
    /// Loads configuration by merging CLI args, env vars and a TOML file.
    ///
    /// An explicit `--config` file must exist. Without `--config` the default
    /// path is tried and a missing file is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed,
    /// or if the merged storage settings are incomplete.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Self::resolve(cli, &file)
    }

    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let backend = cli
            .storage
            .or(file.storage.backend)
            .unwrap_or_default();
        let storage = match backend {
            StorageBackend::Memory => StorageConfig::Memory,
            StorageBackend::Postgres => {
                let database_url = cli
                    .database_url
                    .clone()
                    .or_else(|| file.storage.database_url.clone())
                    .ok_or(ConfigError::MissingDatabaseUrl)?;
                let pool_size = file.storage.pool_size.unwrap_or(DEFAULT_POOL_SIZE);
                if pool_size == 0 {
                    return Err(ConfigError::EmptyPool);
                }
                StorageConfig::Postgres {
                    database_url,
                    pool_size,
                }
            }
        };

        Ok(Self {
            bind_addr: cli
                .bind
                .clone()
                .or_else(|| file.server.bind_addr.clone())
                .unwrap_or(defaults.bind_addr),
            storage,
            max_tasks: cli
                .max_tasks
                .or(file.tasks.max_tasks)
                .unwrap_or(defaults.max_tasks),
            log_level: cli.log_level.clone(),
        })
    }
}

fn load_config_file(explicit_path: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    if let Some(path) = explicit_path {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(toml::from_str(&contents)?);
    }

    let Some(config_dir) = dirs::config_dir() else {
        return Ok(ConfigFile::default());
    };
    let path = config_dir.join("taskboard").join("config.toml");

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(source) => Err(ConfigError::ReadFile { path, source }),
    }
}
