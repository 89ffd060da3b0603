//! Runtime configuration.
//!
//! Values are layered, lowest precedence first:
//! - built-in defaults
//! - `registry.toml` in the working directory (optional)
//! - environment variables prefixed `REGISTRY_`, using `__` for nesting
//!   (e.g. `REGISTRY_DATABASE__NAME=school`)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::RegistryError;

pub const CONFIG_FILE: &str = "registry.toml";
pub const ENV_PREFIX: &str = "REGISTRY_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub provision: ProvisionConfig,
    pub loglevel: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    pub listen: SocketAddr,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatabaseConfig {
    /// Directory holding the SQLite file.
    pub dir: PathBuf,
    /// Database name; the file on disk is `<dir>/<name>.db`.
    pub name: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProvisionConfig {
    /// Write templates and the DDL to disk on every startup.
    pub export_assets: bool,
    pub templates_dir: PathBuf,
    pub schema_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            provision: ProvisionConfig::default(),
            loglevel: "info".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 5000)),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            name: "student_management".to_string(),
            max_connections: 5,
        }
    }
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            export_assets: true,
            templates_dir: PathBuf::from("templates"),
            schema_file: PathBuf::from("setup_database.sql"),
        }
    }
}

impl DatabaseConfig {
    /// Path of the SQLite file backing the named database.
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(format!("{}.db", self.name))
    }
}

impl Config {
    /// Load from defaults, `registry.toml` and `REGISTRY_*` environment variables.
    pub fn load() -> Result<Self, RegistryError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(file: &Path) -> Result<Self, RegistryError> {
        let cfg = Self::figment(file).extract()?;
        Ok(cfg)
    }

    fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_apply_without_sources() {
        Jail::expect_with(|_jail| {
            let cfg = Config::load().expect("defaults should extract");
            assert_eq!(cfg, Config::default());
            assert_eq!(
                cfg.database.file_path(),
                PathBuf::from("./student_management.db")
            );
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                loglevel = "debug"

                [database]
                name = "from_file"
                max_connections = 2
                "#,
            )?;
            jail.set_env("REGISTRY_DATABASE__NAME", "from_env");
            jail.set_env("REGISTRY_PROVISION__EXPORT_ASSETS", "false");

            let cfg = Config::load().expect("layered config should extract");
            assert_eq!(cfg.loglevel, "debug");
            assert_eq!(cfg.database.name, "from_env");
            assert_eq!(cfg.database.max_connections, 2);
            assert!(!cfg.provision.export_assets);
            assert_eq!(cfg.server.listen, ServerConfig::default().listen);
            Ok(())
        });
    }
}
