use std::{
    env, fs,
    io::ErrorKind,
    path::Path,
};

use anyhow::Result;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "reviewdb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

#[derive(Debug)]
pub struct Config {
    pub db: Db,
}

#[derive(Debug)]
pub struct Db {
    /// SQLite connection
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Config {
    pub fn try_load_from_file_or_default(file_path: Option<&Path>) -> Result<Self> {
        let file_path = file_path.unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::default()
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::from(raw_config);
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.connection_sqlite = db_url;
        }
        Ok(cfg)
    }
}

impl From<raw::Config> for Config {
    fn from(from: raw::Config) -> Self {
        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = from.db.unwrap_or_default();
        Self {
            db: Db {
                connection_sqlite,
                connection_pool_size,
            },
        }
    }
}
