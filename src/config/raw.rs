use serde::Deserialize;

const DEFAULT_DB_URL: &str = "reviews.db";
const DEFAULT_DB_CONNECTION_POOL_SIZE: u8 = 8;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    #[serde(default = "default_db_url")]
    pub connection_sqlite: String,
    #[serde(default = "default_db_connection_pool_size")]
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Self {
            connection_sqlite: default_db_url(),
            connection_pool_size: default_db_connection_pool_size(),
        }
    }
}

fn default_db_url() -> String {
    DEFAULT_DB_URL.to_string()
}

fn default_db_connection_pool_size() -> u8 {
    DEFAULT_DB_CONNECTION_POOL_SIZE
}
