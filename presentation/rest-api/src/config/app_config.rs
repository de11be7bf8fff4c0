use std::path::PathBuf;

use poem::middleware::Cors;

use super::{cors_config, preferences_config, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub preferences_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            preferences_path: preferences_config::preferences_path(),
        }
    }
}
