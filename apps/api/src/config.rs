//! Configuration for the Ecoleta API

use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig, uploads::UploadsConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub uploads: UploadsConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let uploads = UploadsConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            uploads,
            environment,
        })
    }
}
