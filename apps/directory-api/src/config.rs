//! Configuration for the User Directory API

use core_config::{
    app_info, cors::CorsConfig, env_flag, env_parse_or, server::ServerConfig, AppInfo, FromEnv,
};
use domain_users::IdStrategy;

pub use core_config::{ConfigError, Environment};

/// Settings for the user collection
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsersConfig {
    pub id_strategy: IdStrategy,
    pub seed: bool,
}

impl FromEnv for UsersConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            id_strategy: env_parse_or("USER_ID_STRATEGY", IdStrategy::default())?,
            seed: env_flag("SEED_USERS", true)?,
        })
    }
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            seed: true,
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub users: UsersConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let cors = CorsConfig::from_env()?;
        let users = UsersConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            cors,
            users,
            environment,
        })
    }
}
