//! Application state management

use domain_users::{InMemoryUserRepository, UserService};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub users: UserService<InMemoryUserRepository>,
}

impl AppState {
    /// Builds the user collection once for the process lifetime.
    pub fn new(config: Config) -> Self {
        let strategy = config.users.id_strategy;
        let repository = if config.users.seed {
            InMemoryUserRepository::seeded(strategy)
        } else {
            InMemoryUserRepository::with_strategy(strategy)
        };

        Self {
            config,
            users: UserService::new(repository),
        }
    }
}
