//! Users Domain
//!
//! In-memory user directory with a CRUD HTTP surface.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, response shaping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← id resolution, NotFound mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← ordered in-memory collection (trait + implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User, DTOs, id strategy
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{handlers, IdStrategy, InMemoryUserRepository, UserService};
//!
//! let repository = InMemoryUserRepository::seeded(IdStrategy::Length);
//! let service = UserService::new(repository);
//!
//! // Mount under /api/users
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult, USER_NOT_FOUND};
pub use handlers::ApiDoc;
pub use models::{seed_users, CreateUser, IdStrategy, UpdateUser, User, UserEnvelope, UserList};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
