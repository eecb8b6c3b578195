//! HTTP middleware module.
//!
//! - CORS configuration
//! - Security headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{cors_layer, security_headers};
//!
//! let app = security_headers(Router::new()).layer(cors_layer(&cors_config)?);
//! ```

pub mod cors;
pub mod security;

pub use cors::{cors_layer, create_cors_layer, create_permissive_cors_layer};
pub use security::{security_header_values, security_headers};
