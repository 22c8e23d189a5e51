// Core modules
mod error;
mod password;
mod token;
mod validate;

pub mod service;

// Re-export error types
pub use error::{AuthError, Result};

// Re-export crypto primitives (for standalone use)
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenService};

pub use service::AuthGateway;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{AuthError, AuthGateway, Claims, Result, TokenService};
}
