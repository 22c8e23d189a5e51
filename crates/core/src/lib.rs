//! Shared configuration for the datachat workspace.

pub mod config;
pub use config::{AppConfig, AuthConfig, DEFAULT_SECRET, ServerConfig};
