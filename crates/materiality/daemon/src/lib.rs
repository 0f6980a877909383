//! Materiality Daemon library
//!
//! This module provides the core components for the materiality daemon:
//! - REST API handlers
//! - Configuration loading
//! - Server lifecycle management

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod server;

pub use api::create_router;
pub use config::DaemonConfig;
pub use error::{ApiError, DaemonError};
pub use server::Server;
