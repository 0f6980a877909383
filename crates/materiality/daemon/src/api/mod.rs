//! API layer for the materiality daemon

pub mod rest;

pub use rest::router::create_router;
