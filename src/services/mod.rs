//! Service layer
//!
//! `SimpleServices` owns the loaded configuration and builds the HTTP client
//! and the authenticated Google clients the commands need.

pub mod simple_container;

pub use simple_container::{GoogleServices, SimpleServices};
