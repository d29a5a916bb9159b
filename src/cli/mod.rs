//! Command Line Interface module
//!
//! - `build`: the full lyrics-to-slides run
//! - `preview`: show the slide units without touching the network
//! - `probe`: Drive connectivity self-test
//! - `config`: show or write the effective configuration

pub mod build;
pub mod config;
pub mod preview;
pub mod probe;
