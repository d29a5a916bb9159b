//! Utility modules for common functionality
//!
//! - `logging`: Logging configuration and setup
//! - `progress`: Spinners and status messages for consistent CLI feedback

pub mod logging;
pub mod progress;
