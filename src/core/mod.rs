//! Core functionality modules
//!
//! - `lyrics`: reading lyrics and pairing lines into slide units
//! - `google`: Google OAuth2, Slides and Drive REST clients
//! - `presentation`: building, filling and sharing the deck
//! - `report`: the result file written after a successful run

pub mod google;
pub mod lyrics;
pub mod presentation;
pub mod report;
