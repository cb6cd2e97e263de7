//! Terminal client for the GitGrade repository scoring service.
//!
//! The library holds the presentation pipeline (score tiers, breakdown
//! indicators, endpoint resolution, report links) and the request
//! orchestration; `main.rs` only wires it to the command line.

pub mod adapters;
pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
