#![forbid(unsafe_code)]

//! Core calculation pipeline for personalized nutrition recommendations.
//!
//! This crate provides:
//! - Domain types (profile, goal, macro breakdown, response)
//! - Request validation
//! - The five pipeline stages (BMR, TDEE/BMI, goal, targets/macros, note)
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod rounding;
pub mod validation;
pub mod metabolic;
pub mod energy;
pub mod goal;
pub mod targets;
pub mod note;
pub mod pipeline;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use validation::ProfileRequest;
pub use pipeline::{recommend, status};
