//! Foundation module - small utilities shared by the façade
//!
//! - Frame timing driven by an external clock
//! - Logging initialization

pub mod logging;
pub mod time;
