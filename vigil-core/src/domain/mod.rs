//! Domain types
//!
//! Business entities reported by the run service.

pub mod annotation;
pub mod job;
pub mod run;
pub mod status;
