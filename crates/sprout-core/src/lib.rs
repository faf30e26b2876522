//! # sprout-core
//!
//! Core types, traits, configuration, and error handling for the Sprout
//! post-discharge assistant.

pub mod config;
pub mod error;
pub mod message;
pub mod traits;
