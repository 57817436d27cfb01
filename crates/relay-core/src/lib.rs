//! # relay-core
//!
//! Core types, traits, configuration, and error handling for the Relay gateway.

pub mod config;
pub mod error;
pub mod message;
pub mod traits;
