//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! arbitrage logic: configuration loading, validation and logging setup.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading and validation

pub mod config;
