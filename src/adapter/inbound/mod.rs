//! Inbound adapters: the command line and market file input.

pub mod cli;
pub mod market_file;
