//! CLI module graph.

pub mod command;
pub mod config;
pub mod diagnostic;
pub mod evaluate;
pub mod market;
pub mod match_type;
pub mod output;
pub mod paths;
