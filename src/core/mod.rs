//! Core library components.

pub mod domain;
pub mod engine;
pub mod presentation;
