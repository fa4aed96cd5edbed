//! Implementations of the application's edges (hexagonal adapters).

pub mod inbound;
