//! Middleware do sistema

pub mod cors;

pub use cors::*;
