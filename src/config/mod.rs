//! Configuração do projeto

pub mod environment;

pub use environment::*;
