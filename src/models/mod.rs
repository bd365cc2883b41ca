//! Modelos de domínio
//!
//! Structs que mapeiam as tabelas do banco de dados.

pub mod abastecimento;

pub use abastecimento::Abastecimento;
