//! Camada de acesso a dados
//!
//! Repositórios falam SQL; a construção do filtro da listagem vive em
//! `filtro` para poder ser testada isoladamente.

pub mod abastecimento_repository;
pub mod filtro;

pub use abastecimento_repository::AbastecimentoRepository;
pub use filtro::FiltroAbastecimentos;
