//! Controllers da aplicação

pub mod abastecimento_controller;

pub use abastecimento_controller::AbastecimentoController;
