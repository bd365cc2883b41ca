//! Rotas da API

pub mod abastecimento_routes;
