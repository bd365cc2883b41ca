//! DTOs da API
//!
//! Requests, responses e query params expostos pela camada HTTP.

pub mod abastecimento_dto;
