//! DTOs de Abastecimento
//!
//! Requests e responses da API, com as regras de validação dos campos.
//! As mensagens são as mesmas que a API original devolvia ao cliente.
//!
//! Os campos obrigatórios entram como default/Option para que campo
//! faltando e data mal formada sejam reportados pelo mesmo caminho das
//! demais violações, todas juntas numa única resposta 400.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

use crate::models::Abastecimento;
use crate::utils::errors::{bad_request_error, AppError, AppResult};
use crate::utils::validation::parse_data_flexivel;

// Request para criar um abastecimento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAbastecimentoRequest {
    #[serde(default)]
    #[validate(custom(
        function = "crate::utils::validation::validar_data",
        message = "Data inválida"
    ))]
    pub data: String,

    #[serde(default)]
    #[validate(custom(
        function = "crate::utils::validation::validate_not_empty",
        message = "Veículo é obrigatório"
    ))]
    pub veiculo: String,

    #[validate(
        required(message = "KM atual deve ser um número positivo"),
        range(min = 0.0, message = "KM atual deve ser um número positivo")
    )]
    pub km_atual: Option<f64>,

    #[validate(
        required(message = "Quantidade de litros deve ser positiva"),
        range(min = 0.0, message = "Quantidade de litros deve ser positiva")
    )]
    pub quantidade_litros: Option<f64>,

    #[validate(
        required(message = "Valor total deve ser positivo"),
        range(min = 0.0, message = "Valor total deve ser positivo")
    )]
    pub valor_total: Option<f64>,

    #[serde(default)]
    #[validate(custom(
        function = "crate::utils::validation::validate_not_empty",
        message = "Posto é obrigatório"
    ))]
    pub posto: String,

    #[serde(default)]
    #[validate(custom(
        function = "crate::utils::validation::validate_not_empty",
        message = "Combustível é obrigatório"
    ))]
    pub combustivel: String,
}

/// Registro de entrada já validado e normalizado, pronto para inserir
#[derive(Debug, Clone)]
pub struct NovoAbastecimento {
    pub data: DateTime<Utc>,
    pub veiculo: String,
    pub km_atual: f64,
    pub quantidade_litros: f64,
    pub valor_total: f64,
    pub posto: String,
    pub combustivel: String,
}

impl CreateAbastecimentoRequest {
    /// Valida o request inteiro, juntando todas as violações, e converte
    /// para o registro normalizado (datas convertidas, strings aparadas).
    pub fn validar(self) -> AppResult<NovoAbastecimento> {
        self.validate().map_err(AppError::Validation)?;

        let data =
            parse_data_flexivel(&self.data).map_err(|_| bad_request_error("Data inválida"))?;

        Ok(NovoAbastecimento {
            data,
            veiculo: self.veiculo.trim().to_string(),
            km_atual: self.km_atual.unwrap_or_default(),
            quantidade_litros: self.quantidade_litros.unwrap_or_default(),
            valor_total: self.valor_total.unwrap_or_default(),
            posto: self.posto.trim().to_string(),
            combustivel: self.combustivel.trim().to_string(),
        })
    }
}

// Request para atualizar um abastecimento (parcial ou completo)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAbastecimentoRequest {
    #[validate(custom(
        function = "crate::utils::validation::validar_data",
        message = "Data inválida"
    ))]
    pub data: Option<String>,

    #[validate(custom(
        function = "crate::utils::validation::validate_not_empty",
        message = "Veículo é obrigatório"
    ))]
    pub veiculo: Option<String>,

    #[validate(range(min = 0.0, message = "KM atual deve ser um número positivo"))]
    pub km_atual: Option<f64>,

    #[validate(range(min = 0.0, message = "Quantidade de litros deve ser positiva"))]
    pub quantidade_litros: Option<f64>,

    #[validate(range(min = 0.0, message = "Valor total deve ser positivo"))]
    pub valor_total: Option<f64>,

    #[validate(custom(
        function = "crate::utils::validation::validate_not_empty",
        message = "Posto é obrigatório"
    ))]
    pub posto: Option<String>,

    #[validate(custom(
        function = "crate::utils::validation::validate_not_empty",
        message = "Combustível é obrigatório"
    ))]
    pub combustivel: Option<String>,
}

/// Alteração parcial já validada; campos ausentes ficam como estão
#[derive(Debug, Clone, Default)]
pub struct AtualizacaoAbastecimento {
    pub data: Option<DateTime<Utc>>,
    pub veiculo: Option<String>,
    pub km_atual: Option<f64>,
    pub quantidade_litros: Option<f64>,
    pub valor_total: Option<f64>,
    pub posto: Option<String>,
    pub combustivel: Option<String>,
}

impl UpdateAbastecimentoRequest {
    /// Valida os campos presentes com as mesmas regras da criação
    pub fn validar(self) -> AppResult<AtualizacaoAbastecimento> {
        self.validate().map_err(AppError::Validation)?;

        let data = match &self.data {
            Some(valor) => Some(
                parse_data_flexivel(valor).map_err(|_| bad_request_error("Data inválida"))?,
            ),
            None => None,
        };

        Ok(AtualizacaoAbastecimento {
            data,
            veiculo: self.veiculo.map(|v| v.trim().to_string()),
            km_atual: self.km_atual,
            quantidade_litros: self.quantidade_litros,
            valor_total: self.valor_total,
            posto: self.posto.map(|p| p.trim().to_string()),
            combustivel: self.combustivel.map(|c| c.trim().to_string()),
        })
    }
}

// Query params da listagem
#[derive(Debug, Default, Deserialize)]
pub struct ListarAbastecimentosQuery {
    pub veiculo: Option<String>,
    #[serde(rename = "dataInicial")]
    pub data_inicial: Option<String>,
    #[serde(rename = "dataFinal")]
    pub data_final: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<i64>,
}

// Query params da sugestão de veículos
#[derive(Debug, Default, Deserialize)]
pub struct SugerirVeiculosQuery {
    pub q: Option<String>,
}

// Query params do último KM
#[derive(Debug, Default, Deserialize)]
pub struct UltimoKmQuery {
    pub veiculo: Option<String>,
}

/// Envelope padrão de sucesso: `{"data": ...}`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Resposta da listagem paginada
#[derive(Debug, Serialize)]
pub struct ListaAbastecimentosResponse {
    pub data: Vec<Abastecimento>,
    #[serde(rename = "totalPaginas")]
    pub total_paginas: i64,
    #[serde(rename = "paginaAtual")]
    pub pagina_atual: i64,
    #[serde(rename = "totalCount")]
    pub total_count: i64,
}

/// Resposta de remoção
#[derive(Debug, Serialize)]
pub struct MensagemResponse {
    pub message: String,
}

/// Resposta do último KM conhecido de um veículo
///
/// Sem registro, o cliente original espera o sentinela `""` em vez de
/// erro ou null.
#[derive(Debug, Serialize)]
pub struct UltimoKmResponse {
    #[serde(serialize_with = "serializar_km")]
    pub km_atual: Option<f64>,
}

fn serializar_km<S>(km: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match km {
        Some(valor) => serializer.serialize_f64(*valor),
        None => serializer.serialize_str(""),
    }
}
