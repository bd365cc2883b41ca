//! Modelo de Abastecimento
//!
//! Este módulo contém o struct Abastecimento, que mapeia exatamente
//! a tabela `abastecimentos` do schema PostgreSQL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Um evento de abastecimento de veículo
///
/// Os nomes no wire seguem a API original: campos em português e
/// timestamps de controle em camelCase.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Abastecimento {
    pub id: Uuid,
    pub data: DateTime<Utc>,
    pub veiculo: String,
    pub km_atual: f64,
    pub quantidade_litros: f64,
    pub valor_total: f64,
    pub posto: String,
    pub combustivel: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}
