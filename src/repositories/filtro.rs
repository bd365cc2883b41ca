//! Construtor de filtros da listagem
//!
//! Traduz os query params opcionais da listagem em um plano de consulta:
//! filtro normalizado + skip/limit + contagem de páginas. A ordenação é
//! sempre por `data` decrescente (mais recente primeiro).

use chrono::{DateTime, Utc};

use crate::dto::abastecimento_dto::ListarAbastecimentosQuery;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::parse_data_flexivel;

const PAGINA_PADRAO: i64 = 1;
const POR_PAGINA_PADRAO: i64 = 10;

/// Filtro normalizado da listagem de abastecimentos
#[derive(Debug, Clone, PartialEq)]
pub struct FiltroAbastecimentos {
    pub veiculo: Option<String>,
    pub data_inicial: Option<DateTime<Utc>>,
    pub data_final: Option<DateTime<Utc>>,
    pub pagina: i64,
    pub por_pagina: i64,
}

impl FiltroAbastecimentos {
    /// Normaliza os query params da requisição.
    ///
    /// Datas aceitam "YYYY-MM-DD" ou RFC3339; valores de página abaixo
    /// de 1 são elevados para 1, nunca rejeitados.
    pub fn try_from_query(query: ListarAbastecimentosQuery) -> AppResult<Self> {
        let mut erros: Vec<&str> = Vec::new();

        let data_inicial = match &query.data_inicial {
            Some(valor) => match parse_data_flexivel(valor) {
                Ok(data) => Some(data),
                Err(_) => {
                    erros.push("Data inicial inválida");
                    None
                }
            },
            None => None,
        };

        let data_final = match &query.data_final {
            Some(valor) => match parse_data_flexivel(valor) {
                Ok(data) => Some(data),
                Err(_) => {
                    erros.push("Data final inválida");
                    None
                }
            },
            None => None,
        };

        if !erros.is_empty() {
            return Err(AppError::BadRequest(erros.join(", ")));
        }

        Ok(Self {
            veiculo: query
                .veiculo
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            data_inicial,
            data_final,
            pagina: query.page.unwrap_or(PAGINA_PADRAO).max(1),
            por_pagina: query.limit.unwrap_or(POR_PAGINA_PADRAO).max(1),
        })
    }

    /// Padrão de busca do ILIKE (substring, case-insensitive)
    pub fn padrao_veiculo(&self) -> Option<String> {
        self.veiculo.as_ref().map(|v| format!("%{}%", v))
    }

    /// Quantos registros pular (páginas anteriores).
    /// Satura em vez de estourar: página gigante vira só uma lista vazia.
    pub fn offset(&self) -> i64 {
        self.pagina.saturating_sub(1).saturating_mul(self.por_pagina)
    }

    /// Tamanho da página
    pub fn limite(&self) -> i64 {
        self.por_pagina
    }

    /// Total de páginas para uma contagem de registros
    pub fn total_paginas(&self, total_count: i64) -> i64 {
        // Equivalente estável de i64::div_ceil (instável no rustc estável)
        let quociente = total_count / self.por_pagina;
        if total_count % self.por_pagina > 0 {
            quociente + 1
        } else {
            quociente
        }
    }
}
