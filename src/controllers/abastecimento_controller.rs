//! Controller de Abastecimentos
//!
//! Orquestra validação e acesso ao repositório para as operações CRUD
//! e para as consultas de apoio (sugestão de veículos, último KM).

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::abastecimento_dto::{
    CreateAbastecimentoRequest, ListaAbastecimentosResponse, ListarAbastecimentosQuery,
    UpdateAbastecimentoRequest,
};
use crate::models::Abastecimento;
use crate::repositories::{AbastecimentoRepository, FiltroAbastecimentos};
use crate::utils::errors::{not_found_error, AppResult};

pub struct AbastecimentoController {
    repository: AbastecimentoRepository,
}

impl AbastecimentoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AbastecimentoRepository::new(pool),
        }
    }

    /// Cria um abastecimento; todas as violações de validação são
    /// reportadas juntas, não apenas a primeira.
    pub async fn create(&self, request: CreateAbastecimentoRequest) -> AppResult<Abastecimento> {
        let novo = request.validar()?;
        self.repository.create(novo).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Abastecimento> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Abastecimento"))
    }

    /// Listagem filtrada e paginada. Página além da última devolve
    /// lista vazia com as contagens corretas, nunca erro.
    pub async fn list(
        &self,
        query: ListarAbastecimentosQuery,
    ) -> AppResult<ListaAbastecimentosResponse> {
        let filtro = FiltroAbastecimentos::try_from_query(query)?;

        let total_count = self.repository.count(&filtro).await?;
        let abastecimentos = self.repository.list(&filtro).await?;

        Ok(ListaAbastecimentosResponse {
            data: abastecimentos,
            total_paginas: filtro.total_paginas(total_count),
            pagina_atual: filtro.pagina,
            total_count,
        })
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateAbastecimentoRequest,
    ) -> AppResult<Abastecimento> {
        let alteracao = request.validar()?;

        self.repository
            .update(id, alteracao)
            .await?
            .ok_or_else(|| not_found_error("Abastecimento"))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Abastecimento"));
        }
        Ok(())
    }

    /// Até 10 veículos distintos para o autocomplete do formulário
    pub async fn sugerir_veiculos(&self, termo: Option<String>) -> AppResult<Vec<String>> {
        let termo = termo.unwrap_or_default();
        self.repository.distinct_veiculos(termo.trim()).await
    }

    /// Último KM conhecido do veículo; None quando não há registro
    /// ou o veículo não foi informado (o cliente trata como "vazio").
    pub async fn ultimo_km(&self, veiculo: Option<String>) -> AppResult<Option<f64>> {
        let veiculo = veiculo
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        match veiculo {
            Some(veiculo) => self.repository.ultimo_km(&veiculo).await,
            None => Ok(None),
        }
    }
}
