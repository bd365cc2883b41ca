//! Repositório de Abastecimentos
//!
//! Acesso à tabela `abastecimentos`: CRUD, listagem filtrada e as
//! consultas de apoio do frontend (sugestão de veículos e último KM).

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::abastecimento_dto::{AtualizacaoAbastecimento, NovoAbastecimento};
use crate::models::Abastecimento;
use crate::repositories::filtro::FiltroAbastecimentos;
use crate::utils::errors::AppResult;

pub struct AbastecimentoRepository {
    pool: PgPool,
}

impl AbastecimentoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, novo: NovoAbastecimento) -> AppResult<Abastecimento> {
        let agora = Utc::now();

        let abastecimento = sqlx::query_as::<_, Abastecimento>(
            r#"
            INSERT INTO abastecimentos
                (id, data, veiculo, km_atual, quantidade_litros, valor_total, posto, combustivel, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(novo.data)
        .bind(novo.veiculo)
        .bind(novo.km_atual)
        .bind(novo.quantidade_litros)
        .bind(novo.valor_total)
        .bind(novo.posto)
        .bind(novo.combustivel)
        .bind(agora)
        .fetch_one(&self.pool)
        .await?;

        Ok(abastecimento)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Abastecimento>> {
        let abastecimento =
            sqlx::query_as::<_, Abastecimento>("SELECT * FROM abastecimentos WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(abastecimento)
    }

    /// Página da listagem, sempre ordenada por data decrescente
    pub async fn list(&self, filtro: &FiltroAbastecimentos) -> AppResult<Vec<Abastecimento>> {
        let abastecimentos = sqlx::query_as::<_, Abastecimento>(
            r#"
            SELECT * FROM abastecimentos
            WHERE ($1::text IS NULL OR veiculo ILIKE $1)
              AND ($2::timestamptz IS NULL OR data >= $2)
              AND ($3::timestamptz IS NULL OR data <= $3)
            ORDER BY data DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(filtro.padrao_veiculo())
        .bind(filtro.data_inicial)
        .bind(filtro.data_final)
        .bind(filtro.limite())
        .bind(filtro.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(abastecimentos)
    }

    /// Total de registros que casam com o mesmo filtro da listagem
    pub async fn count(&self, filtro: &FiltroAbastecimentos) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM abastecimentos
            WHERE ($1::text IS NULL OR veiculo ILIKE $1)
              AND ($2::timestamptz IS NULL OR data >= $2)
              AND ($3::timestamptz IS NULL OR data <= $3)
            "#,
        )
        .bind(filtro.padrao_veiculo())
        .bind(filtro.data_inicial)
        .bind(filtro.data_final)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    /// Substitui os campos presentes, preservando o resto, num único
    /// UPDATE (sem janela entre leitura e escrita). Retorna None quando
    /// o id não existe.
    pub async fn update(
        &self,
        id: Uuid,
        alteracao: AtualizacaoAbastecimento,
    ) -> AppResult<Option<Abastecimento>> {
        let abastecimento = sqlx::query_as::<_, Abastecimento>(
            r#"
            UPDATE abastecimentos
            SET data = COALESCE($2, data),
                veiculo = COALESCE($3, veiculo),
                km_atual = COALESCE($4, km_atual),
                quantidade_litros = COALESCE($5, quantidade_litros),
                valor_total = COALESCE($6, valor_total),
                posto = COALESCE($7, posto),
                combustivel = COALESCE($8, combustivel),
                updated_at = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(alteracao.data)
        .bind(alteracao.veiculo)
        .bind(alteracao.km_atual)
        .bind(alteracao.quantidade_litros)
        .bind(alteracao.valor_total)
        .bind(alteracao.posto)
        .bind(alteracao.combustivel)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(abastecimento)
    }

    /// Remoção definitiva. Retorna false quando o id não existe.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let resultado = sqlx::query("DELETE FROM abastecimentos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected() > 0)
    }

    /// Até 10 veículos distintos cujo nome contém o termo (case-insensitive).
    /// Termo vazio casa com todos.
    pub async fn distinct_veiculos(&self, termo: &str) -> AppResult<Vec<String>> {
        let veiculos: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT veiculo FROM abastecimentos
            WHERE veiculo ILIKE $1
            ORDER BY veiculo
            LIMIT 10
            "#,
        )
        .bind(format!("%{}%", termo))
        .fetch_all(&self.pool)
        .await?;

        Ok(veiculos)
    }

    /// KM do abastecimento mais recente (por data) do veículo
    pub async fn ultimo_km(&self, veiculo: &str) -> AppResult<Option<f64>> {
        let km: Option<f64> = sqlx::query_scalar(
            r#"
            SELECT km_atual FROM abastecimentos
            WHERE veiculo = $1
            ORDER BY data DESC
            LIMIT 1
            "#,
        )
        .bind(veiculo)
        .fetch_optional(&self.pool)
        .await?;

        Ok(km)
    }
}
