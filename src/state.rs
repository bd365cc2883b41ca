//! Shared application state
//!
//! Estado compartilhado da aplicação, passado pelo router do Axum.
//! A camada HTTP é stateless; o pool é o único recurso compartilhado.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
