//! API de controle de abastecimentos de veículos
//!
//! Backend de registro de abastecimentos: CRUD paginado/filtrado sobre
//! PostgreSQL mais as consultas de apoio do formulário (autocomplete de
//! veículos e último KM conhecido).

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_middleware;
use state::AppState;

/// Monta o router completo da aplicação sobre o estado dado.
/// Separado do main para os testes de integração montarem o mesmo app.
pub fn create_app(state: AppState) -> Router {
    let origins = state.config.cors_origins();

    Router::new()
        .route("/health", get(health))
        .nest(
            "/api/v1/abastecimentos",
            routes::abastecimento_routes::create_abastecimento_router(),
        )
        .layer(cors_middleware(&origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint de liveness
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "abastecimentos-api",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
