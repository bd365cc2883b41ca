//! Rotas de Abastecimentos
//!
//! Superfície HTTP montada em /api/v1/abastecimentos. As rotas fixas
//! (/veiculos, /ultimo-km) convivem com /:id porque o axum prioriza
//! segmentos literais sobre capturas.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::AbastecimentoController;
use crate::dto::abastecimento_dto::{
    CreateAbastecimentoRequest, DataResponse, ListaAbastecimentosResponse,
    ListarAbastecimentosQuery, MensagemResponse, SugerirVeiculosQuery, UltimoKmQuery,
    UltimoKmResponse, UpdateAbastecimentoRequest,
};
use crate::models::Abastecimento;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::validate_uuid;

pub fn create_abastecimento_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_abastecimento))
        .route("/", get(list_abastecimentos))
        .route("/veiculos", get(sugerir_veiculos))
        .route("/ultimo-km", get(ultimo_km))
        .route("/:id", get(get_abastecimento))
        .route("/:id", put(update_abastecimento))
        .route("/:id", delete(delete_abastecimento))
}

/// Valida o id do path antes de qualquer consulta
fn parse_id(id: &str) -> Result<Uuid, AppError> {
    validate_uuid(id).map_err(|_| bad_request_error("ID inválido"))
}

async fn create_abastecimento(
    State(state): State<AppState>,
    Json(request): Json<CreateAbastecimentoRequest>,
) -> Result<(StatusCode, Json<DataResponse<Abastecimento>>), AppError> {
    let controller = AbastecimentoController::new(state.pool.clone());
    let abastecimento = controller.create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: abastecimento,
        }),
    ))
}

async fn list_abastecimentos(
    State(state): State<AppState>,
    Query(query): Query<ListarAbastecimentosQuery>,
) -> Result<Json<ListaAbastecimentosResponse>, AppError> {
    let controller = AbastecimentoController::new(state.pool.clone());
    let resposta = controller.list(query).await?;
    Ok(Json(resposta))
}

async fn get_abastecimento(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Abastecimento>>, AppError> {
    let id = parse_id(&id)?;
    let controller = AbastecimentoController::new(state.pool.clone());
    let abastecimento = controller.get_by_id(id).await?;
    Ok(Json(DataResponse {
        data: abastecimento,
    }))
}

async fn update_abastecimento(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateAbastecimentoRequest>,
) -> Result<Json<DataResponse<Abastecimento>>, AppError> {
    let id = parse_id(&id)?;
    let controller = AbastecimentoController::new(state.pool.clone());
    let abastecimento = controller.update(id, request).await?;
    Ok(Json(DataResponse {
        data: abastecimento,
    }))
}

async fn delete_abastecimento(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MensagemResponse>, AppError> {
    let id = parse_id(&id)?;
    let controller = AbastecimentoController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(MensagemResponse {
        message: "Abastecimento removido com sucesso".to_string(),
    }))
}

async fn sugerir_veiculos(
    State(state): State<AppState>,
    Query(query): Query<SugerirVeiculosQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let controller = AbastecimentoController::new(state.pool.clone());
    let veiculos = controller.sugerir_veiculos(query.q).await?;
    Ok(Json(veiculos))
}

async fn ultimo_km(
    State(state): State<AppState>,
    Query(query): Query<UltimoKmQuery>,
) -> Result<Json<UltimoKmResponse>, AppError> {
    let controller = AbastecimentoController::new(state.pool.clone());
    let km_atual = controller.ultimo_km(query.veiculo).await?;
    Ok(Json(UltimoKmResponse { km_atual }))
}
