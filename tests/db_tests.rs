//! Testes de ponta a ponta contra um PostgreSQL real.
//!
//! Exigem DATABASE_URL apontando para um banco de teste, por isso ficam
//! atrás de #[ignore]:
//!
//!   DATABASE_URL=postgres://... cargo test -- --ignored

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use uuid::Uuid;

use abastecimentos_api::config::environment::EnvironmentConfig;
use abastecimentos_api::database::connection::{create_pool, run_migrations};
use abastecimentos_api::state::AppState;

async fn create_test_app() -> TestServer {
    let pool = create_pool(None).await.expect("DATABASE_URL de teste");
    run_migrations(&pool).await.expect("migrações");

    let state = AppState::new(pool, EnvironmentConfig::default());
    TestServer::new(abastecimentos_api::create_app(state)).expect("test server")
}

/// Placa única por teste para isolar os dados num banco compartilhado
fn placa_unica() -> String {
    format!("TST-{}", &Uuid::new_v4().to_string()[..8])
}

fn abastecimento(veiculo: &str, data: &str, km: f64) -> serde_json::Value {
    json!({
        "data": data,
        "veiculo": veiculo,
        "km_atual": km,
        "quantidade_litros": 40.0,
        "valor_total": 250.0,
        "posto": "Shell",
        "combustivel": "Gasolina"
    })
}

#[tokio::test]
#[ignore]
async fn test_create_e_get_devolvem_o_mesmo_registro() {
    let app = create_test_app().await;
    let placa = placa_unica();

    let criado = app
        .post("/api/v1/abastecimentos")
        .json(&abastecimento(&placa, "2024-05-01", 1000.0))
        .await;
    assert_eq!(criado.status_code(), StatusCode::CREATED);

    let corpo: serde_json::Value = criado.json();
    let id = corpo["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(corpo["data"]["veiculo"], placa);
    assert_eq!(corpo["data"]["km_atual"], 1000.0);
    assert!(corpo["data"]["createdAt"].is_string());

    let buscado = app.get(&format!("/api/v1/abastecimentos/{}", id)).await;
    assert_eq!(buscado.status_code(), StatusCode::OK);
    assert_eq!(buscado.json::<serde_json::Value>()["data"]["id"], id);
}

#[tokio::test]
#[ignore]
async fn test_ultimo_km_do_veiculo() {
    let app = create_test_app().await;
    let placa = placa_unica();

    app.post("/api/v1/abastecimentos")
        .json(&abastecimento(&placa, "2024-05-01", 1000.0))
        .await;
    app.post("/api/v1/abastecimentos")
        .json(&abastecimento(&placa, "2024-04-01", 900.0))
        .await;

    let response = app
        .get("/api/v1/abastecimentos/ultimo-km")
        .add_query_param("veiculo", &placa)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    // O mais recente por data, não por ordem de criação
    assert_eq!(response.json::<serde_json::Value>()["km_atual"], 1000.0);
}

#[tokio::test]
#[ignore]
async fn test_ultimo_km_sem_registro_devolve_sentinela() {
    let app = create_test_app().await;

    let response = app
        .get("/api/v1/abastecimentos/ultimo-km")
        .add_query_param("veiculo", placa_unica())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>()["km_atual"], "");

    let sem_veiculo = app.get("/api/v1/abastecimentos/ultimo-km").await;
    assert_eq!(sem_veiculo.status_code(), StatusCode::OK);
    assert_eq!(sem_veiculo.json::<serde_json::Value>()["km_atual"], "");
}

#[tokio::test]
#[ignore]
async fn test_update_parcial_preserva_os_demais_campos() {
    let app = create_test_app().await;
    let placa = placa_unica();

    let criado = app
        .post("/api/v1/abastecimentos")
        .json(&abastecimento(&placa, "2024-05-01", 1000.0))
        .await;
    let id = criado.json::<serde_json::Value>()["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let atualizado = app
        .put(&format!("/api/v1/abastecimentos/{}", id))
        .json(&json!({ "km_atual": 1100.0 }))
        .await;
    assert_eq!(atualizado.status_code(), StatusCode::OK);

    let corpo = atualizado.json::<serde_json::Value>();
    assert_eq!(corpo["data"]["km_atual"], 1100.0);
    assert_eq!(corpo["data"]["veiculo"], placa);
    assert_eq!(corpo["data"]["posto"], "Shell");
    assert_eq!(corpo["data"]["quantidade_litros"], 40.0);
}

#[tokio::test]
#[ignore]
async fn test_update_de_id_inexistente_retorna_404() {
    let app = create_test_app().await;

    let response = app
        .put(&format!("/api/v1/abastecimentos/{}", Uuid::new_v4()))
        .json(&json!({ "km_atual": 1.0 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_delete_depois_get_retorna_404() {
    let app = create_test_app().await;
    let placa = placa_unica();

    let criado = app
        .post("/api/v1/abastecimentos")
        .json(&abastecimento(&placa, "2024-05-01", 1000.0))
        .await;
    let id = criado.json::<serde_json::Value>()["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let removido = app.delete(&format!("/api/v1/abastecimentos/{}", id)).await;
    assert_eq!(removido.status_code(), StatusCode::OK);
    assert_eq!(
        removido.json::<serde_json::Value>()["message"],
        "Abastecimento removido com sucesso"
    );

    let buscado = app.get(&format!("/api/v1/abastecimentos/{}", id)).await;
    assert_eq!(buscado.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_listagem_filtra_por_substring_case_insensitive() {
    let app = create_test_app().await;
    let placa = placa_unica();

    app.post("/api/v1/abastecimentos")
        .json(&abastecimento(&placa, "2024-05-01", 1000.0))
        .await;

    let response = app
        .get("/api/v1/abastecimentos")
        .add_query_param("veiculo", placa.to_lowercase())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let corpo = response.json::<serde_json::Value>();
    assert_eq!(corpo["totalCount"], 1);
    assert_eq!(corpo["data"][0]["veiculo"], placa);
}

#[tokio::test]
#[ignore]
async fn test_paginacao_com_limite_um() {
    let app = create_test_app().await;
    let placa = placa_unica();

    app.post("/api/v1/abastecimentos")
        .json(&abastecimento(&placa, "2024-05-02", 1100.0))
        .await;
    app.post("/api/v1/abastecimentos")
        .json(&abastecimento(&placa, "2024-05-01", 1000.0))
        .await;

    // Segunda página de tamanho 1: o segundo mais recente
    let response = app
        .get("/api/v1/abastecimentos")
        .add_query_param("veiculo", &placa)
        .add_query_param("limit", "1")
        .add_query_param("page", "2")
        .await;

    let corpo = response.json::<serde_json::Value>();
    assert_eq!(corpo["totalPaginas"], 2);
    assert_eq!(corpo["paginaAtual"], 2);
    assert_eq!(corpo["totalCount"], 2);
    assert_eq!(corpo["data"].as_array().unwrap().len(), 1);
    assert_eq!(corpo["data"][0]["km_atual"], 1000.0);
}

#[tokio::test]
#[ignore]
async fn test_pagina_alem_da_ultima_devolve_lista_vazia() {
    let app = create_test_app().await;
    let placa = placa_unica();

    app.post("/api/v1/abastecimentos")
        .json(&abastecimento(&placa, "2024-05-01", 1000.0))
        .await;

    let response = app
        .get("/api/v1/abastecimentos")
        .add_query_param("veiculo", &placa)
        .add_query_param("page", "99")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let corpo = response.json::<serde_json::Value>();
    assert!(corpo["data"].as_array().unwrap().is_empty());
    assert_eq!(corpo["totalCount"], 1);
    assert_eq!(corpo["totalPaginas"], 1);
    assert_eq!(corpo["paginaAtual"], 99);
}

#[tokio::test]
#[ignore]
async fn test_sugestao_de_veiculos() {
    let app = create_test_app().await;
    let placa = placa_unica();

    app.post("/api/v1/abastecimentos")
        .json(&abastecimento(&placa, "2024-05-01", 1000.0))
        .await;

    let response = app
        .get("/api/v1/abastecimentos/veiculos")
        .add_query_param("q", &placa[..6])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let veiculos = response.json::<Vec<String>>();
    assert!(veiculos.contains(&placa));
    assert!(veiculos.len() <= 10);
}

#[tokio::test]
#[ignore]
async fn test_filtros_e_lookups_ignoram_espacos_nas_bordas() {
    let app = create_test_app().await;
    let placa = placa_unica();

    app.post("/api/v1/abastecimentos")
        .json(&abastecimento(&placa, "2024-05-01", 1000.0))
        .await;

    let listagem = app
        .get("/api/v1/abastecimentos")
        .add_query_param("veiculo", format!("  {}  ", placa.to_lowercase()))
        .await;
    assert_eq!(listagem.json::<serde_json::Value>()["totalCount"], 1);

    let ultimo = app
        .get("/api/v1/abastecimentos/ultimo-km")
        .add_query_param("veiculo", format!(" {} ", placa))
        .await;
    assert_eq!(ultimo.json::<serde_json::Value>()["km_atual"], 1000.0);

    let sugestoes = app
        .get("/api/v1/abastecimentos/veiculos")
        .add_query_param("q", format!(" {} ", &placa[..6]))
        .await;
    assert!(sugestoes.json::<Vec<String>>().contains(&placa));
}

#[tokio::test]
#[ignore]
async fn test_create_invalido_nao_persiste_nada() {
    let app = create_test_app().await;
    let placa = placa_unica();

    let mut corpo = abastecimento(&placa, "2024-05-01", 1000.0);
    corpo["quantidade_litros"] = json!(-1.0);

    let response = app.post("/api/v1/abastecimentos").json(&corpo).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let listagem = app
        .get("/api/v1/abastecimentos")
        .add_query_param("veiculo", &placa)
        .await;
    assert_eq!(listagem.json::<serde_json::Value>()["totalCount"], 0);
}
