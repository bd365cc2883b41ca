use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use abastecimentos_api::config::environment::EnvironmentConfig;
use abastecimentos_api::database::connection::{create_pool, mask_database_url, run_migrations};
use abastecimentos_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    info!("⛽ Abastecimentos API");
    info!("====================");

    let config = EnvironmentConfig::default();

    // Inicializar banco de dados
    if let Ok(url) = std::env::var("DATABASE_URL") {
        info!("🗄️  Banco de dados: {}", mask_database_url(&url));
    }

    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Erro conectando ao banco de dados: {}", e);
            return Err(e);
        }
    };

    run_migrations(&pool).await?;
    info!("✅ Migrações aplicadas");

    let state = AppState::new(pool, config.clone());
    let app = abastecimentos_api::create_app(state);

    let addr: SocketAddr = config.server_addr().parse()?;

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET    /health - Liveness");
    info!("⛽ Endpoints - Abastecimentos:");
    info!("   POST   /api/v1/abastecimentos - Criar abastecimento");
    info!("   GET    /api/v1/abastecimentos - Listar (veiculo, dataInicial, dataFinal, limit, page)");
    info!("   GET    /api/v1/abastecimentos/:id - Buscar por id");
    info!("   PUT    /api/v1/abastecimentos/:id - Atualizar");
    info!("   DELETE /api/v1/abastecimentos/:id - Remover");
    info!("🚗 Endpoints - Consultas de apoio:");
    info!("   GET    /api/v1/abastecimentos/veiculos?q= - Sugestões de veículos");
    info!("   GET    /api/v1/abastecimentos/ultimo-km?veiculo= - Último KM conhecido");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Sinal de desligamento graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C recebido, desligando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, desligando servidor...");
        },
    }
}
