//! Configuração de variáveis de ambiente
//!
//! Defaults iguais aos do deploy original: porta 3000 e frontend do
//! Vite em localhost:5173. DATABASE_URL é resolvida na camada de
//! conexão, não aqui.

use std::env;

/// Configuração do ambiente
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub port: u16,
    pub host: String,
    pub frontend_url: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        }
    }
}

impl EnvironmentConfig {
    /// Endereço de escuta do servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Origins permitidos pelo CORS
    pub fn cors_origins(&self) -> Vec<String> {
        vec![self.frontend_url.clone()]
    }
}
