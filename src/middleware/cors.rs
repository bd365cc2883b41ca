//! Middleware de CORS
//!
//! Restringe os requests ao frontend configurado, com os mesmos
//! métodos e headers que a API original permitia.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Criar middleware de CORS com os origins permitidos
pub fn cors_middleware(origins: &[String]) -> CorsLayer {
    let valores: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(valores))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([HeaderName::from_static("content-type")])
}
