//! Utilidades de validação
//!
//! Este módulo contém funções helper para validação de dados
//! e conversão de tipos.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;
use validator::ValidationError;

/// Validar e converter string para UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar que um string não está vazio (ignorando espaços)
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Converte uma data em formato flexível para `DateTime<Utc>`.
///
/// Aceita RFC3339 completo ("2024-05-01T10:30:00Z") ou apenas a data
/// ("2024-05-01"), que vira meia-noite UTC, como o cliente envia.
pub fn parse_data_flexivel(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Some(meia_noite) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(Utc.from_utc_datetime(&meia_noite));
    }

    let mut error = ValidationError::new("date");
    error.add_param("value".into(), &value.to_string());
    error.add_param("format".into(), &"YYYY-MM-DD ou RFC3339".to_string());
    Err(error)
}

/// Validador de campo de data dos requests (descarta o valor convertido)
pub fn validar_data(value: &str) -> Result<(), ValidationError> {
    parse_data_flexivel(value).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_validate_uuid() {
        let valido = "550e8400-e29b-41d4-a716-446655440000";
        assert!(validate_uuid(valido).is_ok());

        let invalido = "uuid-invalido";
        assert!(validate_uuid(invalido).is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("ABC-1234").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_parse_data_flexivel_rfc3339() {
        let dt = parse_data_flexivel("2024-05-01T10:30:00Z").unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_data_flexivel_apenas_data() {
        let dt = parse_data_flexivel("2024-05-01").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-05-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_data_flexivel_invalida() {
        assert!(parse_data_flexivel("01/05/2024").is_err());
        assert!(parse_data_flexivel("banana").is_err());
    }

    #[test]
    fn test_validar_data() {
        assert!(validar_data("2024-05-01").is_ok());
        assert!(validar_data("").is_err());
        assert!(validar_data("01/05/2024").is_err());
    }
}
