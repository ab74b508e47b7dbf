//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! que complementan las derivaciones de `validator`.

use chrono::{NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref TIME_HHMM_RE: Regex = Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").unwrap();
    static ref SLUG_RE: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Validar formato de hora HH:MM (24h)
pub fn validate_time_hhmm(value: &str) -> Result<(), ValidationError> {
    if !TIME_HHMM_RE.is_match(value) {
        let mut error = ValidationError::new("time");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"HH:MM".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que la fecha de reserva no esté en el pasado.
/// Acepta `YYYY-MM-DD` o un datetime RFC3339.
pub fn validate_future_date(value: &str) -> Result<(), ValidationError> {
    let date = parse_booking_date(value).ok_or_else(|| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })?;

    if date < Utc::now().date_naive() {
        let mut error = ValidationError::new("future_date");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Parsear la fecha de una reserva desde sus dos formatos aceptados
pub fn parse_booking_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Validar formato de slug (minúsculas, dígitos y guiones)
pub fn validate_slug(value: &str) -> Result<(), ValidationError> {
    if !SLUG_RE.is_match(value) {
        let mut error = ValidationError::new("slug");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono (básico)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let clean_phone = value.chars().filter(|c| c.is_ascii_digit()).collect::<String>();
    if clean_phone.len() < 7 || clean_phone.len() > 15 {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + serde::Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_validate_time_hhmm() {
        assert!(validate_time_hhmm("09:30").is_ok());
        assert!(validate_time_hhmm("23:59").is_ok());
        assert!(validate_time_hhmm("7:05").is_ok());
        assert!(validate_time_hhmm("24:00").is_err());
        assert!(validate_time_hhmm("12:60").is_err());
        assert!(validate_time_hhmm("12h30").is_err());
        assert!(validate_time_hhmm("").is_err());
    }

    #[test]
    fn test_validate_future_date() {
        let today = Utc::now().date_naive();
        let tomorrow = today + Duration::days(1);
        let yesterday = today - Duration::days(1);

        assert!(validate_future_date(&today.format("%Y-%m-%d").to_string()).is_ok());
        assert!(validate_future_date(&tomorrow.format("%Y-%m-%d").to_string()).is_ok());
        assert!(validate_future_date(&yesterday.format("%Y-%m-%d").to_string()).is_err());
        assert!(validate_future_date("2024/01/15").is_err());
        assert!(validate_future_date("not-a-date").is_err());
    }

    #[test]
    fn test_parse_booking_date_rfc3339() {
        let parsed = parse_booking_date("2030-06-15T10:00:00+04:00").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2030, 6, 15).unwrap());
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("airport-transfers").is_ok());
        assert!(validate_slug("city-tours-2024").is_ok());
        assert!(validate_slug("Wedding").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug("double--dash").is_err());
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("x").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+971 50 123 4567").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("12345678901234567890").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-5).is_err());
    }
}
