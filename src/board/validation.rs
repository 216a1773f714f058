//! Validación del borrador en cada intento de envío.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

use crate::remote::NewReservation;

pub const PARTY_SIZE_RANGE: RangeInclusive<i64> = 1..=10;

/// Valores del formulario en curso, tal como se escribieron
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftReservation {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub party_size: String,
}

/// Motivo por el que un borrador no se envió
///
/// `Display` es el texto exacto que ve el usuario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Party size must be between 1 and 10.")]
    PartySizeOutOfRange,
    #[error("Please fill in all fields.")]
    MissingFields,
}

/// Lee un entero inicial con el parseo permisivo de un formulario
///
/// Se admiten espacios iniciales y un signo, luego dígitos decimales; lo que
/// siga a los dígitos se ignora. Devuelve `None` si no hay dígitos.
/// Los valores que no caben en `i64` saturan y quedan fuera de rango.
pub fn parse_party_size(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Comprueba un borrador y construye el cuerpo del envío
///
/// El orden importa: un tamaño de grupo numérico fuera de [1, 10] se reporta
/// antes que cualquier campo vacío. Un tamaño sin entero inicial cuenta como
/// vacío. Las longitudes mínimas de nombre y teléfono son solo pistas del
/// formulario y no se comprueban.
pub fn validate(draft: &DraftReservation) -> Result<NewReservation, ValidationError> {
    let party_size = parse_party_size(&draft.party_size);

    if let Some(size) = party_size {
        if !PARTY_SIZE_RANGE.contains(&size) {
            return Err(ValidationError::PartySizeOutOfRange);
        }
    }

    let party_size = match party_size {
        Some(size) if !draft.name.is_empty() && !draft.phone.is_empty() && !draft.date.is_empty() => size,
        _ => return Err(ValidationError::MissingFields),
    };

    Ok(NewReservation {
        guest_name: draft.name.clone(),
        guest_phone: draft.phone.clone(),
        date: draft.date.clone(),
        party_size,
    })
}
