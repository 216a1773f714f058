use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Identificador opaco asignado por el API de reservas
///
/// Puede llegar como texto o como número; se guarda siempre como texto.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ReservationId(String);

impl ReservationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReservationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for ReservationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

/// Reserva tal como la lista `GET /reservations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(alias = "_id")]
    pub id: ReservationId,
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub guest_phone: String,
    /// Fecha ISO-8601 (o timestamp) tal como la envía el API
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub party_size: Option<i64>,
    /// La fija el servidor; si falta, no está confirmada
    #[serde(default)]
    pub is_confirmed: bool,
}

/// Cuerpo de `POST /reservations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
    pub guest_name: String,
    pub guest_phone: String,
    pub date: String,
    pub party_size: i64,
}

/// Lo que se conserva del cuerpo de una respuesta a `POST /reservations`
///
/// Se acepta cualquier forma JSON. Un `message` escalar no vacío se muestra
/// como texto (`5` pasa a ser `"5"`); `""`, `0`, `false`, `null`, objetos y
/// arrays cuentan como ausentes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateReservationReply {
    pub message: Option<String>,
}

impl CreateReservationReply {
    pub fn from_value(value: &Value) -> Self {
        let message = match value.get("message") {
            Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
            Some(Value::Number(number)) if number.as_f64() != Some(0.0) => {
                Some(number.to_string())
            }
            Some(Value::Bool(true)) => Some("true".to_string()),
            _ => None,
        };

        Self { message }
    }
}
