use serde::Deserialize;

/// Respuesta de listado del backend: o una secuencia cruda, o el
/// envoltorio de paginación de DRF con campo `results`. Se decodifica
/// explícitamente en la frontera de transporte; los stores nunca
/// inspeccionan la forma a mano.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paginated {
        #[serde(default)]
        count: Option<u64>,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
        results: Vec<T>,
    },
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    /// Extrae la secuencia de registros, venga de donde venga
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Paginated { results, .. } => results,
            ListResponse::Plain(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ListResponse::Paginated { results, .. } => results.len(),
            ListResponse::Plain(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Clave de identidad con la que los stores reconcilian su caché local
pub trait Identified {
    fn id(&self) -> u64;
}

/// Campos decimales del backend: DRF los serializa como string
/// ("1500.00") pero también llegan como número JSON. Se aceptan ambos.
pub mod decimal {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        }
    }

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Record {
        id: u64,
    }

    #[test]
    fn decodes_plain_sequence() {
        let response: ListResponse<Record> =
            serde_json::from_value(json!([{"id": 1}, {"id": 2}])).unwrap();
        let items = response.into_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
    }

    #[test]
    fn decodes_paginated_envelope() {
        let response: ListResponse<Record> = serde_json::from_value(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{"id": 7}]
        }))
        .unwrap();
        assert_eq!(response.into_items(), vec![Record { id: 7 }]);
    }

    #[test]
    fn envelope_without_results_is_rejected() {
        let response: Result<ListResponse<Record>, _> =
            serde_json::from_value(json!({"count": 3}));
        assert!(response.is_err());
    }

    #[derive(Deserialize)]
    struct Priced {
        #[serde(deserialize_with = "decimal::deserialize")]
        price: f64,
    }

    #[test]
    fn decimal_accepts_number_and_string() {
        let a: Priced = serde_json::from_value(json!({"price": 12.5})).unwrap();
        let b: Priced = serde_json::from_value(json!({"price": "12.50"})).unwrap();
        assert_eq!(a.price, 12.5);
        assert_eq!(b.price, 12.5);
    }
}
