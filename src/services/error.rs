// ============================================================================
// TAXONOMÍA DE ERRORES DE API
// ============================================================================
// Clasificación pura de fallos de transporte. Los efectos (toast, limpiar
// credencial, redirección) viven en http.rs; aquí solo se decide QUÉ
// decir, nunca se dice.
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No llegó respuesta del servidor
    #[error("network error: {0}")]
    Network(String),

    /// Se superó el timeout de transporte
    #[error("request timed out")]
    Timeout,

    /// Respuesta recibida con código de error HTTP
    #[error("HTTP {status}")]
    Status {
        status: u16,
        /// Mensaje provisto por el servidor (campo `message` o `detail`)
        message: Option<String>,
    },

    /// Cualquier otra cosa (cuerpo malformado, request imposible de armar)
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Mensaje del servidor, si lo hubo
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Mensaje del servidor o un genérico del dominio.
    /// Es lo que los stores muestran en sus toasts de error.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.server_message().unwrap_or(fallback)
    }
}

/// Extrae el mensaje de error del cuerpo JSON que devuelve el backend
pub fn extract_server_message(body: &serde_json::Value) -> Option<String> {
    body.get("message")
        .or_else(|| body.get("detail"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

/// Texto de notificación global para cada fallo.
/// Un fallo = exactamente un toast; los textos son contrato con la UI.
pub fn toast_text(error: &ApiError) -> String {
    match error {
        ApiError::Network(_) | ApiError::Timeout => {
            "Network error - please check your connection".to_string()
        }
        ApiError::Status { status, message } => match status {
            401 => "Authentication required".to_string(),
            403 => "Permission denied".to_string(),
            404 => "Resource not found".to_string(),
            422 => message.clone().unwrap_or_else(|| "Validation error".to_string()),
            500 => "Server error occurred".to_string(),
            _ => message.clone().unwrap_or_else(|| "An error occurred".to_string()),
        },
        ApiError::Unexpected(_) => "An unexpected error occurred".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_codes_map_to_fixed_texts() {
        let cases = [
            (401, "Authentication required"),
            (403, "Permission denied"),
            (404, "Resource not found"),
            (500, "Server error occurred"),
        ];
        for (status, expected) in cases {
            let err = ApiError::Status { status, message: None };
            assert_eq!(toast_text(&err), expected);
        }
    }

    #[test]
    fn validation_error_prefers_server_message() {
        let err = ApiError::Status {
            status: 422,
            message: Some("Invalid price".to_string()),
        };
        assert_eq!(toast_text(&err), "Invalid price");

        let err = ApiError::Status { status: 422, message: None };
        assert_eq!(toast_text(&err), "Validation error");
    }

    #[test]
    fn unknown_status_uses_server_message_or_generic() {
        let err = ApiError::Status {
            status: 409,
            message: Some("Duplicate SKU".to_string()),
        };
        assert_eq!(toast_text(&err), "Duplicate SKU");

        let err = ApiError::Status { status: 418, message: None };
        assert_eq!(toast_text(&err), "An error occurred");
    }

    #[test]
    fn connection_failures_share_connectivity_text() {
        let network = ApiError::Network("fetch failed".to_string());
        assert_eq!(toast_text(&network), "Network error - please check your connection");
        assert_eq!(toast_text(&ApiError::Timeout), toast_text(&network));
    }

    #[test]
    fn extracts_message_then_detail() {
        assert_eq!(
            extract_server_message(&json!({"message": "Invalid price"})),
            Some("Invalid price".to_string())
        );
        assert_eq!(
            extract_server_message(&json!({"detail": "Not found."})),
            Some("Not found.".to_string())
        );
        assert_eq!(extract_server_message(&json!({"other": 1})), None);
    }

    #[test]
    fn message_or_falls_back_to_domain_text() {
        let err = ApiError::Network("down".to_string());
        assert_eq!(err.message_or("Failed to create product"), "Failed to create product");

        let err = ApiError::Status {
            status: 400,
            message: Some("Name already taken".to_string()),
        };
        assert_eq!(err.message_or("Failed to create product"), "Name already taken");
    }
}
