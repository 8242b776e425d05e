// ============================================================================
// API REQUEST - Wrapper HTTP autenticado (stateless)
// ============================================================================
// Un solo intento por llamada, sin retries ni timeouts. Toda falla se
// normaliza a ApiError { code, message, status } y se loguea antes de
// propagarse al caller.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value;
use std::fmt;

use crate::utils::constants::API_BASE_URL;
use crate::utils::storage;

/// Taxonomía de errores: códigos propios del wrapper más los códigos
/// que el servidor declara, pasados tal cual en `Server`
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// Cuerpo no parseable como JSON
    InvalidJson,
    /// Status no-2xx sin error estructurado
    HttpError,
    /// 2xx pero con `success: false` en el cuerpo
    ApiError,
    /// Fallo de runtime (red, excepción del navegador)
    JsError,
    /// Forma de fallo no reconocida
    UnknownError,
    /// Código declarado por el servidor (MISSING_AUTH_TOKEN, USER_NOT_FOUND, ...)
    Server(String),
}

impl ErrorCode {
    pub fn from_wire(code: &str) -> Self {
        Self::Server(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::InvalidJson => "INVALID_JSON",
            Self::HttpError => "HTTP_ERROR",
            Self::ApiError => "API_ERROR",
            Self::JsError => "JS_ERROR",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Server(code) => code,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    pub status: Option<u16>,
}

impl ApiError {
    fn invalid_json(raw: &str, status: u16) -> Self {
        Self {
            code: ErrorCode::InvalidJson,
            message: format!(
                "No se pudo parsear la respuesta del servidor como JSON. Response: {}",
                raw
            ),
            status: Some(status),
        }
    }

    /// Extrae código y mensaje embebidos del cuerpo, con fallback al kind dado
    fn from_error_body(body: Option<&Value>, status: u16, fallback: ErrorCode) -> Self {
        let code = body
            .and_then(|b| b.pointer("/error/code"))
            .and_then(Value::as_str)
            .map(ErrorCode::from_wire)
            .unwrap_or(fallback);

        let message = body
            .and_then(|b| b.pointer("/error/message"))
            .and_then(Value::as_str)
            .or_else(|| body.and_then(|b| b.get("message")).and_then(Value::as_str))
            .map(String::from)
            .unwrap_or_else(|| match code {
                ErrorCode::ApiError => "No se pudo procesar la solicitud".to_string(),
                _ => "Se produjo un error en el servidor".to_string(),
            });

        Self {
            code,
            message,
            status: Some(status),
        }
    }

    /// Normaliza un fallo de gloo-net (red, serialización, excepción JS)
    pub fn from_network(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) => Self {
                code: ErrorCode::JsError,
                message: js.to_string(),
                status: None,
            },
            other => Self {
                code: ErrorCode::UnknownError,
                message: other.to_string(),
                status: None,
            },
        }
    }

    /// Mensaje para mostrar al usuario, traduciendo los códigos conocidos
    pub fn friendly_message(&self) -> String {
        if let ErrorCode::Server(code) = &self.code {
            let translated = match code.as_str() {
                "MISSING_AUTH_TOKEN" => Some("Necesitas iniciar sesión de nuevo."),
                "USER_NOT_FOUND" => Some("Usuario no encontrado. Inicia sesión de nuevo."),
                "ALREADY_DELETED" => Some("Esta cuenta ya fue eliminada."),
                "NO_UPDATE_FIELDS" => {
                    Some("No hay nada que actualizar. Ingresa un apodo o una contraseña.")
                }
                "INTERNAL_SERVER_ERROR" => {
                    Some("Error del servidor. Inténtalo de nuevo más tarde.")
                }
                _ => None,
            };
            if let Some(msg) = translated {
                return msg.to_string();
            }
        }
        self.message.clone()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({}): {}", self.code, status, self.message),
            None => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self {
            method: Method::Get,
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn post(body: Value) -> Self {
        Self {
            method: Method::Post,
            body: Some(body),
            headers: Vec::new(),
        }
    }

    pub fn patch(body: Value) -> Self {
        Self {
            method: Method::Patch,
            body: Some(body),
            headers: Vec::new(),
        }
    }

    pub fn delete() -> Self {
        Self {
            method: Method::Delete,
            body: None,
            headers: Vec::new(),
        }
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

/// Emite la llamada y devuelve el cuerpo parseado (None para 204 o cuerpo vacío)
pub async fn api_request(path: &str, options: RequestOptions) -> Result<Option<Value>, ApiError> {
    let result = send_request(path, &options).await;

    if let Err(err) = &result {
        log::error!("🔥 [api_request] {} {} → {}", options.method.as_str(), path, err);
    }

    result
}

async fn send_request(path: &str, options: &RequestOptions) -> Result<Option<Value>, ApiError> {
    let url = format!("{}{}", API_BASE_URL, path);

    let mut builder: RequestBuilder = match options.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Patch => Request::patch(&url),
        Method::Delete => Request::delete(&url),
    };

    builder = builder.header("Content-Type", "application/json");

    // Con token guardado la llamada va autenticada; sin token va anónima
    if let Some(token) = storage::load_access_token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    for (key, value) in &options.headers {
        builder = builder.header(key, value);
    }

    let response = match &options.body {
        Some(body) => builder
            .json(body)
            .map_err(ApiError::from_network)?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(ApiError::from_network)?;

    let status = response.status();
    if status == 204 {
        // 204 No Content: no hay cuerpo que parsear
        return Ok(None);
    }

    let raw = response.text().await.map_err(ApiError::from_network)?;
    decode_response(status, &raw)
}

/// Paso puro de decodificación: status + texto crudo → resultado normalizado
pub(crate) fn decode_response(status: u16, raw: &str) -> Result<Option<Value>, ApiError> {
    if status == 204 {
        return Ok(None);
    }

    let ok = (200..300).contains(&status);

    let parsed: Option<Value> = if raw.is_empty() {
        None
    } else {
        match serde_json::from_str(raw) {
            Ok(value) => Some(value),
            Err(_) => return Err(ApiError::invalid_json(raw, status)),
        }
    };

    if !ok {
        return Err(ApiError::from_error_body(
            parsed.as_ref(),
            status,
            ErrorCode::HttpError,
        ));
    }

    // `success: false` en un 2xx es una falla lógica
    if let Some(body) = parsed.as_ref() {
        if body.get("success").and_then(Value::as_bool) == Some(false) {
            return Err(ApiError::from_error_body(
                parsed.as_ref(),
                status,
                ErrorCode::ApiError,
            ));
        }
    }

    Ok(parsed)
}

/// Extrae el campo `data` de una respuesta, o falla con forma inválida
pub fn take_data(result: Option<Value>) -> Result<Value, ApiError> {
    result
        .and_then(|mut value| value.get_mut("data").map(Value::take))
        .ok_or_else(|| ApiError {
            code: ErrorCode::InvalidJson,
            message: "La respuesta no contiene el campo data".to_string(),
            status: None,
        })
}

/// La respuesta llegó bien pero no tiene la forma esperada
pub fn bad_shape(err: serde_json::Error) -> ApiError {
    ApiError {
        code: ErrorCode::InvalidJson,
        message: format!("La respuesta no tiene la forma esperada: {}", err),
        status: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_204_devuelve_null_sin_parsear() {
        assert_eq!(decode_response(204, "esto no es json").unwrap(), None);
        assert_eq!(decode_response(204, "").unwrap(), None);
    }

    #[test]
    fn json_invalido_preserva_el_texto_crudo() {
        let err = decode_response(200, "<html>boom</html>").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidJson);
        assert!(err.message.contains("<html>boom</html>"));
        assert_eq!(err.status, Some(200));
    }

    #[test]
    fn no_2xx_con_error_estructurado_pasa_el_codigo_verbatim() {
        let raw = json!({
            "success": false,
            "error": { "code": "USER_NOT_FOUND", "message": "no existe" }
        })
        .to_string();

        let err = decode_response(404, &raw).unwrap_err();
        assert_eq!(err.code, ErrorCode::Server("USER_NOT_FOUND".to_string()));
        assert_eq!(err.message, "no existe");
        assert_eq!(err.status, Some(404));
    }

    #[test]
    fn no_2xx_sin_error_estructurado_es_http_error() {
        let err = decode_response(500, "{}").unwrap_err();
        assert_eq!(err.code, ErrorCode::HttpError);
        assert_eq!(err.status, Some(500));

        let err = decode_response(502, "").unwrap_err();
        assert_eq!(err.code, ErrorCode::HttpError);
    }

    #[test]
    fn success_false_en_2xx_es_falla_logica() {
        let raw = json!({ "success": false, "error": { "code": "NO_UPDATE_FIELDS" } }).to_string();
        let err = decode_response(200, &raw).unwrap_err();
        assert_eq!(err.code, ErrorCode::Server("NO_UPDATE_FIELDS".to_string()));

        let raw = json!({ "success": false }).to_string();
        let err = decode_response(200, &raw).unwrap_err();
        assert_eq!(err.code, ErrorCode::ApiError);
    }

    #[test]
    fn dos_xx_valido_devuelve_el_cuerpo() {
        let raw = json!({ "success": true, "data": { "x": 1 } }).to_string();
        let body = decode_response(200, &raw).unwrap().unwrap();
        assert_eq!(body["data"]["x"], 1);

        // cuerpo vacío en 200 también es un resultado nulo
        assert_eq!(decode_response(200, "").unwrap(), None);
    }

    #[test]
    fn mensaje_de_nivel_superior_como_fallback() {
        let raw = json!({ "message": "falló todo" }).to_string();
        let err = decode_response(500, &raw).unwrap_err();
        assert_eq!(err.code, ErrorCode::HttpError);
        assert_eq!(err.message, "falló todo");
    }

    #[test]
    fn take_data_exige_el_campo() {
        let err = take_data(Some(json!({ "ok": true }))).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidJson);

        let data = take_data(Some(json!({ "data": { "user": {} } }))).unwrap();
        assert!(data.get("user").is_some());
    }

    #[test]
    fn friendly_message_traduce_codigos_conocidos() {
        let err = ApiError {
            code: ErrorCode::Server("MISSING_AUTH_TOKEN".to_string()),
            message: "raw".to_string(),
            status: Some(401),
        };
        assert_eq!(err.friendly_message(), "Necesitas iniciar sesión de nuevo.");

        let err = ApiError {
            code: ErrorCode::Server("ALGO_RARO".to_string()),
            message: "mensaje del servidor".to_string(),
            status: Some(400),
        };
        assert_eq!(err.friendly_message(), "mensaje del servidor");
    }
}
