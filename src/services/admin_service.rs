use serde_json::Value;

use crate::models::{Pagination, UserProfile};
use crate::services::api::{api_request, bad_shape, ApiError, RequestOptions};

/// GET /api/admin/users → página de usuarios más el bloque de paginación
/// si el servidor lo envía
pub async fn fetch_users(
    page: u32,
    limit: u32,
) -> Result<(Vec<UserProfile>, Option<Pagination>), ApiError> {
    log::info!("📋 Obteniendo usuarios (página {})", page);

    let path = format!("/api/admin/users?page={}&limit={}", page, limit);
    let result = api_request(&path, RequestOptions::get()).await?;
    let body = result.unwrap_or(Value::Null);

    let users: Vec<UserProfile> = body
        .get("data")
        .cloned()
        .map(serde_json::from_value)
        .transpose()
        .map_err(bad_shape)?
        .unwrap_or_default();

    // Bloque de paginación malformado se trata como ausente
    let pagination = body
        .get("pagination")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok());

    Ok((users, pagination))
}

/// GET /api/admin/users/:email → búsqueda exacta por email
pub async fn fetch_user_by_email(email: &str) -> Result<Option<UserProfile>, ApiError> {
    log::info!("🔍 Buscando usuario: {}", email);

    let path = format!("/api/admin/users/{}", email);
    let result = api_request(&path, RequestOptions::get()).await?;

    result
        .as_ref()
        .and_then(|v| v.get("data"))
        .cloned()
        .map(serde_json::from_value)
        .transpose()
        .map_err(bad_shape)
}

/// PATCH /api/admin/users/:email/role → cambia el rol de un usuario
pub async fn change_role(email: &str, role: &str) -> Result<(), ApiError> {
    log::info!("👑 Cambiando rol de {} a {}", email, role);

    let path = format!("/api/admin/users/{}/role", email);
    let body = serde_json::json!({ "role": role });
    api_request(&path, RequestOptions::patch(body)).await?;

    Ok(())
}
