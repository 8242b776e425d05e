use serde::Serialize;
use serde_json::Value;

use crate::models::UserProfile;
use crate::services::api::{api_request, bad_shape, take_data, ApiError, RequestOptions};

/// Campos editables del perfil; solo se serializa lo que cambió
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
pub struct ProfileUpdate {
    #[serde(rename = "nickName", skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.nick_name.is_none() && self.password.is_none()
    }
}

/// Lo que el servidor devuelve al cambiar la preferencia de alertas:
/// el usuario completo, solo el flag, o nada útil
#[derive(Clone, PartialEq, Debug)]
pub enum NoticeUpdate {
    FullUser(UserProfile),
    NoticeOnly(bool),
    Unchanged,
}

/// GET /api/user/my → perfil del usuario autenticado
pub async fn fetch_my_profile() -> Result<UserProfile, ApiError> {
    let result = api_request("/api/user/my", RequestOptions::get()).await?;
    let mut data = take_data(result)?;

    let user_value = data
        .get_mut("user")
        .map(Value::take)
        .unwrap_or(Value::Null);

    serde_json::from_value(user_value).map_err(bad_shape)
}

/// PATCH /api/user/my; el servidor puede omitir el user actualizado
pub async fn update_profile(update: &ProfileUpdate) -> Result<Option<UserProfile>, ApiError> {
    log::info!("✏️ Actualizando perfil");

    let body = serde_json::to_value(update).map_err(bad_shape)?;
    let result = api_request("/api/user/my", RequestOptions::patch(body)).await?;

    let user = result
        .as_ref()
        .and_then(|v| v.pointer("/data/user"))
        .cloned()
        .map(serde_json::from_value)
        .transpose()
        .map_err(bad_shape)?;

    Ok(user)
}

/// PATCH /api/user/notice → confirma el toggle optimista de alertas
pub async fn update_notice(notice_set: bool) -> Result<NoticeUpdate, ApiError> {
    log::info!("🔔 Cambiando preferencia de alertas: {}", notice_set);

    let body = serde_json::json!({ "noticeSet": notice_set });
    let result = api_request("/api/user/notice", RequestOptions::patch(body)).await?;

    Ok(decode_notice_payload(result))
}

/// DELETE /api/user/my → elimina la cuenta (responde 204)
pub async fn delete_account() -> Result<(), ApiError> {
    log::info!("🗑️ Eliminando cuenta");

    api_request("/api/user/my", RequestOptions::delete()).await?;
    Ok(())
}

pub(crate) fn decode_notice_payload(result: Option<Value>) -> NoticeUpdate {
    let Some(data) = result.as_ref().and_then(|v| v.get("data")) else {
        return NoticeUpdate::Unchanged;
    };

    // Usuario completo si viene con email; si no, solo el flag
    if data.get("email").is_some() {
        if let Ok(user) = serde_json::from_value::<UserProfile>(data.clone()) {
            return NoticeUpdate::FullUser(user);
        }
    }

    if let Some(notice_set) = data.get("noticeSet").and_then(Value::as_bool) {
        return NoticeUpdate::NoticeOnly(notice_set);
    }

    NoticeUpdate::Unchanged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn notice_payload_con_usuario_completo() {
        let result = Some(json!({
            "data": { "email": "a@b.com", "nickName": "Ana", "role": "USER", "noticeSet": true }
        }));

        match decode_notice_payload(result) {
            NoticeUpdate::FullUser(user) => {
                assert_eq!(user.email, "a@b.com");
                assert!(user.notice_set);
            }
            other => panic!("se esperaba FullUser, llegó {:?}", other),
        }
    }

    #[test]
    fn notice_payload_solo_flag() {
        let result = Some(json!({ "data": { "noticeSet": false } }));
        assert_eq!(decode_notice_payload(result), NoticeUpdate::NoticeOnly(false));
    }

    #[test]
    fn notice_payload_sin_data_util() {
        assert_eq!(decode_notice_payload(None), NoticeUpdate::Unchanged);
        assert_eq!(
            decode_notice_payload(Some(json!({ "data": {} }))),
            NoticeUpdate::Unchanged
        );
    }

    #[test]
    fn profile_update_solo_serializa_lo_presente() {
        let update = ProfileUpdate {
            nick_name: Some("Nuevo".to_string()),
            password: None,
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, json!({ "nickName": "Nuevo" }));
        assert!(ProfileUpdate::default().is_empty());
    }
}
