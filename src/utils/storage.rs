use web_sys::{window, Storage};

use crate::models::TokenPair;

/// Claves fijas en localStorage. Se escriben y se limpian como unidad:
/// la presencia del access token es la única señal de "hay sesión".
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "noiseMonitor_accessToken";
pub const STORAGE_KEY_REFRESH_TOKEN: &str = "noiseMonitor_refreshToken";
pub const STORAGE_KEY_NICKNAME: &str = "noiseMonitor_nickname";

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Devuelve el access token guardado, o None fuera del navegador
pub fn load_access_token() -> Option<String> {
    get_local_storage()?.get_item(STORAGE_KEY_ACCESS_TOKEN).ok()?
}

/// Persiste los tres valores del par de tokens
pub fn save_tokens(tokens: &TokenPair) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(STORAGE_KEY_ACCESS_TOKEN, &tokens.access_token)
        .map_err(|_| "Error guardando accessToken".to_string())?;
    storage
        .set_item(STORAGE_KEY_REFRESH_TOKEN, &tokens.refresh_token)
        .map_err(|_| "Error guardando refreshToken".to_string())?;
    storage
        .set_item(STORAGE_KEY_NICKNAME, &tokens.nickname)
        .map_err(|_| "Error guardando nickname".to_string())?;
    Ok(())
}

/// Limpia las tres claves como unidad (logout o sesión expirada)
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(STORAGE_KEY_ACCESS_TOKEN);
        let _ = storage.remove_item(STORAGE_KEY_REFRESH_TOKEN);
        let _ = storage.remove_item(STORAGE_KEY_NICKNAME);
    }
}
