use crate::models::{flatten_device_list, DeviceListItem, NoiseEvent};
use crate::services::api::{api_request, bad_shape, ApiError, RequestOptions};

/// GET /api/device/list → eventos de ruido normalizados.
/// Con `serial_num` el admin consulta el log de un sensor puntual;
/// sin él, el backend resuelve el sensor del usuario autenticado.
pub async fn fetch_device_list(
    serial_num: Option<&str>,
    page: u32,
    limit: u32,
) -> Result<Vec<NoiseEvent>, ApiError> {
    let path = match serial_num {
        Some(serial) => format!(
            "/api/device/list?serialNum={}&page={}&limit={}",
            serial, page, limit
        ),
        None => format!("/api/device/list?page={}&limit={}", page, limit),
    };

    let result = api_request(&path, RequestOptions::get()).await?;

    // data.list ausente equivale a lista vacía
    let items: Vec<DeviceListItem> = result
        .as_ref()
        .and_then(|v| v.pointer("/data/list"))
        .cloned()
        .map(serde_json::from_value)
        .transpose()
        .map_err(bad_shape)?
        .unwrap_or_default();

    Ok(flatten_device_list(items))
}
