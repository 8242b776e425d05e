use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Ítem crudo de `/api/device/list`: lectura anidada en `noise`
/// y metadatos del sensor en `type`
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct DeviceListItem {
    #[serde(default)]
    pub noise: Option<NoiseRecord>,
    #[serde(rename = "type", default)]
    pub device_type: Option<DeviceType>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct NoiseRecord {
    #[serde(rename = "noiseId")]
    pub noise_id: String,
    #[serde(default)]
    pub dba: f64,
    #[serde(rename = "isNoise", default)]
    pub is_noise: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct DeviceType {
    #[serde(rename = "resberryId", default)]
    pub resberry_id: Option<String>,
    #[serde(rename = "noiseTypes", default)]
    pub noise_types: Option<String>,
}

/// Evento de ruido normalizado: el ítem del servidor aplanado a una sola capa.
/// Vive solo en memoria, un snapshot por ciclo de polling.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NoiseEvent {
    pub noise_id: String,
    pub rasberry_id: String,
    pub what_noise: String,
    pub dba: f64,
    pub is_noise: bool,
    pub created_at: Option<String>,
}

impl NoiseEvent {
    /// Aplana un ítem del servidor; sin sub-objeto `noise` no hay evento
    pub fn from_device_item(item: DeviceListItem) -> Option<Self> {
        let noise = item.noise?;
        let device_type = item.device_type;

        Some(Self {
            noise_id: noise.noise_id,
            rasberry_id: device_type
                .as_ref()
                .and_then(|t| t.resberry_id.clone())
                .unwrap_or_default(),
            what_noise: device_type
                .and_then(|t| t.noise_types)
                .unwrap_or_default(),
            dba: noise.dba,
            is_noise: noise.is_noise,
            created_at: noise.created_at,
        })
    }

    /// Causa clasificada, con etiqueta de respaldo si el modelo no la entregó
    pub fn what_noise_label(&self) -> &str {
        if self.what_noise.is_empty() {
            "desconocido"
        } else {
            &self.what_noise
        }
    }

    /// Crear un evento de demo (página de ejemplo sin sesión)
    pub fn demo(noise_id: &str, rasberry_id: &str, what_noise: &str, dba: f64,
                is_noise: bool, created_at: &str) -> Self {
        Self {
            noise_id: noise_id.to_string(),
            rasberry_id: rasberry_id.to_string(),
            what_noise: what_noise.to_string(),
            dba,
            is_noise,
            created_at: Some(created_at.to_string()),
        }
    }
}

/// Aplana la lista completa descartando ítems sin lectura
pub fn flatten_device_list(items: Vec<DeviceListItem>) -> Vec<NoiseEvent> {
    items
        .into_iter()
        .filter_map(NoiseEvent::from_device_item)
        .collect()
}

/// Timestamp RFC 3339 → "HH:MM:SS", o "-" si no se puede parsear
pub fn format_time(created_at: Option<&str>) -> String {
    created_at
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Timestamp RFC 3339 → fecha y hora legibles, o "-"
pub fn format_datetime(created_at: Option<&str>) -> String {
    created_at
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.format("%d/%m/%Y %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn created_ts(event: &NoiseEvent) -> i64 {
    event
        .created_at
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(i64::MIN)
}

/// Orden cronológico ascendente, para el gráfico
pub fn sort_events_for_chart(mut events: Vec<NoiseEvent>) -> Vec<NoiseEvent> {
    events.sort_by_key(created_ts);
    events
}

/// Los `limit` eventos más recientes, para la tabla de logs
pub fn recent_events(events: &[NoiseEvent], limit: usize) -> Vec<NoiseEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| std::cmp::Reverse(created_ts(e)));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn device_item(value: serde_json::Value) -> DeviceListItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn aplana_item_completo() {
        let item = device_item(json!({
            "noise": { "noiseId": "n1", "dba": 70.0, "isNoise": true, "createdAt": "2025-11-02T10:00:00+00:00" },
            "type": { "resberryId": "r1", "noiseTypes": "dog" }
        }));

        let event = NoiseEvent::from_device_item(item).unwrap();
        assert_eq!(event.noise_id, "n1");
        assert_eq!(event.rasberry_id, "r1");
        assert_eq!(event.what_noise, "dog");
        assert_eq!(event.dba, 70.0);
        assert!(event.is_noise);
    }

    #[test]
    fn item_sin_noise_se_descarta() {
        let items = vec![
            device_item(json!({ "type": { "resberryId": "r1" } })),
            device_item(json!({
                "noise": { "noiseId": "n2", "dba": 40.0, "isNoise": false }
            })),
        ];

        let events = flatten_device_list(items);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].noise_id, "n2");
    }

    #[test]
    fn item_sin_type_queda_con_defaults() {
        let item = device_item(json!({
            "noise": { "noiseId": "n3", "dba": 55.5, "isNoise": true }
        }));

        let event = NoiseEvent::from_device_item(item).unwrap();
        assert_eq!(event.rasberry_id, "");
        assert_eq!(event.what_noise_label(), "desconocido");
    }

    #[test]
    fn format_time_con_timestamp_invalido() {
        assert_eq!(format_time(Some("no-es-fecha")), "-");
        assert_eq!(format_time(None), "-");
        assert_eq!(format_time(Some("2025-11-02T22:40:53+09:00")), "22:40:53");
    }

    #[test]
    fn orden_cronologico_para_el_grafico() {
        let events = vec![
            NoiseEvent::demo("n2", "r1", "dog", 40.0, false, "2025-11-02T10:05:00+00:00"),
            NoiseEvent::demo("n1", "r1", "dog", 30.0, false, "2025-11-02T10:00:00+00:00"),
        ];

        let sorted = sort_events_for_chart(events);
        assert_eq!(sorted[0].noise_id, "n1");
        assert_eq!(sorted[1].noise_id, "n2");
    }

    #[test]
    fn recent_events_corta_al_limite() {
        let events = vec![
            NoiseEvent::demo("n1", "r1", "dog", 30.0, false, "2025-11-02T10:00:00+00:00"),
            NoiseEvent::demo("n2", "r1", "dog", 40.0, false, "2025-11-02T10:05:00+00:00"),
            NoiseEvent::demo("n3", "r1", "dog", 50.0, false, "2025-11-02T10:10:00+00:00"),
        ];

        let recent = recent_events(&events, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].noise_id, "n3");
        assert_eq!(recent[1].noise_id, "n2");
    }
}
