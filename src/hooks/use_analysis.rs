// ============================================================================
// ANALYSIS - Reporte derivado del snapshot de eventos activo
// ============================================================================

use crate::models::{format_time, NoiseEvent};

#[derive(Clone, PartialEq, Debug)]
pub struct AnalysisReport {
    pub max_dba: f64,
    pub max_time: String,
    pub frequent_noise: String,
    pub is_stable: bool,
}

/// Deriva el reporte del snapshot actual. Empates:
/// - máximo dBA: gana la primera ocurrencia
/// - causa más frecuente: gana la primera vista durante el conteo
pub fn analyze_events(events: &[NoiseEvent]) -> Option<AnalysisReport> {
    if events.is_empty() {
        return None;
    }

    // 1. Máximo nivel de ruido
    let mut max_item = &events[0];
    for item in events {
        if item.dba > max_item.dba {
            max_item = item;
        }
    }

    // 2. Causa más frecuente, conteo en orden de aparición
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for item in events {
        let label = item.what_noise_label();
        match counts.iter_mut().find(|(key, _)| *key == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }

    let mut frequent_noise = counts[0].0;
    let mut best = counts[0].1;
    for (label, count) in &counts[1..] {
        if *count > best {
            frequent_noise = label;
            best = *count;
        }
    }

    // 3. Estable solo si ningún evento de la ventana superó el umbral
    let is_stable = !events.iter().any(|e| e.is_noise);

    Some(AnalysisReport {
        max_dba: max_item.dba,
        max_time: format_time(max_item.created_at.as_deref()),
        frequent_noise: frequent_noise.to_string(),
        is_stable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, what: &str, dba: f64, is_noise: bool) -> NoiseEvent {
        NoiseEvent::demo(id, "r1", what, dba, is_noise, "2025-11-02T22:40:53+09:00")
    }

    #[test]
    fn sin_eventos_no_hay_reporte() {
        assert!(analyze_events(&[]).is_none());
    }

    #[test]
    fn maximo_y_estabilidad() {
        let events = vec![
            event("n1", "dog", 30.0, false),
            event("n2", "dog", 45.0, true),
        ];

        let report = analyze_events(&events).unwrap();
        assert_eq!(report.max_dba, 45.0);
        assert!(!report.is_stable);
    }

    #[test]
    fn ventana_sin_ruido_es_estable() {
        let events = vec![
            event("n1", "talk", 30.0, false),
            event("n2", "talk", 32.0, false),
        ];

        let report = analyze_events(&events).unwrap();
        assert!(report.is_stable);
        assert_eq!(report.max_time, "22:40:53");
    }

    #[test]
    fn empate_de_maximo_gana_la_primera_ocurrencia() {
        let events = vec![
            event("n1", "dog", 50.0, true),
            event("n2", "car", 50.0, true),
        ];

        let report = analyze_events(&events).unwrap();
        assert_eq!(report.max_dba, 50.0);
        // n1 llegó primero con el mismo valor
        assert_eq!(report.frequent_noise, "dog");
    }

    #[test]
    fn causa_mas_frecuente_con_desempate_por_primera_vista() {
        let events = vec![
            event("n1", "car", 40.0, false),
            event("n2", "dog", 41.0, false),
            event("n3", "dog", 42.0, false),
            event("n4", "car", 43.0, false),
        ];

        // car y dog empatan 2-2: gana car por aparecer primero
        let report = analyze_events(&events).unwrap();
        assert_eq!(report.frequent_noise, "car");
    }

    #[test]
    fn causa_vacia_usa_etiqueta_de_respaldo() {
        let events = vec![event("n1", "", 40.0, false)];
        let report = analyze_events(&events).unwrap();
        assert_eq!(report.frequent_noise, "desconocido");
    }
}
