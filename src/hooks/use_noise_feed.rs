// ============================================================================
// USE NOISE FEED HOOK - Polling del log de ruido + detección de eventos nuevos
// ============================================================================
// Solo para el dashboard de usuario regular (el admin consulta bajo demanda).
// Cada poll reemplaza el snapshot completo; el set de ids ya vistos vive
// entre ciclos de polling y muere al desmontar la vista.
// ============================================================================

use std::collections::HashSet;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::models::NoiseEvent;
use crate::services::{device_service, ApiError};

pub const POLLING_INTERVAL_MS: u32 = 5_000;
pub const FETCH_LIMIT: u32 = 10;

/// Notificación efímera por un evento de ruido nuevo
#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub message: String,
}

pub struct UseNoiseFeedHandle {
    pub events: UseStateHandle<Vec<NoiseEvent>>,
    pub toasts: UseStateHandle<Vec<Toast>>,
    pub is_loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<ApiError>>,
    pub dismiss_toast: Callback<String>,
}

/// Recorre el snapshot y arma un toast por cada evento con ruido cuyo id
/// no se haya visto todavía, en orden de aparición. Marca los ids como vistos.
pub fn collect_new_toasts(events: &[NoiseEvent], seen: &mut HashSet<String>) -> Vec<Toast> {
    let mut toasts = Vec::new();

    for event in events {
        if event.is_noise && !seen.contains(&event.noise_id) {
            toasts.push(Toast {
                id: event.noise_id.clone(),
                title: format!("¡Ruido de {} detectado!", event.what_noise_label()),
                message: format!("{} registró {} dB", event.rasberry_id, event.dba),
            });
            seen.insert(event.noise_id.clone());
        }
    }

    toasts
}

#[hook]
pub fn use_noise_feed(active: bool) -> UseNoiseFeedHandle {
    let events = use_state(Vec::<NoiseEvent>::new);
    let toasts = use_state(Vec::<Toast>::new);
    let is_loading = use_state(|| true);
    let error = use_state(|| None::<ApiError>);
    let seen_ids = use_mut_ref(HashSet::<String>::new);
    let interval_handle = use_mut_ref(|| None::<Interval>);

    // Carga inicial: el primer snapshot siembra el set de ids vistos
    // (incluye los no-ruido) para que lo preexistente nunca genere toast
    {
        let events = events.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        let seen_ids = seen_ids.clone();

        use_effect_with(active, move |active| {
            if *active {
                wasm_bindgen_futures::spawn_local(async move {
                    is_loading.set(true);
                    match device_service::fetch_device_list(None, 1, FETCH_LIMIT).await {
                        Ok(list) => {
                            *seen_ids.borrow_mut() =
                                list.iter().map(|e| e.noise_id.clone()).collect();
                            log::info!("📡 Snapshot inicial: {} eventos", list.len());
                            events.set(list);
                            error.set(None);
                        }
                        Err(err) => {
                            log::error!("❌ Error en la carga inicial del log: {}", err);
                            error.set(Some(err));
                        }
                    }
                    is_loading.set(false);
                });
            } else {
                is_loading.set(false);
            }
            || ()
        });
    }

    // Polling cada 5 segundos: cada snapshot reemplaza la lista completa.
    // Los fallos se tragan: la vista conserva el último snapshot bueno.
    {
        let events = events.clone();
        let interval_handle = interval_handle.clone();

        use_effect_with(active, move |active| {
            *interval_handle.borrow_mut() = None;

            if *active {
                log::info!(
                    "⏰ Polling del log de ruido cada {} segundos",
                    POLLING_INTERVAL_MS / 1000
                );

                let interval = Interval::new(POLLING_INTERVAL_MS, move || {
                    let events = events.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match device_service::fetch_device_list(None, 1, FETCH_LIMIT).await {
                            Ok(list) => events.set(list),
                            Err(err) => log::error!("⚠️ Error en polling: {}", err),
                        }
                    });
                });

                *interval_handle.borrow_mut() = Some(interval);
            }

            move || {
                // Cleanup: soltar el Interval cancela el timer
                *interval_handle.borrow_mut() = None;
            }
        });
    }

    // Detección de eventos nuevos: reacciona al cambio de la lista, no al
    // fetch, así el reemplazo del snapshot siempre llega antes que el scan
    {
        let toasts = toasts.clone();
        let seen_ids = seen_ids.clone();

        use_effect_with((active, (*events).clone()), move |(active, list)| {
            if *active && !list.is_empty() {
                let new_toasts = collect_new_toasts(list, &mut seen_ids.borrow_mut());
                if !new_toasts.is_empty() {
                    log::info!("🔔 {} eventos de ruido nuevos", new_toasts.len());
                    let mut all = (*toasts).clone();
                    all.extend(new_toasts);
                    toasts.set(all);
                }
            }
            || ()
        });
    }

    let dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: String| {
            let remaining: Vec<Toast> = toasts.iter().filter(|t| t.id != id).cloned().collect();
            toasts.set(remaining);
        })
    };

    UseNoiseFeedHandle {
        events,
        toasts,
        is_loading,
        error,
        dismiss_toast,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, dba: f64, is_noise: bool) -> NoiseEvent {
        NoiseEvent::demo(id, "r1", "dog", dba, is_noise, "2025-11-02T10:00:00+00:00")
    }

    #[test]
    fn snapshot_inicial_sembrado_no_genera_toasts() {
        // El mount siembra el set con todos los ids del primer snapshot
        let initial = vec![event("n1", 70.0, true)];
        let mut seen: HashSet<String> = initial.iter().map(|e| e.noise_id.clone()).collect();

        let toasts = collect_new_toasts(&initial, &mut seen);
        assert!(toasts.is_empty());
        assert!(seen.contains("n1"));
    }

    #[test]
    fn evento_nuevo_genera_exactamente_un_toast() {
        let mut seen: HashSet<String> = ["n1".to_string()].into_iter().collect();
        let snapshot = vec![event("n1", 70.0, true), event("n2", 80.0, true)];

        let toasts = collect_new_toasts(&snapshot, &mut seen);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, "n2");

        // Un segundo poll con el mismo evento no vuelve a notificar
        let repeated = collect_new_toasts(&snapshot, &mut seen);
        assert!(repeated.is_empty());
    }

    #[test]
    fn eventos_sin_ruido_no_notifican() {
        let mut seen = HashSet::new();
        let snapshot = vec![event("n1", 30.0, false), event("n2", 45.0, true)];

        let toasts = collect_new_toasts(&snapshot, &mut seen);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, "n2");
        // El id sin ruido no queda marcado: si sube de nivel después, notifica
        assert!(!seen.contains("n1"));
    }

    #[test]
    fn rafaga_de_eventos_notifica_en_orden_de_aparicion() {
        let mut seen = HashSet::new();
        let snapshot = vec![
            event("n3", 60.0, true),
            event("n1", 70.0, true),
            event("n2", 80.0, true),
        ];

        let toasts = collect_new_toasts(&snapshot, &mut seen);
        let ids: Vec<&str> = toasts.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["n3", "n1", "n2"]);
    }
}
