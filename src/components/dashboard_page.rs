use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::{analyze_events, use_noise_feed, use_session_context, FETCH_LIMIT};
use crate::models::NoiseEvent;
use crate::services::device_service;

use super::{ErrorPanel, LoadingPanel, NoAccessPanel, NoiseChart, NoiseTable, ToastContainer};

// ====================== DASHBOARD ==========================
// Usuario regular: feed en vivo con polling, toasts y análisis.
// Admin: consulta puntual por serialNum, sin polling ni dedup.

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_session_context();
    let user = session.user();
    let is_admin = session.is_admin();

    let feed = use_noise_feed(user.is_some() && !is_admin);

    // Estado de la consulta admin
    let admin_events = use_state(Vec::<NoiseEvent>::new);
    let admin_loading = use_state(|| false);
    let serial_label = use_state(String::new);
    let serial_ref = use_node_ref();

    let on_lookup = {
        let admin_events = admin_events.clone();
        let admin_loading = admin_loading.clone();
        let serial_label = serial_label.clone();
        let serial_ref = serial_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(serial_input) = serial_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let serial = serial_input.value().trim().to_string();
            if serial.is_empty() {
                if let Some(win) = window() {
                    let _ = win.alert_with_message("Ingresa el serialNum del sensor.");
                }
                return;
            }

            let admin_events = admin_events.clone();
            let admin_loading = admin_loading.clone();
            let serial_label = serial_label.clone();

            wasm_bindgen_futures::spawn_local(async move {
                admin_loading.set(true);
                admin_events.set(Vec::new());

                match device_service::fetch_device_list(Some(&serial), 1, FETCH_LIMIT).await {
                    Ok(list) => {
                        log::info!("📡 Log de {}: {} eventos", serial, list.len());
                        admin_events.set(list);
                        serial_label.set(serial);
                    }
                    Err(err) => {
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&format!(
                                "Consulta fallida: {}",
                                err.friendly_message()
                            ));
                        }
                    }
                }

                admin_loading.set(false);
            });
        })
    };

    // ------------------- Gates de sesión ------------------------
    if session.is_loading() {
        return html! { <LoadingPanel message="Cargando información del usuario..." /> };
    }
    if let Some(err) = session.error() {
        return html! { <ErrorPanel message={err.friendly_message()} /> };
    }
    let Some(user) = user else {
        return html! { <NoAccessPanel /> };
    };

    // La carga inicial fallida bloquea la vista; los fallos de polling no
    if !is_admin {
        if let Some(err) = (*feed.error).clone() {
            return html! { <ErrorPanel message={err.friendly_message()} /> };
        }
    }

    // El admin trabaja sobre su consulta puntual; el usuario, sobre el feed
    let active_data: Vec<NoiseEvent> = if is_admin {
        (*admin_events).clone()
    } else {
        (*feed.events).clone()
    };
    let report = analyze_events(&active_data);
    let feed_warming_up = *feed.is_loading && feed.events.is_empty();

    html! {
        <div class="page dashboard-page">
            <header class="page-header">
                <h1>{ "Dashboard" }</h1>
                <p>{ format!("Bienvenido/a, {}.", user.nick_name) }</p>
            </header>

            if is_admin {
                <section class="panel admin-lookup">
                    <h2>{ "Consulta de sensor (Admin)" }</h2>
                    <form class="lookup-form" onsubmit={on_lookup}>
                        <input
                            type="text"
                            placeholder="Ingresa el serialNum"
                            ref={serial_ref}
                        />
                        <button
                            type="submit"
                            class="btn-primary"
                            disabled={*admin_loading}
                        >
                            { if *admin_loading { "Consultando..." } else { "Consultar" } }
                        </button>
                    </form>
                </section>

                if !admin_events.is_empty() {
                    <section class="panel">
                        <NoiseChart
                            data={(*admin_events).clone()}
                            title={format!("Log de ruido de {}", *serial_label)}
                        />
                    </section>
                }
            } else {
                <section class="panel">
                    if feed_warming_up {
                        <p class="chart-loading">{ "Cargando lecturas del sensor..." }</p>
                    } else {
                        <NoiseChart
                            data={(*feed.events).clone()}
                            title="Gráfico de ruido en tiempo real"
                        />
                    }
                </section>
            }

            if let Some(report) = report {
                <section class="panel">
                    <h2>{ "Análisis de datos en tiempo real" }</h2>
                    <div class={classes!("report-card", if report.is_stable { "stable" } else { "warning" })}>
                        <h3>
                            {
                                if report.is_stable {
                                    "Estado estable"
                                } else {
                                    "Atención: se requiere revisión por ruido"
                                }
                            }
                        </h3>
                        <p>
                            { format!(
                                "Se registró un máximo de {:.1} dB alrededor de las {}.",
                                report.max_dba, report.max_time
                            ) }
                            {
                                if report.is_stable {
                                    " El entorno se mantuvo por debajo del umbral en toda la ventana."
                                } else {
                                    " Hubo lecturas por encima del umbral que conviene revisar."
                                }
                            }
                        </p>
                        <p>
                            { format!(
                                "Según el modelo de clasificación, la fuente principal de ruido es '{}'.",
                                report.frequent_noise
                            ) }
                        </p>
                    </div>
                </section>
            }

            <section class="panel">
                <h2>{ "Log de ruido reciente" }</h2>
                <NoiseTable data={active_data} />
            </section>

            if !is_admin {
                <ToastContainer
                    toasts={(*feed.toasts).clone()}
                    on_dismiss={feed.dismiss_toast.clone()}
                />
            }
        </div>
    }
}
