use yew::prelude::*;

use crate::hooks::use_session_context;
use crate::models::NoiseEvent;

use super::app::Screen;
use super::NoiseChart;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_navigate: Callback<Screen>,
}

/// Página pública de inicio: muestra con datos de ejemplo cómo se ve
/// el servicio antes de iniciar sesión
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let session = use_session_context();
    let user = session.user();
    let demo = demo_events();

    html! {
        <div class="page home-page">
            <section class="page-header">
                <h1>{ "Visualización de datos del sensor de sonido (ejemplo)" }</h1>
                <p>{ "Así se ven los datos del servicio antes de iniciar sesión." }</p>
            </section>

            <section class="panel">
                <NoiseChart data={demo} title="Gráfico dBA (ejemplo)" />
            </section>

            <section class="panel">
                <h2>{ "Análisis de datos (ejemplo)" }</h2>
                <div class="report-card stable">
                    <h3>{ "Reporte de ejemplo" }</h3>
                    <p>
                        { "Los datos de ejemplo registran un máximo de 37.9 dB a las 22:40:53, \
                           con un entorno en general por debajo del umbral de referencia (40 dB)." }
                    </p>
                    <p>
                        { "El modelo de clasificación identifica la fuente más probable como \
                           'conversación tranquila'. El servicio no solo mide: también indica \
                           el tipo de ruido detectado." }
                    </p>
                    <p>
                        { "Con una sesión iniciada puedes ver los datos en vivo de tu sensor y \
                           activar las alertas de ruido." }
                    </p>
                </div>
            </section>

            {
                if !session.is_loading() && user.is_none() {
                    html! {
                        <section class="home-cta">
                            <button
                                class="btn-primary"
                                onclick={props.on_navigate.reform(|_: MouseEvent| Screen::Login)}
                            >
                                { "Iniciar sesión" }
                            </button>
                            <button
                                class="btn-secondary"
                                onclick={props.on_navigate.reform(|_: MouseEvent| Screen::Signup)}
                            >
                                { "Crear cuenta" }
                            </button>
                        </section>
                    }
                } else if let Some(user) = user {
                    html! {
                        <section class="panel welcome-card">
                            <div>
                                <p class="welcome-title">
                                    { format!("¡Hola, {}!", user.nick_name) }
                                </p>
                                <p>{ "Revisa los datos en vivo en el dashboard." }</p>
                            </div>
                            <button
                                class="btn-primary"
                                onclick={props.on_navigate.reform(|_: MouseEvent| Screen::Dashboard)}
                            >
                                { "Ir al dashboard" }
                            </button>
                        </section>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// Lecturas de ejemplo en el rango de los 30 dB
fn demo_events() -> Vec<NoiseEvent> {
    vec![
        NoiseEvent::demo("demo-1", "sensor-demo", "conversación", 32.11, false, "2025-06-14T22:39:53+00:00"),
        NoiseEvent::demo("demo-2", "sensor-demo", "conversación", 37.90, false, "2025-06-14T22:40:53+00:00"),
        NoiseEvent::demo("demo-3", "sensor-demo", "conversación", 30.16, false, "2025-06-14T22:41:53+00:00"),
        NoiseEvent::demo("demo-4", "sensor-demo", "conversación", 30.62, false, "2025-06-14T22:42:53+00:00"),
        NoiseEvent::demo("demo-5", "sensor-demo", "conversación", 34.35, false, "2025-06-14T22:43:53+00:00"),
        NoiseEvent::demo("demo-6", "sensor-demo", "conversación", 32.72, false, "2025-06-14T22:44:53+00:00"),
        NoiseEvent::demo("demo-7", "sensor-demo", "conversación", 30.64, false, "2025-06-14T22:45:53+00:00"),
        NoiseEvent::demo("demo-8", "sensor-demo", "conversación", 26.84, false, "2025-06-14T22:46:53+00:00"),
        NoiseEvent::demo("demo-9", "sensor-demo", "conversación", 28.85, false, "2025-06-14T22:47:53+00:00"),
        NoiseEvent::demo("demo-10", "sensor-demo", "conversación", 31.07, false, "2025-06-14T22:48:53+00:00"),
    ]
}
