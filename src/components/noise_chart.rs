use yew::prelude::*;

use crate::models::{format_time, sort_events_for_chart, NoiseEvent};

#[derive(Properties, PartialEq)]
pub struct NoiseChartProps {
    pub data: Vec<NoiseEvent>,
    pub title: String,
}

/// Gráfico de barras de los niveles dBA en orden cronológico.
/// Las lecturas que superaron el umbral se marcan como ruido.
#[function_component(NoiseChart)]
pub fn noise_chart(props: &NoiseChartProps) -> Html {
    let sorted = sort_events_for_chart(props.data.clone());

    html! {
        <div class="noise-chart">
            <h3>{ &props.title }</h3>
            {
                if sorted.is_empty() {
                    html! { <p class="chart-empty">{ "No hay datos para mostrar." }</p> }
                } else {
                    html! {
                        <div class="chart-bars">
                            {
                                for sorted.iter().map(|event| {
                                    let height = event.dba.clamp(0.0, 100.0);
                                    html! {
                                        <div class="chart-column" key={event.noise_id.clone()}>
                                            <span class="chart-value">{ format!("{:.1}", event.dba) }</span>
                                            <div
                                                class={classes!("chart-bar", event.is_noise.then_some("noise"))}
                                                style={format!("height: {}%;", height)}
                                                title={event.what_noise_label().to_string()}
                                            ></div>
                                            <span class="chart-label">
                                                { format_time(event.created_at.as_deref()) }
                                            </span>
                                        </div>
                                    }
                                })
                            }
                        </div>
                    }
                }
            }
        </div>
    }
}
