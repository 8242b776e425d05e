use yew::prelude::*;

use crate::models::{format_datetime, recent_events, NoiseEvent};

/// Cuántas filas del log se muestran
const TABLE_LIMIT: usize = 10;

#[derive(Properties, PartialEq)]
pub struct NoiseTableProps {
    pub data: Vec<NoiseEvent>,
}

/// Tabla con las últimas lecturas, de la más reciente a la más antigua
#[function_component(NoiseTable)]
pub fn noise_table(props: &NoiseTableProps) -> Html {
    let rows = recent_events(&props.data, TABLE_LIMIT);

    html! {
        <div class="noise-table">
            {
                if rows.is_empty() {
                    html! { <p class="table-empty">{ "No hay datos para mostrar." }</p> }
                } else {
                    html! {
                        <ul>
                            {
                                for rows.iter().map(|event| html! {
                                    <li key={event.noise_id.clone()} class="noise-row">
                                        <div class="noise-row-main">
                                            <span class="sensor-badge">{ &event.rasberry_id }</span>
                                            <span class="noise-cause">{ event.what_noise_label() }</span>
                                        </div>
                                        <div class="noise-row-detail">
                                            <span class={classes!("noise-level", event.is_noise.then_some("alert"))}>
                                                { format!("{:.1} dB", event.dba) }
                                            </span>
                                            <span class="noise-timestamp">
                                                { format_datetime(event.created_at.as_deref()) }
                                            </span>
                                        </div>
                                    </li>
                                })
                            }
                        </ul>
                    }
                }
            }
        </div>
    }
}
