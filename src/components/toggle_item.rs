use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToggleItemProps {
    pub label: String,
    #[prop_or_default]
    pub description: String,
    pub enabled: bool,
    pub on_toggle: Callback<()>,
}

/// Interruptor de preferencia con etiqueta y descripción
#[function_component(ToggleItem)]
pub fn toggle_item(props: &ToggleItemProps) -> Html {
    let onclick = props.on_toggle.reform(|_: MouseEvent| ());

    html! {
        <div class="toggle-item">
            <div class="toggle-text">
                <span class="toggle-label">{ &props.label }</span>
                if !props.description.is_empty() {
                    <p class="toggle-description">{ &props.description }</p>
                }
            </div>
            <button
                class={classes!("toggle-switch", props.enabled.then_some("enabled"))}
                {onclick}
            >
                <span class="toggle-knob"></span>
            </button>
        </div>
    }
}
