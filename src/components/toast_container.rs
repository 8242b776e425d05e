use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::Toast;

/// Ventana de exhibición de cada toast antes de auto-descartarse
const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Properties, PartialEq)]
pub struct ToastContainerProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<String>,
}

#[function_component(ToastContainer)]
pub fn toast_container(props: &ToastContainerProps) -> Html {
    html! {
        <div class="toast-container">
            {
                for props.toasts.iter().map(|toast| html! {
                    <ToastItem
                        key={toast.id.clone()}
                        toast={toast.clone()}
                        on_dismiss={props.on_dismiss.clone()}
                    />
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<String>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    // Auto-descarte a los 5 segundos; desmontar el toast cancela el timer
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.toast.id.clone(), move |id: &String| {
            let id = id.clone();
            let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id.clone()))
    };

    html! {
        <div class="toast">
            <div class="toast-body">
                <p class="toast-title">{ &props.toast.title }</p>
                <p class="toast-message">{ &props.toast.message }</p>
            </div>
            <button class="toast-close" onclick={on_close}>{ "✕" }</button>
        </div>
    }
}
