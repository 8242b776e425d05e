use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessagePanelProps {
    pub message: String,
}

/// Pantalla de carga a página completa
#[function_component(LoadingPanel)]
pub fn loading_panel(props: &MessagePanelProps) -> Html {
    html! {
        <div class="feedback-panel">
            <p class="feedback-loading">{ &props.message }</p>
        </div>
    }
}

/// Error bloqueante a página completa
#[function_component(ErrorPanel)]
pub fn error_panel(props: &MessagePanelProps) -> Html {
    html! {
        <div class="feedback-panel">
            <p class="feedback-error">{ format!("Error: {}", props.message) }</p>
        </div>
    }
}

/// Vista para rutas que requieren sesión
#[function_component(NoAccessPanel)]
pub fn no_access_panel() -> Html {
    html! {
        <div class="feedback-panel">
            <h2>{ "Sin acceso" }</h2>
            <p>{ "Necesitas iniciar sesión para ver esta página." }</p>
        </div>
    }
}

/// Se muestra mientras una redirección por permisos está en curso
#[function_component(RedirectingPanel)]
pub fn redirecting_panel(props: &MessagePanelProps) -> Html {
    html! {
        <div class="feedback-panel">
            <p class="feedback-redirecting">{ &props.message }</p>
        </div>
    }
}
