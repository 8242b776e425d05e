// ============================================================================
// SESSION CONTEXT - Compartir estado de sesión entre componentes
// ============================================================================
// Usa Context API de Yew para compartir la sesión globalmente, en lugar
// de un singleton a nivel de módulo
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session::{use_session, UseSessionHandle};

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app y expone el estado de sesión
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session_handle = use_session();

    html! {
        <ContextProvider<UseSessionHandle> context={session_handle}>
            { props.children.clone() }
        </ContextProvider<UseSessionHandle>>
    }
}

/// Acceso al contexto de sesión desde cualquier componente del árbol
#[hook]
pub fn use_session_context() -> UseSessionHandle {
    use_context::<UseSessionHandle>()
        .expect("use_session_context debe usarse dentro de SessionProvider")
}
