// ============================================================================
// USE SESSION HOOK - Ciclo de vida de la sesión del usuario
// ============================================================================
// Al montar revisa si hay access token guardado: sin token queda deslogueado
// sin tocar la red; con token pide el perfil. Un fallo del fetch se trata
// como sesión expirada: limpia las tres claves y vuelve a deslogueado.
// ============================================================================

use yew::prelude::*;

use crate::models::{TokenPair, UserProfile};
use crate::services::user_service;
use crate::stores::SessionStore;
use crate::utils::storage;

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub state: UseStateHandle<SessionStore>,
    pub login_success: Callback<TokenPair>,
    pub logout: Callback<()>,
    /// Setter directo para el patrón de update optimista
    pub set_user: Callback<Option<UserProfile>>,
}

impl UseSessionHandle {
    pub fn user(&self) -> Option<UserProfile> {
        self.state.user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn error(&self) -> Option<crate::services::ApiError> {
        self.state.error.clone()
    }

    pub fn is_admin(&self) -> bool {
        self.state
            .user
            .as_ref()
            .map(UserProfile::is_admin)
            .unwrap_or(false)
    }
}

async fn fetch_user_profile(state: UseStateHandle<SessionStore>) {
    // Sin token guardado no hay nada que consultar
    if storage::load_access_token().is_none() {
        state.set(SessionStore::logged_out());
        return;
    }

    state.set(SessionStore::loading());

    match user_service::fetch_my_profile().await {
        Ok(user) => {
            log::info!("✅ Perfil cargado: {}", user.nick_name);
            state.set(SessionStore::ready(user));
        }
        Err(err) => {
            // Token inválido o expirado: se limpia todo y se queda deslogueado.
            // El detalle del error solo se loguea.
            log::error!("❌ Error obteniendo perfil, cerrando sesión: {}", err);
            storage::clear_tokens();
            state.set(SessionStore::logged_out());
        }
    }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let state = use_state(SessionStore::default);

    // Inicialización: una sola vez al montar el provider
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(fetch_user_profile(state));
            || ()
        });
    }

    // Tras un login exitoso: persistir tokens y volver a pedir el perfil
    let login_success = {
        let state = state.clone();
        Callback::from(move |tokens: TokenPair| {
            if let Err(e) = storage::save_tokens(&tokens) {
                log::error!("❌ Error guardando tokens: {}", e);
            }
            wasm_bindgen_futures::spawn_local(fetch_user_profile(state.clone()));
        })
    };

    // Logout: limpieza local inmediata, sin llamada de red
    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            storage::clear_tokens();
            log::info!("👋 Logout");
            state.set(SessionStore::logged_out());
        })
    };

    let set_user = {
        let state = state.clone();
        Callback::from(move |user: Option<UserProfile>| {
            let mut next = (*state).clone();
            next.user = user;
            state.set(next);
        })
    };

    UseSessionHandle {
        state,
        login_success,
        logout,
        set_user,
    }
}
