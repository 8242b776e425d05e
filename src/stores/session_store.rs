// ============================================================================
// SESSION STORE - Estado de sesión compartido por todo el árbol
// ============================================================================
// Ciclo de vida: arranca cargando (sin inicializar), y tras resolver el
// perfil queda en ready(user) o logged_out. El logout y la expiración de
// sesión vuelven a logged_out.
// ============================================================================

use crate::models::UserProfile;
use crate::services::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct SessionStore {
    pub user: Option<UserProfile>,
    pub is_loading: bool,
    pub error: Option<ApiError>,
}

impl SessionStore {
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
            error: None,
        }
    }

    pub fn ready(user: UserProfile) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
            error: None,
        }
    }

    pub fn logged_out() -> Self {
        Self {
            user: None,
            is_loading: false,
            error: None,
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arranca_cargando_sin_usuario() {
        let store = SessionStore::default();
        assert!(store.is_loading);
        assert!(store.user.is_none());
        assert!(store.error.is_none());
    }

    #[test]
    fn logged_out_no_conserva_usuario() {
        let store = SessionStore::logged_out();
        assert!(!store.is_loading);
        assert!(store.user.is_none());
    }
}
