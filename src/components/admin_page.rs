use web_sys::window;
use yew::prelude::*;

use crate::hooks::use_session_context;
use crate::models::{Pagination, UserProfile};
use crate::services::admin_service;

use super::app::Screen;
use super::{FormInput, RedirectingPanel};

const USERS_PER_PAGE: u32 = 10;

#[derive(Properties, PartialEq)]
pub struct AdminPageProps {
    pub on_navigate: Callback<Screen>,
}

#[function_component(AdminPage)]
pub fn admin_page(props: &AdminPageProps) -> Html {
    let session = use_session_context();
    let user = session.user();
    let is_admin = session.is_admin();

    let users = use_state(Vec::<UserProfile>::new);
    let list_loading = use_state(|| false);
    let error_msg = use_state(|| None::<String>);
    let current_page = use_state(|| 1u32);
    let pagination = use_state(|| Pagination::empty(USERS_PER_PAGE));
    let email_search = use_state(String::new);

    // Cuentas sin permisos vuelven al inicio
    {
        let on_navigate = props.on_navigate.clone();
        let should_redirect = !session.is_loading() && (user.is_none() || !is_admin);
        use_effect_with(should_redirect, move |should_redirect| {
            if *should_redirect {
                on_navigate.emit(Screen::Home);
            }
            || ()
        });
    }

    // Cargar una página del listado completo
    let load_users = {
        let users = users.clone();
        let list_loading = list_loading.clone();
        let error_msg = error_msg.clone();
        let current_page = current_page.clone();
        let pagination = pagination.clone();

        Callback::from(move |page: u32| {
            let users = users.clone();
            let list_loading = list_loading.clone();
            let error_msg = error_msg.clone();
            let current_page = current_page.clone();
            let pagination = pagination.clone();

            wasm_bindgen_futures::spawn_local(async move {
                list_loading.set(true);
                error_msg.set(None);

                match admin_service::fetch_users(page, USERS_PER_PAGE).await {
                    Ok((fetched, server_block)) => {
                        // Sin bloque del servidor, se recalcula con el largo de la página
                        let block = server_block.unwrap_or_else(|| {
                            Pagination::from_page_len(page, USERS_PER_PAGE, fetched.len())
                        });
                        current_page.set(block.page);
                        pagination.set(block);
                        users.set(fetched);
                    }
                    Err(err) => {
                        users.set(Vec::new());
                        pagination.set(Pagination::empty(USERS_PER_PAGE));
                        error_msg.set(Some(err.friendly_message()));
                    }
                }

                list_loading.set(false);
            });
        })
    };

    // Primer fetch y cambios de página
    {
        let load_users = load_users.clone();
        use_effect_with((is_admin, *current_page), move |(is_admin, page)| {
            if *is_admin {
                load_users.emit(*page);
            }
            || ()
        });
    }

    // Búsqueda exacta por email. No toca current_page: el resultado de la
    // búsqueda no debe ser pisado por el fetch del listado
    let on_email_search = {
        let email_search = email_search.clone();
        let users = users.clone();
        let list_loading = list_loading.clone();
        let error_msg = error_msg.clone();
        let pagination = pagination.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email = email_search.trim().to_string();
            if !is_email(&email) {
                error_msg.set(Some("El formato de email no es válido.".to_string()));
                return;
            }

            let users = users.clone();
            let list_loading = list_loading.clone();
            let error_msg = error_msg.clone();
            let pagination = pagination.clone();

            wasm_bindgen_futures::spawn_local(async move {
                list_loading.set(true);
                error_msg.set(None);

                match admin_service::fetch_user_by_email(&email).await {
                    Ok(Some(found)) => {
                        users.set(vec![found]);
                        pagination.set(Pagination::from_page_len(1, USERS_PER_PAGE, 1));
                    }
                    Ok(None) => {
                        users.set(Vec::new());
                        pagination.set(Pagination::empty(USERS_PER_PAGE));
                    }
                    Err(err) => {
                        users.set(Vec::new());
                        error_msg.set(Some(err.friendly_message()));
                    }
                }

                list_loading.set(false);
            });
        })
    };

    // Promover/degradar una cuenta, con confirmación
    let on_role_change = {
        let users = users.clone();
        let my_email = user.as_ref().map(|u| u.email.clone()).unwrap_or_default();

        Callback::from(move |(target_email, current_role): (String, String)| {
            // El propio rol no se puede cambiar
            if target_email == my_email {
                if let Some(win) = window() {
                    let _ = win.alert_with_message("No puedes cambiar tu propio rol.");
                }
                return;
            }

            let new_role = if current_role.eq_ignore_ascii_case("ADMIN") {
                "USER"
            } else {
                "ADMIN"
            };

            let confirmed = window()
                .map(|win| {
                    win.confirm_with_message(&format!(
                        "¿Cambiar el rol de {} a {}?",
                        target_email, new_role
                    ))
                    .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let users = users.clone();
            let new_role = new_role.to_string();

            wasm_bindgen_futures::spawn_local(async move {
                match admin_service::change_role(&target_email, &new_role).await {
                    Ok(()) => {
                        // Actualizar la fila localmente, sin refetch
                        let updated: Vec<UserProfile> = users
                            .iter()
                            .map(|u| {
                                if u.email == target_email {
                                    let mut changed = u.clone();
                                    changed.role = new_role.clone();
                                    changed
                                } else {
                                    u.clone()
                                }
                            })
                            .collect();
                        users.set(updated);

                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&format!(
                                "El rol de {} ahora es {}.",
                                target_email, new_role
                            ));
                        }
                    }
                    Err(err) => {
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&format!(
                                "No se pudo cambiar el rol: {}",
                                err.friendly_message()
                            ));
                        }
                    }
                }
            });
        })
    };

    let on_prev_page = {
        let current_page = current_page.clone();
        let pagination = pagination.clone();
        Callback::from(move |_: MouseEvent| {
            let page = pagination.page;
            if page > 1 {
                current_page.set(page - 1);
            }
        })
    };

    let on_next_page = {
        let current_page = current_page.clone();
        let pagination = pagination.clone();
        Callback::from(move |_: MouseEvent| {
            let page = pagination.page;
            if page < pagination.total_pages {
                current_page.set(page + 1);
            }
        })
    };

    let on_show_all = {
        let load_users = load_users.clone();
        let current_page = current_page.clone();
        Callback::from(move |_: MouseEvent| {
            current_page.set(1);
            load_users.emit(1);
        })
    };

    // ------------------- Gates de acceso ------------------------
    if session.is_loading() || user.is_none() || !is_admin {
        let message = if session.is_loading() {
            "Verificando usuario..."
        } else if user.is_none() {
            "Verificando sesión..."
        } else {
            "Verificando permisos... (volviendo al inicio)"
        };
        return html! { <RedirectingPanel message={message.to_string()} /> };
    }

    let my_email = user.as_ref().map(|u| u.email.clone()).unwrap_or_default();

    html! {
        <div class="page admin-page">
            <header class="page-header">
                <h1>{ "Panel de administración" }</h1>
            </header>

            <section class="panel">
                <h2>{ "Búsqueda y gestión de usuarios" }</h2>

                <div class="admin-toolbar">
                    <form class="search-form" onsubmit={on_email_search}>
                        <FormInput
                            label="Email (búsqueda exacta)"
                            id="admin-email-search"
                            value={(*email_search).clone()}
                            on_change={Callback::from({
                                let email_search = email_search.clone();
                                move |v| email_search.set(v)
                            })}
                        />
                        <button type="submit" class="btn-primary">
                            { "Buscar por email" }
                        </button>
                    </form>

                    <button class="btn-secondary" onclick={on_show_all}>
                        { "Ver todos los usuarios" }
                    </button>
                </div>

                if let Some(message) = (*error_msg).clone() {
                    <div class="form-error">
                        <strong>{ "Error: " }</strong>{ message }
                    </div>
                }

                if *list_loading {
                    <RedirectingPanel message="Cargando usuarios..." />
                } else if users.is_empty() {
                    <div class="empty-list">
                        { "No se encontraron usuarios." }
                    </div>
                } else {
                    <>
                        <table class="user-table">
                            <thead>
                                <tr>
                                    <th>{ "Email" }</th>
                                    <th>{ "Apodo" }</th>
                                    <th>{ "Rol" }</th>
                                    <th>{ "Acciones" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    for users.iter().map(|u| {
                                        let is_me = u.email == my_email;
                                        let onclick = {
                                            let on_role_change = on_role_change.clone();
                                            let email = u.email.clone();
                                            let role = u.role.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                on_role_change.emit((email.clone(), role.clone()));
                                            })
                                        };

                                        html! {
                                            <tr key={u.email.clone()}>
                                                <td>{ &u.email }</td>
                                                <td>{ &u.nick_name }</td>
                                                <td>
                                                    <span class={classes!("role-badge", u.is_admin().then_some("admin"))}>
                                                        { &u.role }
                                                    </span>
                                                </td>
                                                <td>
                                                    <button
                                                        class="btn-role"
                                                        disabled={is_me}
                                                        {onclick}
                                                    >
                                                        {
                                                            if u.is_admin() {
                                                                "Degradar a USER"
                                                            } else {
                                                                "Promover a ADMIN"
                                                            }
                                                        }
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                }
                            </tbody>
                        </table>

                        <div class="pagination">
                            <button
                                onclick={on_prev_page}
                                disabled={pagination.page <= 1 || *list_loading}
                            >
                                { "Anterior" }
                            </button>
                            <span>{ format!("{} / {}", pagination.page, pagination.total_pages) }</span>
                            <button
                                onclick={on_next_page}
                                disabled={pagination.page >= pagination.total_pages || *list_loading}
                            >
                                { "Siguiente" }
                            </button>
                        </div>
                    </>
                }
            </section>
        </div>
    }
}

/// Validación mínima de formato de email antes de consultar al backend
fn is_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !local.contains(char::is_whitespace)
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains(char::is_whitespace)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_email;

    #[test]
    fn emails_validos() {
        assert!(is_email("ana@example.com"));
        assert!(is_email("a.b+c@sub.dominio.org"));
    }

    #[test]
    fn emails_invalidos() {
        assert!(!is_email(""));
        assert!(!is_email("sin-arroba"));
        assert!(!is_email("dos@@arrobas.com"));
        assert!(!is_email("espacio en@medio.com"));
        assert!(!is_email("punta@.com"));
        assert!(!is_email("final@com."));
    }
}
