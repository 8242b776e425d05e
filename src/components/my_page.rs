use web_sys::window;
use yew::prelude::*;

use crate::hooks::use_session_context;
use crate::services::user_service::{self, NoticeUpdate};
use crate::utils::OptimisticUpdate;

use super::app::Screen;
use super::{ErrorPanel, InfoItem, LoadingPanel, NoAccessPanel, ToggleItem};

#[derive(Properties, PartialEq)]
pub struct MyPageProps {
    pub on_navigate: Callback<Screen>,
}

#[function_component(MyPage)]
pub fn my_page(props: &MyPageProps) -> Html {
    let session = use_session_context();
    let user = session.user();

    // Toggle de alertas: update optimista, confirmación PATCH, revert si falla
    let on_notice_toggle = {
        let session = session.clone();
        Callback::from(move |_| {
            let Some(current) = session.user() else {
                return;
            };

            let new_setting = !current.notice_set;
            let mut optimistic = current.clone();
            optimistic.notice_set = new_setting;

            let apply = {
                let set_user = session.set_user.clone();
                move |user| set_user.emit(Some(user))
            };
            let guard = OptimisticUpdate::apply(current, optimistic.clone(), apply);

            let set_user = session.set_user.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match user_service::update_notice(new_setting).await {
                    // El servidor puede devolver el usuario completo o solo el flag
                    Ok(NoticeUpdate::FullUser(user)) => {
                        guard.commit();
                        set_user.emit(Some(user));
                    }
                    Ok(NoticeUpdate::NoticeOnly(notice_set)) => {
                        guard.commit();
                        let mut merged = optimistic;
                        merged.notice_set = notice_set;
                        set_user.emit(Some(merged));
                    }
                    Ok(NoticeUpdate::Unchanged) => guard.commit(),
                    Err(err) => {
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&format!(
                                "No se pudo cambiar la configuración: {}",
                                err.friendly_message()
                            ));
                        }
                        guard.revert();
                    }
                }
            });
        })
    };

    // Eliminación de cuenta: confirmar, DELETE, y logout local
    let on_delete_account = {
        let logout = session.logout.clone();
        let on_navigate = props.on_navigate.clone();

        Callback::from(move |_: MouseEvent| {
            let confirmed = window()
                .map(|win| {
                    win.confirm_with_message(
                        "¿Seguro que quieres eliminar tu cuenta?\nUna cuenta eliminada no se puede recuperar.",
                    )
                    .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let logout = logout.clone();
            let on_navigate = on_navigate.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match user_service::delete_account().await {
                    Ok(()) => {
                        if let Some(win) = window() {
                            let _ = win.alert_with_message("La cuenta fue eliminada.");
                        }
                        logout.emit(());
                        on_navigate.emit(Screen::Home);
                    }
                    Err(err) => {
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&err.friendly_message());
                        }
                    }
                }
            });
        })
    };

    // ------------------- Gates de sesión ------------------------
    if session.is_loading() {
        return html! { <LoadingPanel message="Cargando tus datos..." /> };
    }
    let Some(user) = user else {
        return html! { <NoAccessPanel /> };
    };
    if let Some(err) = session.error() {
        return html! { <ErrorPanel message={err.friendly_message()} /> };
    }

    html! {
        <div class="page my-page">
            <section class="page-header">
                <h1>{ "Mi cuenta" }</h1>
                <p>{ format!("Gestión de la cuenta de {}.", user.nick_name) }</p>
            </section>

            <section class="panel-grid">
                <div class="panel">
                    <h2>{ "Información de la cuenta" }</h2>
                    <InfoItem label="Nombre" value={user.nick_name.clone()} />
                    <InfoItem label="Email" value={user.email.clone()} />
                    <InfoItem
                        label="Rol"
                        value={if user.role.is_empty() { "USER".to_string() } else { user.role.clone() }}
                    />
                    <div class="panel-actions">
                        <button
                            class="btn-primary"
                            onclick={props.on_navigate.reform(|_: MouseEvent| Screen::EditProfile)}
                        >
                            { "Editar datos" }
                        </button>
                    </div>
                </div>

                <div class="panel">
                    <h2>{ "Preferencias" }</h2>
                    <ToggleItem
                        label="Alertas de ruido"
                        description="Notificar cuando una lectura supere el umbral"
                        enabled={user.notice_set}
                        on_toggle={on_notice_toggle}
                    />
                </div>
            </section>

            <section class="panel danger-zone">
                <div>
                    <h3>{ "Eliminar cuenta" }</h3>
                    <p>{ "Al eliminar la cuenta se borran todos los datos de forma permanente." }</p>
                </div>
                <button class="btn-danger" onclick={on_delete_account}>
                    { "Eliminar cuenta" }
                </button>
            </section>
        </div>
    }
}
