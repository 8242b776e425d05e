use web_sys::window;
use yew::prelude::*;

use crate::hooks::use_session_context;
use crate::services::user_service::{self, ProfileUpdate};

use super::app::Screen;
use super::{FormInput, LoadingPanel, RedirectingPanel};

#[derive(Properties, PartialEq)]
pub struct EditProfilePageProps {
    pub on_navigate: Callback<Screen>,
}

#[function_component(EditProfilePage)]
pub fn edit_profile_page(props: &EditProfilePageProps) -> Html {
    let session = use_session_context();
    let user = session.user();

    let nick_name = use_state(String::new);
    let password = use_state(String::new);
    let error_msg = use_state(String::new);
    let is_submitting = use_state(|| false);

    // Precargar el formulario con los datos actuales
    {
        let nick_name = nick_name.clone();
        use_effect_with(user.clone(), move |user| {
            if let Some(user) = user {
                nick_name.set(user.nick_name.clone());
            }
            || ()
        });
    }

    // Sin sesión no hay nada que editar: volver al inicio
    {
        let on_navigate = props.on_navigate.clone();
        let logged_out = !session.is_loading() && user.is_none();
        use_effect_with(logged_out, move |logged_out| {
            if *logged_out {
                on_navigate.emit(Screen::Home);
            }
            || ()
        });
    }

    let on_submit = {
        let session = session.clone();
        let nick_name = nick_name.clone();
        let password = password.clone();
        let error_msg = error_msg.clone();
        let is_submitting = is_submitting.clone();
        let on_navigate = props.on_navigate.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(user) = session.user() else {
                return;
            };
            if *is_submitting {
                return;
            }

            let nickname_changed = *nick_name != user.nick_name;
            let password_changed = !password.trim().is_empty();

            if nickname_changed && nick_name.trim().is_empty() {
                error_msg.set("El apodo debe tener al menos 1 carácter.".to_string());
                return;
            }

            if !nickname_changed && !password_changed {
                if let Some(win) = window() {
                    let _ = win.alert_with_message("No hay cambios para guardar.");
                }
                return;
            }

            let update = ProfileUpdate {
                nick_name: nickname_changed.then(|| nick_name.trim().to_string()),
                password: password_changed.then(|| password.trim().to_string()),
            };

            let set_user = session.set_user.clone();
            let error_msg = error_msg.clone();
            let is_submitting = is_submitting.clone();
            let on_navigate = on_navigate.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_submitting.set(true);
                error_msg.set(String::new());

                match user_service::update_profile(&update).await {
                    Ok(Some(updated)) => {
                        set_user.emit(Some(updated));
                        if let Some(win) = window() {
                            let _ = win.alert_with_message("Perfil actualizado correctamente.");
                        }
                        on_navigate.emit(Screen::MyPage);
                    }
                    Ok(None) => {
                        // El servidor no devolvió el usuario: re-consultar el perfil
                        match user_service::fetch_my_profile().await {
                            Ok(refreshed) => set_user.emit(Some(refreshed)),
                            Err(err) => log::error!("❌ Error re-consultando perfil: {}", err),
                        }
                        if let Some(win) = window() {
                            let _ = win.alert_with_message("Perfil actualizado correctamente.");
                        }
                        on_navigate.emit(Screen::MyPage);
                    }
                    Err(err) => {
                        error_msg.set(err.friendly_message());
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    if session.is_loading() {
        return html! { <LoadingPanel message="Cargando tus datos..." /> };
    }
    if user.is_none() {
        return html! { <RedirectingPanel message="Redirigiendo al inicio..." /> };
    }

    html! {
        <div class="page edit-profile-page">
            <section class="page-header">
                <button
                    class="back-link"
                    onclick={props.on_navigate.reform(|_: MouseEvent| Screen::MyPage)}
                >
                    { "← Volver a mi cuenta" }
                </button>
                <h1>{ "Editar datos" }</h1>
                <p>{ "Actualiza el apodo o la contraseña de tu cuenta." }</p>
            </section>

            <section class="panel">
                <form class="edit-form" onsubmit={on_submit}>
                    <FormInput
                        label="Apodo"
                        id="edit-nickname"
                        value={(*nick_name).clone()}
                        on_change={Callback::from({
                            let nick_name = nick_name.clone();
                            move |v| nick_name.set(v)
                        })}
                        disabled={*is_submitting}
                    />
                    <FormInput
                        label="Contraseña nueva (opcional)"
                        id="edit-password"
                        input_type="password"
                        value={(*password).clone()}
                        on_change={Callback::from({
                            let password = password.clone();
                            move |v| password.set(v)
                        })}
                        disabled={*is_submitting}
                    />

                    if !error_msg.is_empty() {
                        <div class="form-error">{ (*error_msg).clone() }</div>
                    }

                    <button type="submit" class="btn-primary" disabled={*is_submitting}>
                        { if *is_submitting { "Guardando..." } else { "Guardar cambios" } }
                    </button>
                </form>
            </section>
        </div>
    }
}
