use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::use_session_context;
use crate::services::auth_service;

use super::app::Screen;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub on_navigate: Callback<Screen>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let session = use_session_context();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error_msg = use_state(String::new);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error_msg = error_msg.clone();
        let login_success = session.login_success.clone();
        let on_navigate = props.on_navigate.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_msg.set(String::new());

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value();
                let password = password_input.value();

                let error_msg = error_msg.clone();
                let login_success = login_success.clone();
                let on_navigate = on_navigate.clone();

                wasm_bindgen_futures::spawn_local(async move {
                    match auth_service::login(&email, &password).await {
                        Ok(tokens) => {
                            // Persistir tokens y refrescar el perfil pasa por la sesión
                            login_success.emit(tokens);
                            if let Some(win) = window() {
                                let _ = win.alert_with_message("✅ Sesión iniciada");
                            }
                            on_navigate.emit(Screen::Home);
                        }
                        Err(err) => {
                            log::error!("❌ Error en login: {}", err);
                            error_msg.set(err.friendly_message());
                        }
                    }
                });
            }
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <h1>{ "Monitoreo de ruido en tiempo real" }</h1>

                <form class="auth-form" onsubmit={on_submit}>
                    <input
                        type="text"
                        placeholder="Email"
                        ref={email_ref}
                    />
                    <input
                        type="password"
                        placeholder="Contraseña"
                        ref={password_ref}
                    />

                    if !error_msg.is_empty() {
                        <div class="form-error">{ (*error_msg).clone() }</div>
                    }

                    <button type="submit" class="btn-primary">
                        { "Iniciar sesión" }
                    </button>
                </form>

                <button
                    class="auth-link"
                    onclick={props.on_navigate.reform(|_: MouseEvent| Screen::Signup)}
                >
                    { "¿Todavía no tienes cuenta? Regístrate" }
                </button>
            </div>
        </div>
    }
}
