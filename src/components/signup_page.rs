use web_sys::window;
use yew::prelude::*;

use crate::models::SignupRequest;
use crate::services::auth_service;
use crate::utils::storage;

use super::app::Screen;
use super::FormInput;

#[derive(Properties, PartialEq)]
pub struct SignupPageProps {
    pub on_navigate: Callback<Screen>,
}

#[function_component(SignupPage)]
pub fn signup_page(props: &SignupPageProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let nick_name = use_state(String::new);
    let serial_num = use_state(String::new);
    let error_msg = use_state(String::new);

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let nick_name = nick_name.clone();
        let serial_num = serial_num.clone();
        let error_msg = error_msg.clone();
        let on_navigate = props.on_navigate.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error_msg.set(String::new());

            if email.is_empty() || password.is_empty() || nick_name.is_empty()
                || serial_num.is_empty()
            {
                error_msg.set("Completa todos los campos.".to_string());
                return;
            }

            let request = SignupRequest {
                email: (*email).clone(),
                password: (*password).clone(),
                nick_name: (*nick_name).clone(),
                serial_num: (*serial_num).clone(),
            };

            let error_msg = error_msg.clone();
            let on_navigate = on_navigate.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::signup(&request).await {
                    Ok(tokens) => {
                        if let Err(e) = storage::save_tokens(&tokens) {
                            log::error!("❌ Error guardando tokens: {}", e);
                        }
                        if let Some(win) = window() {
                            let _ = win
                                .alert_with_message("✅ Registro exitoso. Ahora inicia sesión.");
                        }
                        on_navigate.emit(Screen::Login);
                    }
                    Err(err) => {
                        log::error!("❌ Error en registro: {}", err);
                        error_msg.set(err.friendly_message());
                    }
                }
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <h1>{ "Monitoreo de ruido en tiempo real" }</h1>
                <h2>{ "Crear cuenta" }</h2>

                <form class="auth-form" onsubmit={on_submit}>
                    <FormInput
                        label="Email"
                        id="signup-email"
                        input_type="email"
                        value={(*email).clone()}
                        on_change={Callback::from({
                            let email = email.clone();
                            move |v| email.set(v)
                        })}
                    />
                    <FormInput
                        label="Contraseña"
                        id="signup-password"
                        input_type="password"
                        value={(*password).clone()}
                        on_change={Callback::from({
                            let password = password.clone();
                            move |v| password.set(v)
                        })}
                    />
                    <FormInput
                        label="Apodo"
                        id="signup-nickname"
                        value={(*nick_name).clone()}
                        on_change={Callback::from({
                            let nick_name = nick_name.clone();
                            move |v| nick_name.set(v)
                        })}
                    />
                    <FormInput
                        label="SerialNum del sensor"
                        id="signup-serial"
                        value={(*serial_num).clone()}
                        on_change={Callback::from({
                            let serial_num = serial_num.clone();
                            move |v| serial_num.set(v)
                        })}
                    />

                    if !error_msg.is_empty() {
                        <div class="form-error">{ (*error_msg).clone() }</div>
                    }

                    <button type="submit" class="btn-primary">
                        { "Registrarme" }
                    </button>
                </form>

                <button
                    class="auth-link"
                    onclick={props.on_navigate.reform(|_: MouseEvent| Screen::Login)}
                >
                    { "¿Ya tienes cuenta? Inicia sesión" }
                </button>
            </div>
        </div>
    }
}
