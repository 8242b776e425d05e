use yew::prelude::*;

use crate::hooks::use_session_context;

use super::app::Screen;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_navigate: Callback<Screen>,
    pub on_toggle_sidebar: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let session = use_session_context();
    let user = session.user();

    let on_logout = {
        let logout = session.logout.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            on_navigate.emit(Screen::Home);
        })
    };

    html! {
        <header class="app-header">
            <div class="header-left">
                <button
                    class="btn-menu"
                    onclick={props.on_toggle_sidebar.reform(|_: MouseEvent| ())}
                >
                    { "☰" }
                </button>
                <button
                    class="header-brand"
                    onclick={props.on_navigate.reform(|_: MouseEvent| Screen::Home)}
                >
                    { "Noise Monitor" }
                </button>
            </div>

            <div class="header-right">
                {
                    if session.is_loading() {
                        html! { <span class="header-loading">{ "Cargando..." }</span> }
                    } else if let Some(user) = user {
                        html! {
                            <>
                                <button
                                    class="header-profile"
                                    onclick={props.on_navigate.reform(|_: MouseEvent| Screen::MyPage)}
                                >
                                    { &user.nick_name }
                                </button>
                                <button class="btn-logout" onclick={on_logout}>
                                    { "Cerrar sesión" }
                                </button>
                            </>
                        }
                    } else {
                        html! {
                            <button
                                class="header-login"
                                onclick={props.on_navigate.reform(|_: MouseEvent| Screen::Login)}
                            >
                                { "Iniciar sesión" }
                            </button>
                        }
                    }
                }
            </div>
        </header>
    }
}
