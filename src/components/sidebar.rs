use yew::prelude::*;

use crate::hooks::use_session_context;

use super::app::Screen;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub open: bool,
    pub current: Screen,
    pub on_navigate: Callback<Screen>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let session = use_session_context();
    let user = session.user();
    let is_admin = session.is_admin();

    let on_logout = {
        let logout = session.logout.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            on_navigate.emit(Screen::Home);
        })
    };

    html! {
        <aside class={classes!("sidebar", (!props.open).then_some("collapsed"))}>
            <nav class="sidebar-nav">
                { nav_item("Inicio", Screen::Home, props) }
                {
                    if user.is_some() {
                        html! {
                            <>
                                { nav_item("Dashboard", Screen::Dashboard, props) }
                                { nav_item("Mi cuenta", Screen::MyPage, props) }
                                // Solo para cuentas con rol ADMIN
                                {
                                    if is_admin {
                                        nav_item("Administración", Screen::Admin, props)
                                    } else {
                                        html! {}
                                    }
                                }
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </nav>

            <div class="sidebar-footer">
                {
                    if user.is_some() {
                        html! {
                            <button class="nav-link logout" onclick={on_logout}>
                                { label_for(props.open, "Cerrar sesión") }
                            </button>
                        }
                    } else {
                        nav_item("Iniciar sesión", Screen::Login, props)
                    }
                }
            </div>
        </aside>
    }
}

fn nav_item(label: &str, target: Screen, props: &SidebarProps) -> Html {
    let class = if props.current == target {
        "nav-link active"
    } else {
        "nav-link"
    };
    let onclick = props.on_navigate.reform(move |_: MouseEvent| target);

    html! {
        <button class={class} {onclick}>
            { label_for(props.open, label) }
        </button>
    }
}

fn label_for(open: bool, label: &str) -> String {
    if open {
        label.to_string()
    } else {
        // Colapsado: solo la inicial
        label.chars().next().map(String::from).unwrap_or_default()
    }
}
