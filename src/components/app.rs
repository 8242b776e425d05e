use yew::prelude::*;

use crate::hooks::{use_session_context, SessionProvider};

use super::{
    AdminPage, DashboardPage, EditProfilePage, ErrorPanel, Header, HomePage, LoginPage, MyPage,
    Sidebar, SignupPage,
};

/// Vistas de la app. Sin router: la navegación es estado del shell,
/// igual que el cambio login/registro por estado
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    Home,
    Dashboard,
    MyPage,
    EditProfile,
    Admin,
    Login,
    Signup,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <AppShell />
        </SessionProvider>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let session = use_session_context();
    let screen = use_state(|| Screen::Home);
    let sidebar_open = use_state(|| true);

    let on_navigate = {
        let screen = screen.clone();
        Callback::from(move |next: Screen| screen.set(next))
    };

    let on_toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_| sidebar_open.set(!*sidebar_open))
    };

    // Un fallo al cargar el perfil bloquea el árbol completo
    if let Some(err) = session.error() {
        return html! { <ErrorPanel message={err.friendly_message()} /> };
    }

    match *screen {
        // Login y registro se muestran a pantalla completa, sin shell
        Screen::Login => html! { <LoginPage on_navigate={on_navigate} /> },
        Screen::Signup => html! { <SignupPage on_navigate={on_navigate} /> },
        current => html! {
            <div class="app-layout">
                <Header
                    on_navigate={on_navigate.clone()}
                    on_toggle_sidebar={on_toggle_sidebar}
                />
                <div class="app-body">
                    <Sidebar
                        open={*sidebar_open}
                        current={current}
                        on_navigate={on_navigate.clone()}
                    />
                    <main class="app-content">
                        {
                            match current {
                                Screen::Home => html! { <HomePage on_navigate={on_navigate} /> },
                                Screen::Dashboard => html! { <DashboardPage /> },
                                Screen::MyPage => html! { <MyPage on_navigate={on_navigate} /> },
                                Screen::EditProfile => html! { <EditProfilePage on_navigate={on_navigate} /> },
                                Screen::Admin => html! { <AdminPage on_navigate={on_navigate} /> },
                                Screen::Login | Screen::Signup => html! {},
                            }
                        }
                    </main>
                </div>
            </div>
        },
    }
}
