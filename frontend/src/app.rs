use dioxus::prelude::*;
use pecunia_client_core::gateway;
use pecunia_client_core::models::{CompanyBankInfo, User};
use crate::screens::{AdminScreen, LoginScreen, SetupScreen};
use crate::session::{BankAccounts, CurrentUser};

#[derive(Clone, Copy, PartialEq)]
pub enum Route {
    Setup,
    Login,
    Admin,
}

#[component]
pub fn App() -> Element {
    let mut route = use_signal(|| Route::Login);
    let is_dark = use_signal(|| true);
    let current_user = use_context_provider(|| CurrentUser(Signal::new(Option::<User>::None)));
    use_context_provider(|| BankAccounts(Signal::new(Vec::<CompanyBankInfo>::new())));

    let current_screen = match route() {
        Route::Setup => rsx! {
            SetupScreen {
                is_dark: is_dark(),
                on_saved: move |_| route.set(Route::Login),
            }
        },
        Route::Login => rsx! {
            LoginScreen {
                is_dark: is_dark(),
                on_login_success: move |_| route.set(Route::Admin),
                on_go_setup: move |_| route.set(Route::Setup),
            }
        },
        Route::Admin => rsx! {
            AdminScreen {
                is_dark: is_dark(),
                on_logout: move |_| {
                    let mut user = current_user.0;
                    spawn(async move {
                        gateway::logout().await;
                        user.set(None);
                    });
                    route.set(Route::Login);
                },
            }
        },
    };

    rsx! {
        div { style: "font-family: system-ui, sans-serif;",
            {current_screen}
        }
    }
}
