use dioxus::prelude::*;
use pecunia_client_core::gateway;
use crate::session::CurrentUser;
use crate::theme::AppColors;
use crate::widgets::{GradientBackground, GradientCard};

#[component]
pub fn LoginScreen(
    is_dark: bool,
    on_login_success: EventHandler<()>,
    on_go_setup: EventHandler<()>,
) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let session = use_context::<CurrentUser>();

    let primary = AppColors::primary(is_dark);
    let on_primary = AppColors::on_primary(is_dark);
    let on_surface = AppColors::on_surface(is_dark);
    let error_color = AppColors::error(is_dark);

    rsx! {
        GradientBackground { is_dark,
            div { style: "padding: 48px 24px 16px; max-width: 400px; margin: 0 auto;",
                div { style: "text-align: center; margin-bottom: 24px;",
                    div { style: "font-size: 48px;", "🏦" }
                    h1 { style: "font-size: 1.5rem; font-weight: bold; color: {on_surface}; margin: 16px 0 8px;", "Pecunia Admin" }
                    p { style: "color: {on_surface}; opacity: 0.8; font-size: 0.9rem;", "Sign in to manage users and transactions" }
                }
                GradientCard { is_dark,
                    form {
                        onsubmit: move |ev| { ev.prevent_default(); },
                        div { style: "margin-bottom: 16px;",
                            label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "Email" }
                            input {
                                r#type: "text",
                                placeholder: "admin@example.com",
                                value: "{email()}",
                                oninput: move |ev| email.set(ev.value().clone()),
                                style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #8A9199; background: transparent; color: {on_surface}; box-sizing: border-box;",
                            }
                        }
                        div { style: "margin-bottom: 16px;",
                            label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "Password" }
                            input {
                                r#type: "password",
                                placeholder: "Password",
                                value: "{password()}",
                                oninput: move |ev| password.set(ev.value().clone()),
                                style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #8A9199; background: transparent; color: {on_surface}; box-sizing: border-box;",
                            }
                        }
                        if let Some(ref e) = error() {
                            p { style: "color: {error_color}; font-size: 0.875rem; margin-bottom: 12px;", "{e}" }
                        }
                        button {
                            r#type: "submit",
                            disabled: loading(),
                            onclick: move |_| {
                                loading.set(true);
                                error.set(None);
                                let identifier = email();
                                let pass = password();
                                let mut session_user = session.0;
                                spawn(async move {
                                    match gateway::login(&identifier, &pass).await {
                                        Ok(user) => {
                                            session_user.set(Some(user));
                                            loading.set(false);
                                            on_login_success.call(());
                                        }
                                        Err(e) => {
                                            loading.set(false);
                                            error.set(Some(e.to_string()));
                                        }
                                    }
                                });
                            },
                            style: "width: 100%; padding: 12px; border-radius: 8px; background: {primary}; color: {on_primary}; font-weight: 600; border: none; cursor: pointer;",
                            if loading() { "Signing in…" } else { "Sign in" }
                        }
                    }
                }
                button {
                    onclick: move |_| on_go_setup.call(()),
                    style: "margin-top: 16px; background: none; border: none; color: {primary}; cursor: pointer; font-size: 0.9rem;",
                    "Configure backend"
                }
            }
        }
    }
}
