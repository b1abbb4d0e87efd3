use dioxus::prelude::*;
use pecunia_client_core::gateway;
use pecunia_client_core::models::AdminNewUser;
use crate::theme::AppColors;
use crate::widgets::Modal;

#[component]
pub fn CreateUserModal(
    is_dark: bool,
    on_close: EventHandler<()>,
    on_created: EventHandler<()>,
) -> Element {
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut phone_number = use_signal(String::new);
    let mut balance = use_signal(String::new);
    let mut is_admin = use_signal(|| false);
    let mut is_verified = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let on_primary = AppColors::on_primary(is_dark);
    let error_color = AppColors::error(is_dark);

    let field_style = format!(
        "width: 100%; padding: 10px; border-radius: 8px; border: 1px solid #8A9199; background: transparent; color: {}; box-sizing: border-box;",
        on_surface
    );

    rsx! {
        Modal {
            is_dark,
            title: "Create user".to_string(),
            on_close: move |_| on_close.call(()),
            div { style: "margin-bottom: 12px;",
                label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "Full name" }
                input {
                    r#type: "text",
                    value: "{full_name()}",
                    oninput: move |ev| full_name.set(ev.value().clone()),
                    style: "{field_style}",
                }
            }
            div { style: "margin-bottom: 12px;",
                label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "Email" }
                input {
                    r#type: "text",
                    value: "{email()}",
                    oninput: move |ev| email.set(ev.value().clone()),
                    style: "{field_style}",
                }
            }
            div { style: "margin-bottom: 12px;",
                label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "Password" }
                input {
                    r#type: "password",
                    value: "{password()}",
                    oninput: move |ev| password.set(ev.value().clone()),
                    style: "{field_style}",
                }
            }
            div { style: "margin-bottom: 12px;",
                label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "Username" }
                input {
                    r#type: "text",
                    value: "{username()}",
                    oninput: move |ev| username.set(ev.value().clone()),
                    style: "{field_style}",
                }
            }
            div { style: "margin-bottom: 12px;",
                label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "Phone number" }
                input {
                    r#type: "text",
                    value: "{phone_number()}",
                    oninput: move |ev| phone_number.set(ev.value().clone()),
                    style: "{field_style}",
                }
            }
            div { style: "margin-bottom: 12px;",
                label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;", "Starting balance" }
                input {
                    r#type: "text",
                    placeholder: "0",
                    value: "{balance()}",
                    oninput: move |ev| balance.set(ev.value().clone()),
                    style: "{field_style}",
                }
            }
            div { style: "display: flex; gap: 16px; margin-bottom: 16px;",
                label { style: "color: {on_surface}; font-size: 0.875rem; display: flex; align-items: center; gap: 6px;",
                    input {
                        r#type: "checkbox",
                        checked: is_verified(),
                        oninput: move |_| is_verified.set(!is_verified()),
                    }
                    "Verified"
                }
                label { style: "color: {on_surface}; font-size: 0.875rem; display: flex; align-items: center; gap: 6px;",
                    input {
                        r#type: "checkbox",
                        checked: is_admin(),
                        oninput: move |_| is_admin.set(!is_admin()),
                    }
                    "Admin"
                }
            }
            if let Some(ref e) = error() {
                p { style: "color: {error_color}; font-size: 0.875rem; margin-bottom: 12px;", "{e}" }
            }
            div { style: "display: flex; gap: 12px; justify-content: flex-end;",
                button {
                    onclick: move |_| on_close.call(()),
                    style: "padding: 10px 20px; border-radius: 8px; border: 1px solid #8A9199; background: transparent; color: {on_surface}; cursor: pointer;",
                    "Cancel"
                }
                button {
                    disabled: saving(),
                    onclick: move |_| {
                        if full_name().trim().is_empty()
                            || email().trim().is_empty()
                            || password().trim().is_empty()
                        {
                            error.set(Some("Name, email and password are required.".to_string()));
                            return;
                        }
                        saving.set(true);
                        error.set(None);
                        let new_user = AdminNewUser {
                            email: email().trim().to_string(),
                            password: password(),
                            full_name: full_name().trim().to_string(),
                            username: username().trim().to_string(),
                            phone_number: phone_number().trim().to_string(),
                            is_admin: is_admin(),
                            is_verified: is_verified(),
                            balance: balance().trim().parse().unwrap_or(0.0),
                        };
                        spawn(async move {
                            match gateway::admin_create_user(&new_user).await {
                                Ok(_) => {
                                    saving.set(false);
                                    on_created.call(());
                                }
                                Err(_) => {
                                    saving.set(false);
                                    error.set(Some(
                                        "Could not create the user. The email might already be taken.".to_string(),
                                    ));
                                }
                            }
                        });
                    },
                    style: "padding: 10px 20px; border-radius: 8px; background: {primary}; color: {on_primary}; font-weight: 600; border: none; cursor: pointer;",
                    if saving() { "Creating…" } else { "Create" }
                }
            }
        }
    }
}
