use dioxus::prelude::*;
use pecunia_client_core::gateway;
use pecunia_client_core::models::{User, UserUpdate};
use crate::moderation::format_money;
use crate::screens::{BalanceModal, CreateUserModal};
use crate::theme::AppColors;
use crate::widgets::{Badge, GradientCard};

#[component]
pub fn UsersTab(is_dark: bool, users: Vec<User>, on_reload: EventHandler<()>) -> Element {
    let mut balance_target = use_signal(|| Option::<User>::None);
    let mut show_create = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let on_primary = AppColors::on_primary(is_dark);
    let success_color = AppColors::success(is_dark);
    let error_color = AppColors::error(is_dark);

    rsx! {
        div { style: "padding: 24px;",
            div { style: "display: flex; align-items: center; margin-bottom: 16px;",
                h1 { style: "color: {on_surface}; margin: 0;", "Users" }
                div { style: "flex: 1;" }
                button {
                    onclick: move |_| show_create.set(true),
                    style: "padding: 8px 16px; border-radius: 8px; background: {primary}; color: {on_primary}; font-weight: 600; border: none; cursor: pointer;",
                    "Create User"
                }
            }
            if let Some(ref e) = error() {
                p { style: "color: {error_color}; font-size: 0.875rem; margin-bottom: 12px;", "{e}" }
            }
            if users.is_empty() {
                GradientCard { is_dark,
                    p { style: "color: {on_surface}; opacity: 0.8;", "No users yet." }
                }
            } else {
                GradientCard { is_dark,
                    table { style: "width: 100%; border-collapse: collapse; color: {on_surface};",
                        thead {
                            tr {
                                th { style: "text-align: left; padding: 8px; border-bottom: 1px solid #43474E;", "Name" }
                                th { style: "text-align: left; padding: 8px; border-bottom: 1px solid #43474E;", "Email" }
                                th { style: "text-align: left; padding: 8px; border-bottom: 1px solid #43474E;", "Flags" }
                                th { style: "text-align: right; padding: 8px; border-bottom: 1px solid #43474E;", "Balance" }
                                th { style: "text-align: right; padding: 8px; border-bottom: 1px solid #43474E;", "Actions" }
                            }
                        }
                        tbody {
                            for user in users.clone() {
                                tr { key: "{user.id}",
                                    td { style: "padding: 8px; border-bottom: 1px solid rgba(67,71,78,0.4);",
                                        div { "{user.full_name}" }
                                        div { style: "opacity: 0.6; font-size: 0.8rem;", "{user.username}" }
                                    }
                                    td { style: "padding: 8px; border-bottom: 1px solid rgba(67,71,78,0.4);", "{user.email}" }
                                    td { style: "padding: 8px; border-bottom: 1px solid rgba(67,71,78,0.4);",
                                        if user.is_verified {
                                            Badge { label: "Verified", color: success_color.to_string() }
                                        } else {
                                            Badge { label: "Unverified", color: "#8A9199".to_string() }
                                        }
                                        if user.is_admin {
                                            Badge { label: "Admin", color: "#7C5CD6".to_string() }
                                        }
                                    }
                                    td { style: "padding: 8px; border-bottom: 1px solid rgba(67,71,78,0.4); text-align: right;",
                                        "{format_money(user.balance)}"
                                    }
                                    td { style: "padding: 8px; border-bottom: 1px solid rgba(67,71,78,0.4); text-align: right; white-space: nowrap;",
                                        {
                                            let modal_user = user.clone();
                                            rsx! {
                                                button {
                                                    onclick: move |_| balance_target.set(Some(modal_user.clone())),
                                                    style: "padding: 6px 12px; margin-right: 8px; border-radius: 8px; border: 1px solid {primary}; background: transparent; color: {primary}; cursor: pointer;",
                                                    "Edit Balance"
                                                }
                                            }
                                        }
                                        {
                                            let toggle_id = user.id.clone();
                                            let verified = user.is_verified;
                                            rsx! {
                                                button {
                                                    onclick: move |_| {
                                                        let update = UserUpdate {
                                                            id: toggle_id.clone(),
                                                            is_verified: Some(!verified),
                                                            ..Default::default()
                                                        };
                                                        spawn(async move {
                                                            match gateway::update_user_info(&update).await {
                                                                Ok(()) => on_reload.call(()),
                                                                Err(e) => error.set(Some(e.to_string())),
                                                            }
                                                        });
                                                    },
                                                    style: "padding: 6px 12px; border-radius: 8px; border: 1px solid #8A9199; background: transparent; color: {on_surface}; cursor: pointer;",
                                                    if verified { "Deactivate" } else { "Activate" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(target) = balance_target() {
                BalanceModal {
                    is_dark,
                    user: target,
                    on_close: move |_| balance_target.set(None),
                    on_saved: move |_| {
                        balance_target.set(None);
                        on_reload.call(());
                    },
                }
            }
            if show_create() {
                CreateUserModal {
                    is_dark,
                    on_close: move |_| show_create.set(false),
                    on_created: move |_| {
                        show_create.set(false);
                        on_reload.call(());
                    },
                }
            }
        }
    }
}
