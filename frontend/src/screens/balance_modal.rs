use dioxus::prelude::*;
use pecunia_client_core::gateway;
use pecunia_client_core::models::User;
use crate::moderation::{format_money, resolve_balance_edit, BalanceEditMode};
use crate::theme::AppColors;
use crate::widgets::Modal;

#[component]
pub fn BalanceModal(
    is_dark: bool,
    user: User,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let mut mode = use_signal(|| BalanceEditMode::Add);
    let mut amount = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let on_primary = AppColors::on_primary(is_dark);
    let error_color = AppColors::error(is_dark);

    let user_id = user.id.clone();
    let current_balance = user.balance;

    let transparent = "transparent";
    let bg_add = if mode() == BalanceEditMode::Add { primary } else { transparent };
    let fg_add = if mode() == BalanceEditMode::Add { on_primary } else { on_surface };
    let bg_set = if mode() == BalanceEditMode::Set { primary } else { transparent };
    let fg_set = if mode() == BalanceEditMode::Set { on_primary } else { on_surface };

    rsx! {
        Modal {
            is_dark,
            title: format!("Edit balance: {}", user.email),
            on_close: move |_| on_close.call(()),
            p { style: "color: {on_surface}; margin-bottom: 16px;",
                "Current balance: {format_money(current_balance)}"
            }
            div { style: "display: flex; gap: 8px; margin-bottom: 16px;",
                button {
                    onclick: move |_| mode.set(BalanceEditMode::Add),
                    style: "padding: 8px 16px; border-radius: 8px; border: 1px solid {primary}; background: {bg_add}; color: {fg_add}; cursor: pointer;",
                    "Add amount"
                }
                button {
                    onclick: move |_| mode.set(BalanceEditMode::Set),
                    style: "padding: 8px 16px; border-radius: 8px; border: 1px solid {primary}; background: {bg_set}; color: {fg_set}; cursor: pointer;",
                    "Set balance"
                }
            }
            div { style: "margin-bottom: 16px;",
                label { style: "display: block; margin-bottom: 4px; color: {on_surface}; font-size: 0.875rem;",
                    if mode() == BalanceEditMode::Add { "Amount to add" } else { "New balance" }
                }
                input {
                    r#type: "text",
                    placeholder: "0.00",
                    value: "{amount()}",
                    oninput: move |ev| amount.set(ev.value().clone()),
                    style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #8A9199; background: transparent; color: {on_surface}; box-sizing: border-box;",
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
                        match resolve_balance_edit(mode(), current_balance, &amount()) {
                            Err(msg) => error.set(Some(msg)),
                            Ok(new_balance) => {
                                saving.set(true);
                                error.set(None);
                                let user_id = user_id.clone();
                                spawn(async move {
                                    match gateway::update_user_balance(&user_id, new_balance).await {
                                        Ok(()) => {
                                            saving.set(false);
                                            on_saved.call(());
                                        }
                                        Err(e) => {
                                            saving.set(false);
                                            error.set(Some(e.to_string()));
                                        }
                                    }
                                });
                            }
                        }
                    },
                    style: "padding: 10px 20px; border-radius: 8px; background: {primary}; color: {on_primary}; font-weight: 600; border: none; cursor: pointer;",
                    if saving() { "Saving…" } else { "Save" }
                }
            }
        }
    }
}
