use dioxus::prelude::*;
use pecunia_client_core::models::CompanyBankInfo;
use pecunia_client_core::transactions as moderation_api;
use crate::session::BankAccounts;
use crate::theme::AppColors;
use crate::widgets::GradientCard;

/// Edits a local copy of the bank-account list; nothing is persisted until
/// "Save All Changes" writes the whole list back.
#[component]
pub fn SettingsTab(is_dark: bool) -> Element {
    let shared = use_context::<BankAccounts>();
    let mut accounts = use_signal(|| shared.0.peek().clone());
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let on_primary = AppColors::on_primary(is_dark);
    let error_color = AppColors::error(is_dark);
    let success_color = AppColors::success(is_dark);

    let field_style = format!(
        "flex: 1; padding: 10px; border-radius: 8px; border: 1px solid #8A9199; background: transparent; color: {}; box-sizing: border-box;",
        on_surface
    );

    rsx! {
        div { style: "padding: 24px; max-width: 720px;",
            h1 { style: "color: {on_surface}; margin-bottom: 8px;", "Company bank accounts" }
            p { style: "color: {on_surface}; opacity: 0.8; margin-bottom: 16px; font-size: 0.9rem;",
                "Accounts shown to users for deposits. Changes stay local until saved."
            }
            if accounts().is_empty() {
                GradientCard { is_dark,
                    p { style: "color: {on_surface}; opacity: 0.8;", "No bank accounts configured." }
                }
            }
            for (i, account) in accounts().into_iter().enumerate() {
                GradientCard { is_dark,
                    div { style: "display: flex; gap: 12px; align-items: center;",
                        input {
                            r#type: "text",
                            placeholder: "Bank name",
                            value: "{account.bank_name}",
                            oninput: move |ev| {
                                accounts.with_mut(|list| list[i].bank_name = ev.value().clone());
                            },
                            style: "{field_style}",
                        }
                        input {
                            r#type: "text",
                            placeholder: "Account number",
                            value: "{account.account_number}",
                            oninput: move |ev| {
                                accounts.with_mut(|list| list[i].account_number = ev.value().clone());
                            },
                            style: "{field_style}",
                        }
                        input {
                            r#type: "text",
                            placeholder: "Account holder",
                            value: "{account.account_holder}",
                            oninput: move |ev| {
                                accounts.with_mut(|list| list[i].account_holder = ev.value().clone());
                            },
                            style: "{field_style}",
                        }
                        button {
                            onclick: move |_| {
                                accounts.with_mut(|list| {
                                    list.remove(i);
                                });
                            },
                            style: "padding: 8px 12px; border-radius: 8px; border: 1px solid {error_color}; background: transparent; color: {error_color}; cursor: pointer;",
                            "Remove"
                        }
                    }
                }
            }
            if let Some(ref e) = error() {
                p { style: "color: {error_color}; font-size: 0.875rem; margin: 12px 8px;", "{e}" }
            }
            if let Some(ref s) = success() {
                p { style: "color: {success_color}; font-size: 0.875rem; margin: 12px 8px;", "{s}" }
            }
            div { style: "display: flex; gap: 12px; margin: 16px 8px;",
                button {
                    onclick: move |_| {
                        accounts.with_mut(|list| list.push(CompanyBankInfo::default()));
                        success.set(None);
                    },
                    style: "padding: 10px 20px; border-radius: 8px; border: 1px solid {primary}; background: transparent; color: {primary}; cursor: pointer;",
                    "Add account"
                }
                button {
                    disabled: saving(),
                    onclick: move |_| {
                        saving.set(true);
                        error.set(None);
                        success.set(None);
                        let list = accounts();
                        let mut shared_list = shared.0;
                        spawn(async move {
                            match moderation_api::save_company_bank_info(&list).await {
                                Ok(()) => {
                                    shared_list.set(list);
                                    success.set(Some("Bank accounts saved.".to_string()));
                                }
                                Err(e) => error.set(Some(e.to_string())),
                            }
                            saving.set(false);
                        });
                    },
                    style: "padding: 10px 20px; border-radius: 8px; background: {primary}; color: {on_primary}; font-weight: 600; border: none; cursor: pointer;",
                    if saving() { "Saving…" } else { "Save All Changes" }
                }
            }
        }
    }
}
