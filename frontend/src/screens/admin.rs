use dioxus::prelude::*;
use pecunia_client_core::gateway;
use pecunia_client_core::models::{CompanyBankInfo, Transaction, User};
use pecunia_client_core::transactions as moderation_api;
use crate::screens::{SettingsTab, TransactionsTab, UsersTab};
use crate::session::{BankAccounts, CurrentUser};
use crate::theme::AppColors;
use crate::widgets::{GradientBackground, GradientCard};

#[derive(Clone, Copy, PartialEq)]
pub enum AdminTab {
    Users,
    Transactions,
    Settings,
}

/// Full reload: users, transactions, and the bank-account list. Every
/// mutation in the console runs this afterwards instead of patching state
/// incrementally.
async fn load_all(
    mut users: Signal<Vec<User>>,
    mut transactions: Signal<Vec<Transaction>>,
    mut bank_accounts: Signal<Vec<CompanyBankInfo>>,
) {
    users.set(gateway::get_all_users().await);
    match moderation_api::get_all_transactions().await {
        Ok(list) => transactions.set(list),
        Err(_) => transactions.set(Vec::new()),
    }
    if let Ok(list) = moderation_api::get_company_bank_info().await {
        bank_accounts.set(list);
    }
}

#[component]
pub fn AdminScreen(is_dark: bool, on_logout: EventHandler<()>) -> Element {
    let mut tab = use_signal(|| AdminTab::Users);
    let session = use_context::<CurrentUser>();
    let bank_accounts = use_context::<BankAccounts>();
    let users = use_signal(Vec::<User>::new);
    let transactions = use_signal(Vec::<Transaction>::new);

    use_future(move || async move {
        load_all(users, transactions, bank_accounts.0).await;
    });

    let text_color = AppColors::on_surface(is_dark);
    let active_bg = AppColors::primary(is_dark);
    let active_fg = AppColors::on_primary(is_dark);

    let (is_admin, admin_email) = {
        let current = session.0.read();
        (
            current.as_ref().map_or(false, |u| u.is_admin),
            current.as_ref().map(|u| u.email.clone()).unwrap_or_default(),
        )
    };

    if !is_admin {
        return rsx! {
            GradientBackground { is_dark,
                div { style: "padding: 48px 24px; max-width: 480px; margin: 0 auto; text-align: center;",
                    GradientCard { is_dark,
                        h1 { style: "color: {text_color}; margin-bottom: 8px;", "Access denied" }
                        p { style: "color: {text_color}; opacity: 0.8; margin-bottom: 16px;",
                            "This area is restricted to administrator accounts."
                        }
                        button {
                            onclick: move |_| on_logout.call(()),
                            style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #8A9199; background: transparent; color: {text_color}; cursor: pointer;",
                            "Back to login"
                        }
                    }
                }
            }
        };
    }

    let transparent = "transparent";
    let bg_users = if tab() == AdminTab::Users { active_bg } else { transparent };
    let fg_users = if tab() == AdminTab::Users { active_fg } else { text_color };
    let bg_transactions = if tab() == AdminTab::Transactions { active_bg } else { transparent };
    let fg_transactions = if tab() == AdminTab::Transactions { active_fg } else { text_color };
    let bg_settings = if tab() == AdminTab::Settings { active_bg } else { transparent };
    let fg_settings = if tab() == AdminTab::Settings { active_fg } else { text_color };

    rsx! {
        GradientBackground { is_dark,
            div { style: "display: flex; flex-direction: column; height: 100vh;",
                div { style: "display: flex; padding: 12px 24px; gap: 12px; align-items: center; border-bottom: 1px solid #43474E; flex-shrink: 0;",
                    button {
                        onclick: move |_| tab.set(AdminTab::Users),
                        style: "padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; background: {bg_users}; color: {fg_users};",
                        "Users"
                    }
                    button {
                        onclick: move |_| tab.set(AdminTab::Transactions),
                        style: "padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; background: {bg_transactions}; color: {fg_transactions};",
                        "Transactions"
                    }
                    button {
                        onclick: move |_| tab.set(AdminTab::Settings),
                        style: "padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; background: {bg_settings}; color: {fg_settings};",
                        "Settings"
                    }
                    div { style: "flex: 1;" }
                    span { style: "color: {text_color}; opacity: 0.7; font-size: 0.875rem;", "{admin_email}" }
                    button {
                        onclick: move |_| on_logout.call(()),
                        style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #8A9199; background: transparent; color: #8A9199; cursor: pointer;",
                        "Logout"
                    }
                }
                div { style: "flex: 1; overflow: auto;",
                    {match tab() {
                        AdminTab::Users => rsx! {
                            UsersTab {
                                is_dark,
                                users: users(),
                                on_reload: move |_| {
                                    spawn(async move {
                                        load_all(users, transactions, bank_accounts.0).await;
                                    });
                                },
                            }
                        },
                        AdminTab::Transactions => rsx! {
                            TransactionsTab {
                                is_dark,
                                transactions: transactions(),
                                users: users(),
                                on_reload: move |_| {
                                    spawn(async move {
                                        load_all(users, transactions, bank_accounts.0).await;
                                    });
                                },
                            }
                        },
                        AdminTab::Settings => rsx! {
                            SettingsTab { is_dark }
                        },
                    }}
                }
            }
        }
    }
}
