use dioxus::prelude::*;
use pecunia_client_core::models::{Transaction, TransactionKind, TransactionStatus, User};
use pecunia_client_core::transactions as moderation_api;
use crate::moderation::{filter_transactions, format_date, format_money, short_id};
use crate::theme::AppColors;
use crate::widgets::GradientCard;

#[component]
pub fn TransactionsTab(
    is_dark: bool,
    transactions: Vec<Transaction>,
    users: Vec<User>,
    on_reload: EventHandler<()>,
) -> Element {
    let mut search = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let on_surface = AppColors::on_surface(is_dark);
    let error_color = AppColors::error(is_dark);

    let filtered: Vec<Transaction> = filter_transactions(&transactions, &users, &search())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div { style: "padding: 24px;",
            div { style: "display: flex; align-items: center; margin-bottom: 16px; gap: 16px;",
                h1 { style: "color: {on_surface}; margin: 0;", "Transactions" }
                div { style: "flex: 1;" }
                input {
                    r#type: "text",
                    placeholder: "Search by id, email, or name",
                    value: "{search()}",
                    oninput: move |ev| search.set(ev.value().clone()),
                    style: "width: 280px; padding: 10px; border-radius: 8px; border: 1px solid #8A9199; background: transparent; color: {on_surface}; box-sizing: border-box;",
                }
            }
            if let Some(ref e) = error() {
                p { style: "color: {error_color}; font-size: 0.875rem; margin-bottom: 12px;", "{e}" }
            }
            if filtered.is_empty() {
                GradientCard { is_dark,
                    p { style: "color: {on_surface}; opacity: 0.8;", "No matching transactions." }
                }
            } else {
                GradientCard { is_dark,
                    table { style: "width: 100%; border-collapse: collapse; color: {on_surface};",
                        thead {
                            tr {
                                th { style: "text-align: left; padding: 8px; border-bottom: 1px solid #43474E;", "Id" }
                                th { style: "text-align: left; padding: 8px; border-bottom: 1px solid #43474E;", "Owner" }
                                th { style: "text-align: left; padding: 8px; border-bottom: 1px solid #43474E;", "Type" }
                                th { style: "text-align: right; padding: 8px; border-bottom: 1px solid #43474E;", "Amount" }
                                th { style: "text-align: left; padding: 8px; border-bottom: 1px solid #43474E;", "Date" }
                                th { style: "text-align: left; padding: 8px; border-bottom: 1px solid #43474E;", "Status" }
                            }
                        }
                        tbody {
                            for txn in filtered {
                                tr { key: "{txn.id}",
                                    td { style: "padding: 8px; border-bottom: 1px solid rgba(67,71,78,0.4); font-family: monospace;",
                                        "{short_id(&txn.id)}"
                                    }
                                    td { style: "padding: 8px; border-bottom: 1px solid rgba(67,71,78,0.4);",
                                        {
                                            let owner = users.iter().find(|u| u.id == txn.user_id);
                                            match owner {
                                                Some(u) => rsx! {
                                                    div { "{u.full_name}" }
                                                    div { style: "opacity: 0.6; font-size: 0.8rem;", "{u.email}" }
                                                },
                                                None => rsx! {
                                                    span { style: "font-family: monospace;", "{short_id(&txn.user_id)}" }
                                                },
                                            }
                                        }
                                    }
                                    td { style: "padding: 8px; border-bottom: 1px solid rgba(67,71,78,0.4);", "{txn.kind}" }
                                    td { style: "padding: 8px; border-bottom: 1px solid rgba(67,71,78,0.4); text-align: right;",
                                        "{format_money(txn.amount)}"
                                    }
                                    td { style: "padding: 8px; border-bottom: 1px solid rgba(67,71,78,0.4);",
                                        "{format_date(&txn.date)}"
                                    }
                                    td { style: "padding: 8px; border-bottom: 1px solid rgba(67,71,78,0.4);",
                                        if txn.kind == TransactionKind::Transfer {
                                            // transfer statuses are system-managed
                                            span { style: "opacity: 0.7;", "Auto" }
                                        } else {
                                            {
                                                let txn_id = txn.id.clone();
                                                let kind = txn.kind;
                                                let current = txn.status;
                                                rsx! {
                                                    select {
                                                        value: "{current.as_str()}",
                                                        onchange: move |ev| {
                                                            let next = match TransactionStatus::from_str(&ev.value()) {
                                                                Some(status) => status,
                                                                None => return,
                                                            };
                                                            if next == current {
                                                                return;
                                                            }
                                                            let txn_id = txn_id.clone();
                                                            spawn(async move {
                                                                let result = match kind {
                                                                    TransactionKind::Deposit => {
                                                                        moderation_api::update_deposit_status(&txn_id, next).await
                                                                    }
                                                                    _ => {
                                                                        moderation_api::update_withdrawal_status(&txn_id, next).await
                                                                    }
                                                                };
                                                                match result {
                                                                    Ok(()) => on_reload.call(()),
                                                                    Err(e) => error.set(Some(e.to_string())),
                                                                }
                                                            });
                                                        },
                                                        style: "padding: 6px; border-radius: 8px; border: 1px solid #8A9199; background: transparent; color: {on_surface};",
                                                        for status in kind.manual_statuses() {
                                                            option {
                                                                value: "{status.as_str()}",
                                                                selected: *status == current,
                                                                "{status.as_str()}"
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
                    }
                }
            }
        }
    }
}
