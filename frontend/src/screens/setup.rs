use dioxus::prelude::*;
use crate::theme::AppColors;
use crate::widgets::{GradientBackground, GradientCard};

#[component]
pub fn SetupScreen(is_dark: bool, on_saved: EventHandler<()>) -> Element {
    let mut service_url = use_signal(|| "http://127.0.0.1:8000".to_string());
    let mut api_key = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut testing = use_signal(|| false);

    let on_surface = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let on_primary = AppColors::on_primary(is_dark);
    let error_color = AppColors::error(is_dark);
    let success_color = AppColors::success(is_dark);

    rsx! {
        GradientBackground { is_dark,
            div { style: "padding: 24px; max-width: 480px; margin: 0 auto;",
                h1 { style: "color: {on_surface}; margin-bottom: 8px;", "Backend setup" }
                p { style: "color: {on_surface}; opacity: 0.8; margin-bottom: 24px; font-size: 0.9rem;",
                    "Set the URL and API key of the account service."
                }
                GradientCard { is_dark,
                    div { style: "margin-bottom: 16px;",
                        label { style: "display: block; margin-bottom: 4px; color: {on_surface};", "Service URL" }
                        input {
                            r#type: "text",
                            placeholder: "https://accounts.example.com",
                            value: "{service_url()}",
                            oninput: move |ev| service_url.set(ev.value().clone()),
                            style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #8A9199; background: transparent; color: {on_surface}; box-sizing: border-box;",
                        }
                    }
                    div { style: "margin-bottom: 16px;",
                        label { style: "display: block; margin-bottom: 4px; color: {on_surface};", "API key" }
                        input {
                            r#type: "password",
                            placeholder: "service API key",
                            value: "{api_key()}",
                            oninput: move |ev| api_key.set(ev.value().clone()),
                            style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #8A9199; background: transparent; color: {on_surface}; box-sizing: border-box;",
                        }
                    }
                    if let Some(ref e) = error() {
                        p { style: "color: {error_color}; font-size: 0.875rem; margin-bottom: 12px;", "{e}" }
                    }
                    if let Some(ref s) = success() {
                        p { style: "color: {success_color}; font-size: 0.875rem; margin-bottom: 12px;", "{s}" }
                    }
                    div { style: "display: flex; gap: 12px;",
                        button {
                            disabled: testing(),
                            onclick: move |_| {
                                testing.set(true);
                                error.set(None);
                                success.set(None);
                                let base = service_url().trim_end_matches('/').to_string();
                                spawn(async move {
                                    let url = format!("{}/health", base);
                                    let res = reqwest::get(&url).await;
                                    testing.set(false);
                                    match res {
                                        Ok(r) if r.status().is_success() => {
                                            success.set(Some("Connection successful!".to_string()));
                                        }
                                        Ok(r) => {
                                            error.set(Some(format!("Service returned {}", r.status())));
                                        }
                                        Err(e) => {
                                            error.set(Some(e.to_string()));
                                        }
                                    }
                                });
                            },
                            style: "padding: 12px 24px; border-radius: 8px; background: #43474E; color: white; border: none; cursor: pointer;",
                            if testing() { "Testing…" } else { "Test connection" }
                        }
                        button {
                            onclick: move |_| {
                                pecunia_client_core::set_backend_config(service_url(), api_key());
                                on_saved.call(());
                            },
                            style: "padding: 12px 24px; border-radius: 8px; background: {primary}; color: {on_primary}; font-weight: 600; border: none; cursor: pointer;",
                            "Save"
                        }
                    }
                }
            }
        }
    }
}
