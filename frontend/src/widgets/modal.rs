use dioxus::prelude::*;
use crate::theme::AppColors;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop closes it.
#[component]
pub fn Modal(is_dark: bool, title: String, on_close: EventHandler<()>, children: Element) -> Element {
    let surface = if is_dark { "#26282E" } else { "#FFFFFF" };
    let on_surface = AppColors::on_surface(is_dark);
    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 10;",
            onclick: move |_| on_close.call(()),
            div {
                style: "background: {surface}; border-radius: 12px; padding: 24px; min-width: 380px; max-width: 90vw; max-height: 90vh; overflow: auto;",
                onclick: move |ev| ev.stop_propagation(),
                h2 { style: "color: {on_surface}; margin: 0 0 16px; font-size: 1.1rem;", "{title}" }
                {children}
            }
        }
    }
}
