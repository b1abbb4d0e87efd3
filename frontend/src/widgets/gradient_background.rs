use dioxus::prelude::*;
use crate::theme::AppColors;

#[component]
pub fn GradientBackground(is_dark: bool, children: Element) -> Element {
    let (bg_start, bg_end) = if is_dark {
        (AppColors::DARK_SURFACE, "#10141A")
    } else {
        ("#E8F0FB", AppColors::LIGHT_SURFACE)
    };
    rsx! {
        div {
            style: "min-height: 100vh; background: linear-gradient(to bottom, {bg_start}, {bg_end});",
            {children}
        }
    }
}
