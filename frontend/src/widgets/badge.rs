use dioxus::prelude::*;

/// Small pill label for row flags (Verified, Admin) and statuses.
#[component]
pub fn Badge(label: String, color: String) -> Element {
    rsx! {
        span {
            style: "display: inline-block; padding: 2px 10px; border-radius: 999px; font-size: 0.75rem; font-weight: 600; color: #FFFFFF; background: {color}; margin-right: 6px;",
            "{label}"
        }
    }
}
