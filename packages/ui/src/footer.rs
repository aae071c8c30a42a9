use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-container",
                p { class: "footer-name", "DNQ Fashion" }
                p { class: "footer-text", "Shape your style with a collection of your own." }
                p { class: "footer-copyright", "© 2025 DNQ Fashion. All rights reserved." }
            }
        }
    }
}
