use dioxus::prelude::*;

use ui::{Footer, Header};

/// Hero backgrounds cycled every few seconds.
const HERO_BACKGROUNDS: [&str; 3] = [
    "linear-gradient(135deg, #111827, #374151)",
    "linear-gradient(135deg, #1e3a5f, #0f766e)",
    "linear-gradient(135deg, #4c1d95, #9d174d)",
];

#[cfg(target_arch = "wasm32")]
const ROTATE_SECS: u64 = 5;

/// Landing page: rotating hero banner with a call to action into the catalog.
#[component]
pub fn Home() -> Element {
    let mut current = use_signal(|| 0usize);

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        spawn(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(ROTATE_SECS)).await;
                current.set((current() + 1) % HERO_BACKGROUNDS.len());
            }
        });
    });

    rsx! {
        div {
            class: "page",
            Header {}
            main {
                class: "page-main",
                section {
                    class: "hero-section",
                    style: "background-image: {HERO_BACKGROUNDS[current()]};",
                    div {
                        class: "hero-overlay",
                        h1 { class: "hero-title", "DNQ Fashion" }
                        p {
                            class: "hero-subtitle",
                            "Shape your style with a collection of your own."
                        }
                        a { class: "hero-button", href: "/products", "Browse the collection" }
                    }
                }
            }
            Footer {}
        }
    }
}
