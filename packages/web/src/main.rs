use dioxus::prelude::*;

use ui::{use_auth, AuthProvider, CartProvider};
use views::{Admin, Cart, Checkout, Home, Login, Orders, ProductDetail, Products};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/products")]
    Products {},
    #[route("/products/:id")]
    ProductDetail { id: i64 },
    #[route("/login")]
    Login {},
    #[layout(RequireAuth)]
        #[route("/cart")]
        Cart {},
        #[route("/checkout")]
        Checkout {},
        #[route("/orders")]
        Orders {},
    #[end_layout]
    #[layout(RequireAdmin)]
        #[route("/admin")]
        Admin {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            CartProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Authorization is decided here, once per navigation; the pages behind the
/// guard never re-check the session.
#[component]
fn RequireAuth() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if !auth.is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! { Outlet::<Route> {} }
}

/// Admin-only gate: a user must be present and hold the admin role.
#[component]
fn RequireAdmin() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if !auth.is_admin() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! { Outlet::<Route> {} }
}
