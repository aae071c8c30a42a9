use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::redirect;

/// Top navigation bar. Links adapt to the session: logged-out visitors get a
/// login link, customers get their orders, admins additionally get the admin
/// panel.
#[component]
pub fn Header() -> Element {
    let mut auth = use_auth();
    let state = auth.state();

    let handle_logout = move |_| {
        auth.logout();
        redirect("/");
    };

    rsx! {
        header {
            class: "header",
            div {
                class: "header-container",
                a { class: "header-logo", href: "/", "DNQ Fashion" }
                nav {
                    class: "header-nav",
                    a { class: "nav-link", href: "/", "Home" }
                    a { class: "nav-link", href: "/products", "Products" }
                    a { class: "nav-link", href: "/cart", "Cart" }
                    if let Some(user) = state.user {
                        a { class: "nav-link", href: "/orders", "Orders" }
                        if user.is_admin() {
                            a { class: "nav-link", href: "/admin", "Admin" }
                        }
                        button {
                            class: "logout-button",
                            onclick: handle_logout,
                            "Log out"
                        }
                    } else {
                        a { class: "nav-link", href: "/login", "Log in" }
                    }
                }
            }
        }
    }
}
