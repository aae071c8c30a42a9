//! Login page: one form toggling between sign-in and registration.

use api::{Client, LoginRequest, RegisterRequest, Role};
use dioxus::prelude::*;

use crate::Route;
use ui::{use_auth, Footer, Header};

/// Sign-in carries the selected role; registration creates a plain user
/// account and flips the form back to sign-in.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut is_login = use_signal(|| true);
    let mut role = use_signal(|| Role::User);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            notice.set(None);

            let name = username().trim().to_string();
            let pass = password();

            if name.is_empty() {
                error.set(Some("Please enter your username.".to_string()));
                return;
            }
            if pass.is_empty() {
                error.set(Some("Please enter your password.".to_string()));
                return;
            }

            if is_login() {
                match Client::new()
                    .login(&LoginRequest {
                        username: name,
                        password: pass,
                        role: role(),
                    })
                    .await
                {
                    Ok(user) => {
                        auth.login(user);
                        nav.replace(Route::Home {});
                    }
                    Err(err) => {
                        tracing::error!("Login failed: {err}");
                        error.set(Some(err.message()));
                    }
                }
            } else {
                let mail = email().trim().to_string();
                if mail.is_empty() || !mail.contains('@') {
                    error.set(Some("Please enter a valid email.".to_string()));
                    return;
                }
                match Client::new()
                    .register(&RegisterRequest {
                        username: name,
                        email: mail,
                        password: pass,
                    })
                    .await
                {
                    Ok(()) => {
                        is_login.set(true);
                        notice.set(Some("Registration successful. Please log in.".to_string()));
                    }
                    Err(err) => {
                        tracing::error!("Registration failed: {err}");
                        error.set(Some(err.message()));
                    }
                }
            }
        });
    };

    rsx! {
        div {
            class: "page",
            Header {}
            main {
                class: "page-main centered",
                div {
                    class: "auth-card",
                    h2 {
                        class: "auth-title",
                        if is_login() { "Log in" } else { "Sign up" }
                    }
                    if let Some(msg) = notice() {
                        p { class: "notice-text", "{msg}" }
                    }
                    if let Some(err) = error() {
                        p { class: "error-text", "{err}" }
                    }
                    form {
                        onsubmit: handle_submit,
                        div {
                            class: "form-group",
                            label { class: "form-label", r#for: "username", "Username" }
                            input {
                                class: "form-input",
                                id: "username",
                                r#type: "text",
                                value: username(),
                                oninput: move |evt| username.set(evt.value()),
                                required: true,
                            }
                        }
                        if !is_login() {
                            div {
                                class: "form-group",
                                label { class: "form-label", r#for: "email", "Email" }
                                input {
                                    class: "form-input",
                                    id: "email",
                                    r#type: "email",
                                    value: email(),
                                    oninput: move |evt| email.set(evt.value()),
                                    required: true,
                                }
                            }
                        }
                        div {
                            class: "form-group",
                            label { class: "form-label", r#for: "password", "Password" }
                            input {
                                class: "form-input",
                                id: "password",
                                r#type: "password",
                                value: password(),
                                oninput: move |evt| password.set(evt.value()),
                                required: true,
                            }
                        }
                        if is_login() {
                            div {
                                class: "form-group",
                                span { class: "form-label", "Role" }
                                label {
                                    class: "radio-label",
                                    input {
                                        r#type: "radio",
                                        name: "role",
                                        checked: role() == Role::User,
                                        onchange: move |_| role.set(Role::User),
                                    }
                                    "Customer"
                                }
                                label {
                                    class: "radio-label",
                                    input {
                                        r#type: "radio",
                                        name: "role",
                                        checked: role() == Role::Admin,
                                        onchange: move |_| role.set(Role::Admin),
                                    }
                                    "Administrator"
                                }
                            }
                        }
                        button {
                            class: "primary-button wide",
                            r#type: "submit",
                            if is_login() { "Log in" } else { "Sign up" }
                        }
                    }
                    p {
                        class: "auth-switch",
                        if is_login() { "No account yet? " } else { "Already registered? " }
                        button {
                            class: "link-button",
                            onclick: move |_| {
                                is_login.set(!is_login());
                                error.set(None);
                                notice.set(None);
                            },
                            if is_login() { "Sign up" } else { "Log in" }
                        }
                    }
                }
            }
            Footer {}
        }
    }
}
