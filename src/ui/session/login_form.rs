//! Login form component.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::{login, use_session_context};
use crate::ui::api::auth::LoginRequest;

/// How the user identifies themselves at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginMethod {
    Username,
    Phone,
}

/// Login form with a username/phone toggle.
#[component]
pub fn LoginForm(
    /// Callback to switch to the register page
    #[prop(optional, into)]
    on_register_click: Option<Callback<()>>,
) -> impl IntoView {
    let session = use_session_context();

    // Form state
    let method = RwSignal::new(LoginMethod::Username);
    let username = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Form validation
    let identity_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let validate_identity = move || {
        let (value, label) = match method.get() {
            LoginMethod::Username => (username.get(), "Username"),
            LoginMethod::Phone => (phone_number.get(), "Phone number"),
        };
        if value.trim().is_empty() {
            identity_error.set(Some(format!("{label} is required")));
            false
        } else {
            identity_error.set(None);
            true
        }
    };

    let validate_password = move || {
        if password.get().is_empty() {
            password_error.set(Some("Password is required".to_string()));
            false
        } else {
            password_error.set(None);
            true
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.clear_error();

        if !validate_identity() | !validate_password() {
            return;
        }

        let request = match method.get() {
            LoginMethod::Username => LoginRequest {
                username: Some(username.get()),
                password: password.get(),
                ..Default::default()
            },
            LoginMethod::Phone => LoginRequest {
                phone_number: Some(phone_number.get()),
                password: password.get(),
                ..Default::default()
            },
        };

        spawn_local(async move {
            // A successful login navigates away; errors land in the context.
            let _ = login(&request).await;
        });
    };

    let method_button = move |label: &'static str, value: LoginMethod, class_extra: &'static str| {
        view! {
            <button
                type="button"
                class=move || format!(
                    "flex-1 py-2 px-4 text-sm font-medium border {} {}",
                    class_extra,
                    if method.get() == value {
                        "bg-blue-600 text-white border-blue-600"
                    } else {
                        "bg-white text-gray-700 border-gray-300 hover:bg-gray-50"
                    }
                )
                on:click=move |_| {
                    method.set(value);
                    identity_error.set(None);
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-gray-900">"Sign in to your account"</h2>
            </div>

            // Global error message
            {move || {
                session.error.get().map(|error| {
                    view! {
                        <div class="p-3 bg-red-50 border border-red-300 rounded-lg">
                            <p class="text-sm text-red-700">{error}</p>
                        </div>
                    }
                })
            }}

            // Identity method toggle
            <div class="flex rounded-md shadow-sm">
                {method_button("Username", LoginMethod::Username, "rounded-l-md")}
                {method_button("Phone Number", LoginMethod::Phone, "rounded-r-md")}
            </div>

            // Identity field
            <div>
                {move || match method.get() {
                    LoginMethod::Username => view! {
                        <input
                            type="text"
                            placeholder="Username"
                            autocomplete="username"
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                            prop:value=move || username.get()
                            on:input=move |ev| {
                                username.set(event_target_value(&ev));
                                identity_error.set(None);
                            }
                        />
                    }.into_any(),
                    LoginMethod::Phone => view! {
                        <input
                            type="tel"
                            placeholder="Phone Number"
                            autocomplete="tel"
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                            prop:value=move || phone_number.get()
                            on:input=move |ev| {
                                phone_number.set(event_target_value(&ev));
                                identity_error.set(None);
                            }
                        />
                    }.into_any(),
                }}
                {move || {
                    identity_error.get().map(|error| {
                        view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                    })
                }}
            </div>

            // Password field
            <div>
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        password.set(event_target_value(&ev));
                        password_error.set(None);
                    }
                    on:blur=move |_| { validate_password(); }
                />
                {move || {
                    password_error.get().map(|error| {
                        view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                    })
                }}
            </div>

            // Submit button
            <button
                type="submit"
                class="w-full py-2.5 px-4 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg disabled:opacity-50"
                disabled=move || session.loading.get()
            >
                {move || if session.loading.get() { "Signing in..." } else { "Sign In" }}
            </button>

            // Register link
            <div class="text-center text-sm text-gray-600">
                "Don't have an account? "
                <button
                    type="button"
                    class="text-blue-600 hover:text-blue-700 font-medium"
                    on:click=move |_| {
                        if let Some(callback) = on_register_click.as_ref() {
                            callback.run(());
                        }
                    }
                >
                    "Sign up"
                </button>
            </div>
        </form>
    }
}
