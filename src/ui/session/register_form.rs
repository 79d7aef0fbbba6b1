//! Registration form component.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::{register, use_session_context};
use crate::ui::api::auth::RegisterRequest;

/// Rider registration form. Driver accounts are created from the admin
/// console, so this form always produces a rider.
#[component]
pub fn RegisterForm(
    /// Callback to switch to the login page
    #[prop(optional, into)]
    on_login_click: Option<Callback<()>>,
) -> impl IntoView {
    let session = use_session_context();

    // Form state
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    // Form validation
    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);

    let validate_username = move || {
        let value = username.get();
        if value.trim().is_empty() {
            username_error.set(Some("Username is required".to_string()));
            false
        } else if value.trim().len() < 3 {
            username_error.set(Some("Username must be at least 3 characters".to_string()));
            false
        } else {
            username_error.set(None);
            true
        }
    };

    let validate_password = move || {
        if password.get().len() < 8 {
            password_error.set(Some("Password must be at least 8 characters".to_string()));
            false
        } else {
            password_error.set(None);
            true
        }
    };

    let validate_confirm = move || {
        if confirm_password.get() != password.get() {
            confirm_error.set(Some("Passwords do not match".to_string()));
            false
        } else {
            confirm_error.set(None);
            true
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.clear_error();

        // Evaluate every validator so all errors surface at once.
        if !validate_username() | !validate_password() | !validate_confirm() {
            return;
        }

        let optional = |value: String| {
            let trimmed = value.trim().to_string();
            (!trimmed.is_empty()).then_some(trimmed)
        };
        let request = RegisterRequest {
            username: username.get().trim().to_string(),
            password: password.get(),
            email: optional(email.get()),
            first_name: optional(first_name.get()),
            last_name: optional(last_name.get()),
            phone_number: optional(phone_number.get()),
        };

        spawn_local(async move {
            let _ = register(&request).await;
        });
    };

    let text_field = move |signal: RwSignal<String>,
                          placeholder: &'static str,
                          input_type: &'static str| {
        view! {
            <input
                type=input_type
                placeholder=placeholder
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-gray-900">"Create your account"</h2>
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

            <div>
                <input
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                    prop:value=move || username.get()
                    on:input=move |ev| {
                        username.set(event_target_value(&ev));
                        username_error.set(None);
                    }
                    on:blur=move |_| { validate_username(); }
                />
                {move || {
                    username_error.get().map(|error| {
                        view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                    })
                }}
            </div>

            <div class="grid grid-cols-2 gap-4">
                {text_field(first_name, "First Name", "text")}
                {text_field(last_name, "Last Name", "text")}
            </div>

            {text_field(email, "Email", "email")}
            {text_field(phone_number, "Phone Number", "tel")}

            <div>
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete="new-password"
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

            <div>
                <input
                    type="password"
                    placeholder="Confirm Password"
                    autocomplete="new-password"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| {
                        confirm_password.set(event_target_value(&ev));
                        confirm_error.set(None);
                    }
                    on:blur=move |_| { validate_confirm(); }
                />
                {move || {
                    confirm_error.get().map(|error| {
                        view! { <p class="mt-1 text-sm text-red-500">{error}</p> }
                    })
                }}
            </div>

            <button
                type="submit"
                class="w-full py-2.5 px-4 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg disabled:opacity-50"
                disabled=move || session.loading.get()
            >
                {move || if session.loading.get() { "Creating account..." } else { "Sign Up" }}
            </button>

            <div class="text-center text-sm text-gray-600">
                "Already have an account? "
                <button
                    type="button"
                    class="text-blue-600 hover:text-blue-700 font-medium"
                    on:click=move |_| {
                        if let Some(callback) = on_login_click.as_ref() {
                            callback.run(());
                        }
                    }
                >
                    "Sign in"
                </button>
            </div>
        </form>
    }
}
