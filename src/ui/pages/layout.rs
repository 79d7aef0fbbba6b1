//! Shared page chrome for the authenticated dashboards.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::session::Role;
use crate::ui::session::{SessionState, logout, use_session_context};

/// Header plus content column used by every dashboard page.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <AppHeader/>
            <main class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-8">{children()}</main>
        </div>
    }
}

/// Top navigation bar with role-aware links.
#[component]
pub fn AppHeader() -> impl IntoView {
    let session = use_session_context();

    let nav_links = move || {
        let role = match session.state.get() {
            SessionState::Authenticated(account) => account.role(),
            _ => None,
        };
        match role {
            Some(Role::User) => vec![("/user/book", "Book a Ride"), ("/user/rides", "My Rides")],
            Some(Role::Driver) => vec![("/driver", "Dashboard")],
            Some(Role::Admin) => vec![("/admin", "Admin Console")],
            None => vec![],
        }
    };

    view! {
        <header class="bg-white border-b border-gray-200 shadow-sm">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href="/" attr:class="flex items-center gap-2 hover:opacity-80">
                        <Logo/>
                        <span class="text-xl font-bold text-gray-900">"RideHail"</span>
                    </A>

                    <nav class="flex items-center gap-6">
                        {move || {
                            nav_links()
                                .into_iter()
                                .map(|(href, label)| {
                                    view! {
                                        <A
                                            href=href
                                            attr:class="text-sm font-medium text-gray-600 hover:text-gray-900"
                                        >
                                            {label}
                                        </A>
                                    }
                                })
                                .collect_view()
                        }}

                        {move || match session.state.get() {
                            SessionState::Authenticated(account) => view! {
                                <div class="flex items-center gap-4">
                                    <span class="text-sm text-gray-700">
                                        {account.display_name()}
                                    </span>
                                    <button
                                        class="px-3 py-1.5 text-sm font-medium text-red-600 border border-red-300 rounded-lg hover:bg-red-50"
                                        on:click=move |_| logout()
                                    >
                                        "Sign Out"
                                    </button>
                                </div>
                            }.into_any(),
                            _ => view! {
                                <div class="flex items-center gap-2">
                                    <A
                                        href="/login"
                                        attr:class="px-4 py-2 text-sm font-medium text-gray-600 hover:text-gray-900"
                                    >
                                        "Sign In"
                                    </A>
                                    <A
                                        href="/register"
                                        attr:class="px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 rounded-lg"
                                    >
                                        "Sign Up"
                                    </A>
                                </div>
                            }.into_any(),
                        }}
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="w-9 h-9 bg-gradient-to-br from-blue-500 to-blue-700 rounded-xl flex items-center justify-center shadow">
            <svg class="w-5 h-5 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M5 13l1.5-4.5A2 2 0 018.4 7h7.2a2 2 0 011.9 1.5L19 13m-14 0h14m-14 0v5a1 1 0 001 1h1a1 1 0 001-1v-1h8v1a1 1 0 001 1h1a1 1 0 001-1v-5"
                />
            </svg>
        </div>
    }
}
