//! Public landing page.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::pages::layout::AppHeader;
use crate::ui::session::{SessionState, use_session_context};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    // Authenticated visitors go straight to their dashboard.
    let on_get_started = move |_| {
        let target = match session.state.get() {
            SessionState::Authenticated(account) => account
                .role()
                .map(|role| role.home_path())
                .unwrap_or("/login"),
            _ => "/register",
        };
        navigate(target, Default::default());
    };

    view! {
        <Title text="RideHail - Book a ride in seconds"/>
        <Meta
            name="description"
            content="Book rides, track your driver live, and pay in the app."
        />

        <div class="min-h-screen bg-gray-50">
            <AppHeader/>

            <section class="max-w-4xl mx-auto px-4 pt-24 pb-16 text-center">
                <h1 class="text-5xl sm:text-6xl font-bold text-gray-900 mb-6 tracking-tight">
                    "Get there with RideHail"
                </h1>
                <p class="text-xl text-gray-600 max-w-2xl mx-auto mb-10">
                    "Book a ride in seconds, watch your driver arrive in real time, and pay without leaving the app."
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <button
                        class="px-8 py-3 text-lg font-semibold text-white bg-blue-600 hover:bg-blue-700 rounded-xl shadow-lg"
                        on:click=on_get_started
                    >
                        "Get Started"
                    </button>
                    <A
                        href="/login"
                        attr:class="px-8 py-3 text-lg font-semibold text-gray-700 border-2 border-gray-300 hover:border-blue-500 rounded-xl"
                    >
                        "Sign In"
                    </A>
                </div>
            </section>

            <section class="max-w-5xl mx-auto px-4 pb-24">
                <div class="grid md:grid-cols-3 gap-8">
                    <BenefitCard
                        title="Instant Booking"
                        description="Pick your pickup and destination on the map; a nearby driver takes it from there."
                    />
                    <BenefitCard
                        title="Live Tracking"
                        description="See your driver's position update live from the moment the ride is accepted."
                    />
                    <BenefitCard
                        title="In-app Payment"
                        description="Pay the fare securely when the ride completes. No cash, no card terminals."
                    />
                </div>
            </section>
        </div>
    }
}

#[component]
fn BenefitCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-xl border border-gray-200 shadow-sm">
            <h3 class="text-lg font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600 text-sm leading-relaxed">{description}</p>
        </div>
    }
}
