//! 404 page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Set an actual 404 status for crawlers and health checks
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_axum::ResponseOptions>();
        resp.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page Not Found - RideHail"/>
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"This page does not exist."</p>
                <A
                    href="/"
                    attr:class="px-6 py-3 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 rounded-lg"
                >
                    "Back to Home"
                </A>
            </div>
        </div>
    }
}
