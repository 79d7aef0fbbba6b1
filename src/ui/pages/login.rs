//! Login page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::ui::session::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    let to_register = Callback::new(move |_| {
        let navigate = use_navigate();
        navigate("/register", Default::default());
    });

    view! {
        <Title text="Sign In - RideHail"/>
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="w-full max-w-md bg-white rounded-xl shadow-lg border border-gray-200 p-8">
                <LoginForm on_register_click=to_register/>
            </div>
        </div>
    }
}
