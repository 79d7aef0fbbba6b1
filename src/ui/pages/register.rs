//! Registration page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::ui::session::RegisterForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let to_login = Callback::new(move |_| {
        let navigate = use_navigate();
        navigate("/login", Default::default());
    });

    view! {
        <Title text="Sign Up - RideHail"/>
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4 py-12">
            <div class="w-full max-w-md bg-white rounded-xl shadow-lg border border-gray-200 p-8">
                <RegisterForm on_login_click=to_login/>
            </div>
        </div>
    }
}
