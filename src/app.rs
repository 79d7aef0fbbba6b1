use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::deployment::{BACKEND_URL_META, PAYMENT_KEY_META, SOCKET_URL_META};
use crate::ui::pages::{
    AdminPage, BookPage, DriverPage, HomePage, LoginPage, NotFoundPage, RegisterPage, RidesPage,
};
use crate::ui::session::provide_session_context;
use crate::ui::{ToasterContainer, provide_realtime_context, provide_toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Deployment endpoints, mirrored into the page for the hydrated client
    // (see ui::deployment). Empty when unset; the client then stays
    // same-origin and the payment modal reports the provider as unconfigured.
    let backend_url = std::env::var("BACKEND_URL").unwrap_or_default();
    let socket_url = std::env::var("SOCKET_URL").unwrap_or_default();
    let payment_key = std::env::var("PAYMENT_PUBLISHABLE_KEY").unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=BACKEND_URL_META content=backend_url/>
                <meta name=SOCKET_URL_META content=socket_url/>
                <meta name=PAYMENT_KEY_META content=payment_key/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
                <script src="https://js.stripe.com/v3/"></script>
                <PaymentProviderGlue/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Adapts the payment provider's library to the `window.hostedPayments.confirm`
/// contract the payment modal binds against: mount the payment element into
/// `#payment-element`, confirm the intent, resolve `{ id, status }`.
#[component]
fn PaymentProviderGlue() -> impl IntoView {
    view! {
        <script>
            r#"
            (function () {
                function metaContent(name) {
                    var el = document.querySelector('meta[name="' + name + '"]');
                    return el ? (el.getAttribute('content') || '') : '';
                }
                var stripe = null;
                function provider() {
                    if (!stripe && window.Stripe) {
                        var key = metaContent('payment-publishable-key');
                        if (key) { stripe = window.Stripe(key); }
                    }
                    return stripe;
                }
                window.hostedPayments = {
                    confirm: function (clientSecret) {
                        var s = provider();
                        if (!s) {
                            return Promise.reject(new Error('payment provider not configured'));
                        }
                        var elements = s.elements({ clientSecret: clientSecret });
                        var element = elements.create('payment');
                        element.mount('#payment-element');
                        return new Promise(function (resolve, reject) {
                            element.on('ready', function () {
                                s.confirmPayment({ elements: elements, redirect: 'if_required' })
                                    .then(function (result) {
                                        if (result.error) { reject(result.error); return; }
                                        resolve({
                                            id: result.paymentIntent.id,
                                            status: result.paymentIntent.status
                                        });
                                    })
                                    .catch(reject);
                            });
                        });
                    }
                };
            })();
            "#
        </script>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // App-wide contexts: session store, realtime channel, toast queue.
    // The route guard runs server-side before any of these render.
    let _session = provide_session_context();
    let _realtime = provide_realtime_context();
    let toaster = provide_toaster();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/ridehail.css"/>

        // sets the document title
        <Title text="RideHail"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/register") view=RegisterPage/>
                <Route path=path!("/user/book") view=BookPage/>
                <Route path=path!("/user/rides") view=RidesPage/>
                <Route path=path!("/driver") view=DriverPage/>
                <Route path=path!("/admin") view=AdminPage/>
            </Routes>
        </Router>

        <ToasterContainer toasts=toaster.toasts()/>
    }
}
