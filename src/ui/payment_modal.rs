//! Payment modal.
//!
//! Wires a fare amount to the hosted payment provider: the backend mints an
//! intent, the provider's client library confirms it in the browser, and the
//! final status is forwarded to the backend's confirmation endpoint. This
//! layer never touches settlement.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::ui::api::payment;
use crate::ui::notifications::use_toaster;

/// Outcome of the provider's client-side confirmation step, as resolved by
/// the shell's `window.hostedPayments` adapter.
#[cfg_attr(feature = "ssr", allow(dead_code))]
#[derive(Debug, serde::Deserialize)]
struct ProviderOutcome {
    id: String,
    status: String,
}

/// Bindings to the `window.hostedPayments` adapter the page shell installs
/// over the provider's library. `confirm` mounts the payment element into
/// `#payment-element` and resolves once the user completes it.
#[cfg(not(feature = "ssr"))]
mod provider {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = ["window", "hostedPayments"], js_name = confirm, catch)]
        pub async fn confirm(client_secret: &str) -> Result<JsValue, JsValue>;
    }
}

/// Run the full payment flow for one amount (in minor currency units).
/// Returns a user-facing error message on any failure.
#[cfg(not(feature = "ssr"))]
async fn process_payment(amount: u64) -> Result<(), String> {
    let intent = payment::create_intent(amount)
        .await
        .map_err(|e| e.to_string())?;

    let raw = provider::confirm(&intent.client_secret)
        .await
        .map_err(|_| "Payment was not completed".to_string())?;
    let outcome: ProviderOutcome =
        serde_wasm_bindgen::from_value(raw).map_err(|e| e.to_string())?;

    if outcome.status != "succeeded" {
        return Err(format!("Payment {}", outcome.status));
    }

    payment::confirm(&outcome.id).await.map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(feature = "ssr")]
async fn process_payment(_amount: u64) -> Result<(), String> {
    Err("Payment not available on server".to_string())
}

/// Modal for paying a ride fare.
#[component]
pub fn PaymentModal(
    /// Amount due, in the currency's minor unit
    amount: u64,
    /// Callback once the payment is confirmed end to end
    #[prop(into)]
    on_success: Callback<()>,
    /// Callback to close the modal without paying
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let toaster = use_toaster();
    let processing = RwSignal::new(false);

    let on_pay = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if processing.get_untracked() {
            return;
        }
        processing.set(true);

        spawn_local(async move {
            match process_payment(amount).await {
                Ok(()) => {
                    toaster.success("Payment successful!");
                    on_success.run(());
                }
                Err(message) => {
                    toaster.error(message);
                }
            }
            processing.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            // Backdrop
            <div
                class="absolute inset-0 bg-black/50"
                on:click=move |_| on_close.run(())
            ></div>

            // Modal content
            <div class="relative w-full max-w-md bg-white rounded-xl shadow-xl p-6">
                <h2 class="text-2xl font-semibold mb-6">"Payment Details"</h2>

                <form on:submit=on_pay class="space-y-4">
                    // Mount point the provider's payment element attaches to
                    <div id="payment-element" class="min-h-24 border border-gray-200 rounded-lg p-3"></div>

                    <div class="flex justify-end space-x-4">
                        <button
                            type="button"
                            class="px-4 py-2 rounded-md bg-gray-200 text-gray-800 hover:bg-gray-300"
                            disabled=move || processing.get()
                            on:click=move |_| on_close.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="px-4 py-2 rounded-md bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50"
                            disabled=move || processing.get()
                        >
                            {move || {
                                if processing.get() {
                                    "Processing...".to_string()
                                } else {
                                    format!("Pay ${:.2}", amount as f64 / 100.0)
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The shell adapter resolves `{ id, status }`; both halves of that
    // contract are pinned here.
    #[test]
    fn provider_outcome_parses_the_adapter_shape() {
        let raw = r#"{"id": "pi_3abc", "status": "succeeded"}"#;
        let outcome: ProviderOutcome = serde_json::from_str(raw).unwrap();
        assert_eq!(outcome.id, "pi_3abc");
        assert_eq!(outcome.status, "succeeded");
    }

    #[test]
    fn provider_outcome_rejects_a_missing_field() {
        let raw = r#"{"status": "succeeded"}"#;
        assert!(serde_json::from_str::<ProviderOutcome>(raw).is_err());
    }
}
