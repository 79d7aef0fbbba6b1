//! Rider booking page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos::task::spawn_local;

use crate::core::rides::{BookRideRequest, GeoPoint, Ride};
use crate::ui::PaymentModal;
use crate::ui::api::user;
use crate::ui::map::RideMap;
use crate::ui::notifications::use_toaster;
use crate::ui::pages::layout::AppShell;

#[component]
pub fn BookPage() -> impl IntoView {
    let toaster = use_toaster();

    // Booking form state
    let pickup_text = RwSignal::new(String::new());
    let dropoff_text = RwSignal::new(String::new());
    let pickup_point = RwSignal::new(None::<GeoPoint>);
    let dropoff_point = RwSignal::new(None::<GeoPoint>);
    let booking = RwSignal::new(false);

    // Ride list state
    let rides = RwSignal::new(Vec::<Ride>::new());
    let loading_rides = RwSignal::new(true);

    // Fare payment modal; holds the ride being paid
    let paying = RwSignal::new(None::<Ride>);

    let load_rides = move || {
        spawn_local(async move {
            match user::my_rides().await {
                Ok(list) => {
                    let _ = rides.try_set(list);
                }
                Err(e) => toaster.error(format!("Failed to load rides: {e}")),
            }
            let _ = loading_rides.try_set(false);
        });
    };

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        load_rides();
    });

    // A dropped pin fills its empty address field with the "lat,lng"
    // encoding, so the stored ride carries coordinates the tracking map can
    // parse back into pins.
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        if let Some(point) = pickup_point.get() {
            if pickup_text.get_untracked().trim().is_empty() {
                pickup_text.set(point.to_text());
            }
        }
        if let Some(point) = dropoff_point.get() {
            if dropoff_text.get_untracked().trim().is_empty() {
                dropoff_text.set(point.to_text());
            }
        }
    });

    let on_book = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if booking.get_untracked() {
            return;
        }

        let pickup = pickup_text.get().trim().to_string();
        let dropoff = dropoff_text.get().trim().to_string();
        if pickup.is_empty() || dropoff.is_empty() {
            toaster.error("Pickup and destination are both required");
            return;
        }

        booking.set(true);
        spawn_local(async move {
            let request = BookRideRequest {
                pickup_location: pickup,
                dropoff_location: dropoff,
            };
            match user::book_ride(&request).await {
                Ok(_) => {
                    toaster.success("Ride requested! A driver will pick it up shortly.");
                    pickup_text.set(String::new());
                    dropoff_text.set(String::new());
                    pickup_point.set(None);
                    dropoff_point.set(None);
                    load_rides();
                }
                Err(e) => toaster.error(format!("Booking failed: {e}")),
            }
            booking.set(false);
        });
    };

    view! {
        <Title text="Book a Ride - RideHail"/>
        <AppShell>
            <div class="grid lg:grid-cols-2 gap-8">
                // Booking panel
                <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6">
                    <h2 class="text-xl font-semibold text-gray-900 mb-4">"Book a Ride"</h2>
                    <p class="text-sm text-gray-500 mb-4">
                        "Click the map to drop pickup and destination pins, then describe both stops."
                    </p>

                    <RideMap pickup=pickup_point destination=dropoff_point/>

                    <form on:submit=on_book class="mt-4 space-y-4">
                        <input
                            type="text"
                            placeholder="Pickup address"
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                            prop:value=move || pickup_text.get()
                            on:input=move |ev| pickup_text.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Destination address"
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                            prop:value=move || dropoff_text.get()
                            on:input=move |ev| dropoff_text.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class="w-full py-2.5 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg disabled:opacity-50"
                            disabled=move || booking.get()
                        >
                            {move || if booking.get() { "Requesting..." } else { "Request Ride" }}
                        </button>
                    </form>
                </div>

                // Ride list panel
                <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6">
                    <h2 class="text-xl font-semibold text-gray-900 mb-4">"Your Rides"</h2>
                    {move || {
                        if loading_rides.get() {
                            view! { <p class="text-gray-500">"Loading rides..."</p> }.into_any()
                        } else if rides.get().is_empty() {
                            view! { <p class="text-gray-500">"No rides yet. Book your first one!"</p> }
                                .into_any()
                        } else {
                            view! {
                                <div class="space-y-4">
                                    {rides
                                        .get()
                                        .into_iter()
                                        .map(|ride| view! { <RideCard ride=ride paying=paying/> })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>

            // Fare payment
            {move || {
                paying.get().and_then(|ride| {
                    let fare = ride.fare?;
                    let amount = (fare * 100.0).round() as u64;
                    Some(view! {
                        <PaymentModal
                            amount=amount
                            on_success=Callback::new(move |_| {
                                paying.set(None);
                                load_rides();
                            })
                            on_close=Callback::new(move |_| paying.set(None))
                        />
                    })
                })
            }}
        </AppShell>
    }
}

/// One ride in the rider's list.
#[component]
fn RideCard(ride: Ride, paying: RwSignal<Option<Ride>>) -> impl IntoView {
    let status = ride.status;
    let payable = status == crate::core::rides::RideStatus::Completed && ride.fare.is_some();
    let ride_for_pay = ride.clone();

    view! {
        <div class="border border-gray-200 rounded-lg p-4">
            <div class="flex items-center justify-between mb-2">
                <span class=format!(
                    "px-2 py-0.5 text-xs font-medium rounded-full {}",
                    status.badge_class(),
                )>{status.label()}</span>
                {ride
                    .fare
                    .map(|fare| {
                        view! {
                            <span class="text-sm font-semibold text-gray-900">
                                {format!("${fare:.2}")}
                            </span>
                        }
                    })}
            </div>
            <p class="text-sm text-gray-700">
                <span class="font-medium">"From: "</span>
                {ride.pickup_location.clone()}
            </p>
            <p class="text-sm text-gray-700">
                <span class="font-medium">"To: "</span>
                {ride.dropoff_location.clone()}
            </p>
            {ride
                .driver
                .as_ref()
                .map(|driver| {
                    view! {
                        <div class="mt-3 pt-3 border-t border-gray-100 text-sm text-gray-600">
                            <p class="font-medium text-gray-800">{driver.full_name()}</p>
                            <p>
                                {format!(
                                    "{} {} · {}",
                                    driver.car_color,
                                    driver.car_type,
                                    driver.license_plate,
                                )}
                            </p>
                            <p>{driver.phone_number.clone()}</p>
                        </div>
                    }
                })}
            {payable
                .then(|| {
                    view! {
                        <button
                            class="mt-3 px-4 py-1.5 text-sm font-medium text-white bg-green-600 hover:bg-green-700 rounded-lg"
                            on:click=move |_| paying.set(Some(ride_for_pay.clone()))
                        >
                            "Pay Fare"
                        </button>
                    }
                })}
        </div>
    }
}
