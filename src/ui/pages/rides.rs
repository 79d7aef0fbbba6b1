//! Rider ride history with live driver tracking.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::core::rides::{GeoPoint, Ride};
use crate::ui::api::payment::{self, PaymentRecord};
use crate::ui::api::user;
use crate::ui::map::RideMap;
use crate::ui::notifications::use_toaster;
use crate::ui::pages::layout::AppShell;
use crate::ui::realtime::use_realtime_context;
use crate::ui::session::use_session_context;

#[component]
pub fn RidesPage() -> impl IntoView {
    let toaster = use_toaster();
    let session = use_session_context();
    let realtime = use_realtime_context();

    let rides = RwSignal::new(Vec::<Ride>::new());
    let payments = RwSignal::new(Vec::<PaymentRecord>::new());
    let loading = RwSignal::new(true);

    // Driver currently subscribed to on the channel
    let tracked_driver = RwSignal::new(None::<i64>);

    // Pins for the tracking map; set from the active ride's locations when
    // they carry the "lat,lng" pin encoding (typed addresses carry none)
    let pickup_pin = RwSignal::new(None::<GeoPoint>);
    let dropoff_pin = RwSignal::new(None::<GeoPoint>);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        spawn_local(async move {
            match user::my_rides().await {
                Ok(list) => {
                    let _ = rides.try_set(list);
                }
                Err(e) => toaster.error(format!("Failed to load rides: {e}")),
            }
            // Payment history is secondary; a failure here is not worth a toast
            if let Ok(list) = payment::history().await {
                let _ = payments.try_set(list);
            }
            let _ = loading.try_set(false);
        });
    });

    // Follow the active ride's driver while one exists.
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        let active = rides.get().iter().find(|r| r.status.is_active()).cloned();

        pickup_pin.set(
            active
                .as_ref()
                .and_then(|r| GeoPoint::parse(&r.pickup_location)),
        );
        dropoff_pin.set(
            active
                .as_ref()
                .and_then(|r| GeoPoint::parse(&r.dropoff_location)),
        );

        let active_driver = active
            .as_ref()
            .and_then(|r| r.driver.as_ref())
            .and_then(|d| d.id);

        let previous = tracked_driver.get_untracked();
        if active_driver == previous {
            return;
        }

        if let Some(old) = previous {
            realtime.unsubscribe_driver_location(old);
        }
        if let Some(new) = active_driver {
            if let Some(credential) = session.credential() {
                realtime.connect(credential);
            }
            realtime.subscribe_driver_location(new);
        }
        tracked_driver.set(active_driver);
    });

    on_cleanup(move || {
        if let Some(id) = tracked_driver.get_untracked() {
            realtime.unsubscribe_driver_location(id);
        }
    });

    let driver_position = Signal::derive(move || {
        tracked_driver
            .get()
            .and_then(|id| realtime.driver_positions.get().get(&id).copied())
    });

    view! {
        <Title text="My Rides - RideHail"/>
        <AppShell>
            <h1 class="text-2xl font-bold text-gray-900 mb-6">"My Rides"</h1>

            // Live tracking map shown while a ride is active
            {move || {
                tracked_driver
                    .get()
                    .map(|_| {
                        view! {
                            <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6 mb-8">
                                <h2 class="text-lg font-semibold text-gray-900 mb-2">
                                    "Your driver is on the way"
                                </h2>
                                <p class="text-sm text-gray-500 mb-4">
                                    "Position updates live while the ride is active."
                                </p>
                                <RideMap
                                    pickup=pickup_pin
                                    destination=dropoff_pin
                                    interactive=false
                                    driver=driver_position
                                />
                            </div>
                        }
                    })
            }}

            <div class="bg-white rounded-xl border border-gray-200 shadow-sm overflow-hidden">
                {move || {
                    if loading.get() {
                        view! { <p class="p-6 text-gray-500">"Loading rides..."</p> }.into_any()
                    } else if rides.get().is_empty() {
                        view! { <p class="p-6 text-gray-500">"No rides yet."</p> }.into_any()
                    } else {
                        view! {
                            <table class="w-full text-sm">
                                <thead class="bg-gray-50 text-left text-gray-500">
                                    <tr>
                                        <th class="px-6 py-3 font-medium">"Pickup"</th>
                                        <th class="px-6 py-3 font-medium">"Destination"</th>
                                        <th class="px-6 py-3 font-medium">"Driver"</th>
                                        <th class="px-6 py-3 font-medium">"Fare"</th>
                                        <th class="px-6 py-3 font-medium">"Status"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-gray-100">
                                    {rides
                                        .get()
                                        .into_iter()
                                        .map(|ride| {
                                            view! {
                                                <tr>
                                                    <td class="px-6 py-3 text-gray-700">
                                                        {ride.pickup_location.clone()}
                                                    </td>
                                                    <td class="px-6 py-3 text-gray-700">
                                                        {ride.dropoff_location.clone()}
                                                    </td>
                                                    <td class="px-6 py-3 text-gray-700">
                                                        {ride
                                                            .driver
                                                            .as_ref()
                                                            .map(|d| d.full_name())
                                                            .unwrap_or_else(|| "—".to_string())}
                                                    </td>
                                                    <td class="px-6 py-3 text-gray-700">
                                                        {ride
                                                            .fare
                                                            .map(|f| format!("${f:.2}"))
                                                            .unwrap_or_else(|| "—".to_string())}
                                                    </td>
                                                    <td class="px-6 py-3">
                                                        <span class=format!(
                                                            "px-2 py-0.5 text-xs font-medium rounded-full {}",
                                                            ride.status.badge_class(),
                                                        )>{ride.status.label()}</span>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                }}
            </div>

            // Payment history
            {move || {
                let list = payments.get();
                (!list.is_empty())
                    .then(|| {
                        view! {
                            <div class="bg-white rounded-xl border border-gray-200 shadow-sm overflow-hidden mt-8">
                                <h2 class="px-6 pt-5 text-lg font-semibold text-gray-900">
                                    "Payments"
                                </h2>
                                <table class="w-full text-sm mt-3">
                                    <thead class="bg-gray-50 text-left text-gray-500">
                                        <tr>
                                            <th class="px-6 py-3 font-medium">"Date"</th>
                                            <th class="px-6 py-3 font-medium">"Amount"</th>
                                            <th class="px-6 py-3 font-medium">"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-gray-100">
                                        {list
                                            .into_iter()
                                            .map(|record| {
                                                view! {
                                                    <tr>
                                                        <td class="px-6 py-3 text-gray-700">
                                                            {record.created_at.clone()}
                                                        </td>
                                                        <td class="px-6 py-3 text-gray-700">
                                                            {format!("${:.2}", record.amount as f64 / 100.0)}
                                                        </td>
                                                        <td class="px-6 py-3 text-gray-700">
                                                            {record.status.clone()}
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }
                    })
            }}
        </AppShell>
    }
}
