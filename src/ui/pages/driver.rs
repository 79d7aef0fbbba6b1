//! Driver dashboard.
//!
//! Polls the assigned-ride list every 30 seconds (skipping a tick when a
//! refresh is already in flight), exposes the accept/start/complete actions,
//! and hosts the availability, vehicle and location-sharing controls.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::core::rides::{CarDetails, Ride};
use crate::ui::api::driver;
use crate::ui::notifications::use_toaster;
use crate::ui::pages::layout::AppShell;
use crate::ui::realtime::use_realtime_context;
use crate::ui::session::use_session_context;

#[cfg(not(feature = "ssr"))]
const POLL_INTERVAL_MS: u32 = 30_000;

#[component]
pub fn DriverPage() -> impl IntoView {
    let toaster = use_toaster();
    let session = use_session_context();
    let realtime = use_realtime_context();

    let rides = RwSignal::new(Vec::<Ride>::new());
    let loading = RwSignal::new(true);
    // Skip a poll tick while a refresh or an action is still in flight
    let busy = RwSignal::new(false);
    let available = RwSignal::new(false);

    // The poll loop and in-flight responses can outlive this component's
    // reactive owner; every signal touch on those paths goes through the
    // try_ variants so a disposed signal reads as "stop" instead of panicking.
    let refresh = move || {
        if busy.try_get_untracked().unwrap_or(true) {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            match driver::assigned_rides().await {
                Ok(list) => {
                    let _ = rides.try_set(list);
                }
                Err(e) => toaster.error(format!("Failed to load rides: {e}")),
            }
            let _ = loading.try_set(false);
            let _ = busy.try_set(false);
        });
    };

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;

        let alive = RwSignal::new(true);
        on_cleanup(move || {
            let _ = alive.try_set(false);
        });

        Effect::new(move |_| {
            refresh();
            // Seed the availability toggle from the backend's current flag,
            // so a reloaded page does not show an available driver as offline.
            spawn_local(async move {
                if let Ok(me) = crate::ui::api::auth::me().await {
                    let _ = available.try_set(me.is_available.unwrap_or(false));
                }
            });
            spawn_local(async move {
                loop {
                    TimeoutFuture::new(POLL_INTERVAL_MS).await;
                    if !alive.try_get_untracked().unwrap_or(false) {
                        break;
                    }
                    refresh();
                }
            });
        });
    }

    let on_toggle_availability = move |_| {
        let next = !available.get_untracked();
        spawn_local(async move {
            match driver::set_availability(next).await {
                Ok(_) => {
                    available.set(next);
                    toaster.success(if next {
                        "You are now accepting rides"
                    } else {
                        "You are now offline"
                    });
                }
                Err(e) => toaster.error(format!("Failed to update availability: {e}")),
            }
        });
    };

    let on_toggle_sharing = move |_| {
        if realtime.sharing_location.get_untracked() {
            realtime.stop_location_updates();
            toaster.info("Location sharing stopped");
        } else {
            if let Some(credential) = session.credential() {
                realtime.connect(credential);
            }
            realtime.start_location_updates();
            toaster.success("Sharing your location with riders");
        }
    };

    view! {
        <Title text="Driver Dashboard - RideHail"/>
        <AppShell>
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold text-gray-900">"Driver Dashboard"</h1>
                <div class="flex items-center gap-3">
                    <button
                        class=move || format!(
                            "px-4 py-2 text-sm font-medium rounded-lg border {}",
                            if realtime.sharing_location.get() {
                                "bg-green-600 text-white border-green-600"
                            } else {
                                "bg-white text-gray-700 border-gray-300 hover:bg-gray-50"
                            },
                        )
                        on:click=on_toggle_sharing
                    >
                        {move || {
                            if realtime.sharing_location.get() {
                                "Sharing Location"
                            } else {
                                "Share Location"
                            }
                        }}
                    </button>
                    <button
                        class=move || format!(
                            "px-4 py-2 text-sm font-medium rounded-lg border {}",
                            if available.get() {
                                "bg-blue-600 text-white border-blue-600"
                            } else {
                                "bg-white text-gray-700 border-gray-300 hover:bg-gray-50"
                            },
                        )
                        on:click=on_toggle_availability
                    >
                        {move || if available.get() { "Available" } else { "Go Available" }}
                    </button>
                </div>
            </div>

            <div class="grid lg:grid-cols-3 gap-8">
                // Ride queue
                <div class="lg:col-span-2 bg-white rounded-xl border border-gray-200 shadow-sm p-6">
                    <h2 class="text-lg font-semibold text-gray-900 mb-4">"Your Rides"</h2>
                    {move || {
                        if loading.get() {
                            view! { <p class="text-gray-500">"Loading rides..."</p> }.into_any()
                        } else if rides.get().is_empty() {
                            view! {
                                <p class="text-gray-500">
                                    "No rides right now. New requests appear automatically."
                                </p>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="space-y-4">
                                    {rides
                                        .get()
                                        .into_iter()
                                        .map(|ride| {
                                            view! { <DriverRideCard ride=ride busy=busy on_changed=refresh/> }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>

                // Vehicle details
                <CarDetailsForm/>
            </div>
        </AppShell>
    }
}

/// One ride with its lifecycle action, when the status permits one.
#[component]
fn DriverRideCard(
    ride: Ride,
    busy: RwSignal<bool>,
    on_changed: impl Fn() + Copy + Send + 'static,
) -> impl IntoView {
    let toaster = use_toaster();
    let status = ride.status;
    let ride_id = ride.id;

    let action: Option<(&'static str, &'static str)> = if status.can_accept() {
        Some(("Accept", "bg-blue-600 hover:bg-blue-700"))
    } else if status.can_start() {
        Some(("Start Ride", "bg-indigo-600 hover:bg-indigo-700"))
    } else if status.can_complete() {
        Some(("Complete Ride", "bg-green-600 hover:bg-green-700"))
    } else {
        None
    };

    let run_action = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            let result = if status.can_accept() {
                driver::accept_ride(ride_id).await
            } else if status.can_start() {
                driver::start_ride(ride_id).await
            } else {
                driver::complete_ride(ride_id).await
            };
            match result {
                Ok(updated) => toaster.success(format!("Ride is now {}", updated.status.label())),
                Err(e) => toaster.error(format!("Action failed: {e}")),
            }
            let _ = busy.try_set(false);
            on_changed();
        });
    };

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
                .rider
                .as_ref()
                .map(|rider| {
                    view! {
                        <p class="mt-2 text-sm text-gray-600">
                            {format!("Rider: {} · {}", rider.full_name(), rider.phone_number)}
                        </p>
                    }
                })}
            {action
                .map(|(label, color)| {
                    view! {
                        <button
                            class=format!(
                                "mt-3 px-4 py-1.5 text-sm font-medium text-white rounded-lg {color}",
                            )
                            on:click=run_action
                        >
                            {label}
                        </button>
                    }
                })}
        </div>
    }
}

/// Vehicle details editor.
#[component]
fn CarDetailsForm() -> impl IntoView {
    let toaster = use_toaster();

    let car_type = RwSignal::new(String::new());
    let car_color = RwSignal::new(String::new());
    let license_plate = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        spawn_local(async move {
            let details = CarDetails {
                car_type: car_type.get_untracked().trim().to_string(),
                car_color: car_color.get_untracked().trim().to_string(),
                license_plate: license_plate.get_untracked().trim().to_string(),
            };
            match driver::update_car(&details).await {
                Ok(_) => toaster.success("Vehicle details saved"),
                Err(e) => toaster.error(format!("Failed to save vehicle details: {e}")),
            }
            let _ = saving.try_set(false);
        });
    };

    let field = move |signal: RwSignal<String>, placeholder: &'static str| {
        view! {
            <input
                type="text"
                placeholder=placeholder
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-6">
            <h2 class="text-lg font-semibold text-gray-900 mb-4">"Your Vehicle"</h2>
            <form on:submit=on_save class="space-y-4">
                {field(car_type, "Car model (e.g. Toyota Prius)")}
                {field(car_color, "Color")}
                {field(license_plate, "License plate")}
                <button
                    type="submit"
                    class="w-full py-2 bg-gray-800 hover:bg-gray-900 text-white font-medium rounded-lg disabled:opacity-50"
                    disabled=move || saving.get()
                >
                    {move || if saving.get() { "Saving..." } else { "Save Vehicle" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use leptos::prelude::*;

    // The poll loop keeps ticking after navigation disposes the page's
    // reactive owner. The liveness flag must then read as "stop", not panic.
    #[test]
    fn disposed_liveness_flag_reads_as_stopped() {
        let owner = Owner::new();
        let alive = owner.with(|| RwSignal::new(true));
        assert_eq!(alive.try_get_untracked(), Some(true));

        drop(owner);
        assert_eq!(alive.try_get_untracked(), None);
        assert!(!alive.try_get_untracked().unwrap_or(false));
    }

    // Writes racing disposal (a response landing after navigation) must be
    // inert rather than fatal.
    #[test]
    fn disposed_signal_write_is_inert() {
        let root = Owner::new();
        let owner = root.with(Owner::new);
        let busy = owner.with(|| RwSignal::new(false));
        drop(owner);
        assert!(busy.try_set(true).is_some());
        drop(root);
    }
}
