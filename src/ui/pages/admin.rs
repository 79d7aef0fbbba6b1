//! Admin console: fleet stats, account lists, ride history, and driver
//! provisioning.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::core::rides::{DashboardStats, Ride};
use crate::core::session::{Account, Role};
use crate::ui::api::admin::{self, CreateDriverRequest};
use crate::ui::notifications::use_toaster;
use crate::ui::pages::layout::AppShell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Users,
    Drivers,
    Rides,
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let toaster = use_toaster();

    let accounts = RwSignal::new(Vec::<Account>::new());
    let rides = RwSignal::new(Vec::<Ride>::new());
    let loading = RwSignal::new(true);
    let tab = RwSignal::new(AdminTab::Users);
    let show_add_driver = RwSignal::new(false);

    let load_all = move || {
        spawn_local(async move {
            match admin::accounts().await {
                Ok(list) => accounts.set(list),
                Err(e) => toaster.error(format!("Failed to load accounts: {e}")),
            }
            match admin::ride_history().await {
                Ok(list) => rides.set(list),
                Err(e) => toaster.error(format!("Failed to load rides: {e}")),
            }
            loading.set(false);
        });
    };

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        load_all();
    });

    let stats = Memo::new(move |_| DashboardStats::compute(&accounts.get(), &rides.get()));

    let tab_button = move |value: AdminTab, label: &'static str| {
        view! {
            <button
                class=move || format!(
                    "px-4 py-2 text-sm font-medium rounded-lg {}",
                    if tab.get() == value {
                        "bg-blue-600 text-white"
                    } else {
                        "text-gray-600 hover:bg-gray-100"
                    },
                )
                on:click=move |_| tab.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <Title text="Admin Console - RideHail"/>
        <AppShell>
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold text-gray-900">"Admin Console"</h1>
                <button
                    class="px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 rounded-lg"
                    on:click=move |_| show_add_driver.set(true)
                >
                    "Add Driver"
                </button>
            </div>

            // Stats cards
            <div class="grid grid-cols-2 md:grid-cols-5 gap-4 mb-8">
                {move || {
                    let s = stats.get();
                    [
                        ("Riders", s.total_users),
                        ("Drivers", s.total_drivers),
                        ("Total Rides", s.total_rides),
                        ("Active Rides", s.active_rides),
                        ("Completed", s.completed_rides),
                    ]
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-4">
                                    <p class="text-sm text-gray-500">{label}</p>
                                    <p class="text-2xl font-bold text-gray-900">{value}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            // Tabs
            <div class="flex gap-2 mb-4">
                {tab_button(AdminTab::Users, "Riders")}
                {tab_button(AdminTab::Drivers, "Drivers")}
                {tab_button(AdminTab::Rides, "Ride History")}
            </div>

            <div class="bg-white rounded-xl border border-gray-200 shadow-sm overflow-hidden">
                {move || {
                    if loading.get() {
                        return view! { <p class="p-6 text-gray-500">"Loading..."</p> }.into_any();
                    }
                    match tab.get() {
                        AdminTab::Users => {
                            let riders: Vec<Account> = accounts
                                .get()
                                .into_iter()
                                .filter(|a| a.role() == Some(Role::User))
                                .collect();
                            view! { <AccountTable accounts=riders/> }.into_any()
                        }
                        AdminTab::Drivers => {
                            let drivers: Vec<Account> = accounts
                                .get()
                                .into_iter()
                                .filter(|a| a.role() == Some(Role::Driver))
                                .collect();
                            view! { <AccountTable accounts=drivers/> }.into_any()
                        }
                        AdminTab::Rides => view! { <RideTable rides=rides.get()/> }.into_any(),
                    }
                }}
            </div>

            {move || {
                show_add_driver
                    .get()
                    .then(|| {
                        view! {
                            <AddDriverModal
                                on_created=Callback::new(move |_| {
                                    show_add_driver.set(false);
                                    load_all();
                                })
                                on_close=Callback::new(move |_| show_add_driver.set(false))
                            />
                        }
                    })
            }}
        </AppShell>
    }
}

#[component]
fn AccountTable(accounts: Vec<Account>) -> impl IntoView {
    if accounts.is_empty() {
        return view! { <p class="p-6 text-gray-500">"No accounts in this category."</p> }
            .into_any();
    }
    view! {
        <table class="w-full text-sm">
            <thead class="bg-gray-50 text-left text-gray-500">
                <tr>
                    <th class="px-6 py-3 font-medium">"Name"</th>
                    <th class="px-6 py-3 font-medium">"Username"</th>
                    <th class="px-6 py-3 font-medium">"Email"</th>
                    <th class="px-6 py-3 font-medium">"Phone"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-gray-100">
                {accounts
                    .into_iter()
                    .map(|account| {
                        view! {
                            <tr>
                                <td class="px-6 py-3 text-gray-900 font-medium">
                                    {account.display_name()}
                                </td>
                                <td class="px-6 py-3 text-gray-700">{account.username.clone()}</td>
                                <td class="px-6 py-3 text-gray-700">{account.email.clone()}</td>
                                <td class="px-6 py-3 text-gray-700">
                                    {account.phone_number.clone()}
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

#[component]
fn RideTable(rides: Vec<Ride>) -> impl IntoView {
    if rides.is_empty() {
        return view! { <p class="p-6 text-gray-500">"No rides recorded."</p> }.into_any();
    }
    view! {
        <table class="w-full text-sm">
            <thead class="bg-gray-50 text-left text-gray-500">
                <tr>
                    <th class="px-6 py-3 font-medium">"Rider"</th>
                    <th class="px-6 py-3 font-medium">"Driver"</th>
                    <th class="px-6 py-3 font-medium">"Pickup"</th>
                    <th class="px-6 py-3 font-medium">"Destination"</th>
                    <th class="px-6 py-3 font-medium">"Fare"</th>
                    <th class="px-6 py-3 font-medium">"Status"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-gray-100">
                {rides
                    .into_iter()
                    .map(|ride| {
                        view! {
                            <tr>
                                <td class="px-6 py-3 text-gray-700">
                                    {ride
                                        .rider
                                        .as_ref()
                                        .map(|r| r.full_name())
                                        .unwrap_or_else(|| "—".to_string())}
                                </td>
                                <td class="px-6 py-3 text-gray-700">
                                    {ride
                                        .driver
                                        .as_ref()
                                        .map(|d| d.full_name())
                                        .unwrap_or_else(|| "—".to_string())}
                                </td>
                                <td class="px-6 py-3 text-gray-700">
                                    {ride.pickup_location.clone()}
                                </td>
                                <td class="px-6 py-3 text-gray-700">
                                    {ride.dropoff_location.clone()}
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

/// Modal for provisioning a driver account.
#[component]
fn AddDriverModal(
    #[prop(into)] on_created: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let toaster = use_toaster();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let car_type = RwSignal::new(String::new());
    let car_color = RwSignal::new(String::new());
    let license_plate = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        if username.get_untracked().trim().is_empty() || password.get_untracked().is_empty() {
            toaster.error("Username and password are required");
            return;
        }

        saving.set(true);
        spawn_local(async move {
            let request = CreateDriverRequest {
                username: username.get_untracked().trim().to_string(),
                password: password.get_untracked(),
                first_name: first_name.get_untracked().trim().to_string(),
                last_name: last_name.get_untracked().trim().to_string(),
                phone_number: phone_number.get_untracked().trim().to_string(),
                car_type: car_type.get_untracked().trim().to_string(),
                car_color: car_color.get_untracked().trim().to_string(),
                license_plate: license_plate.get_untracked().trim().to_string(),
            };
            match admin::create_driver(&request).await {
                Ok(account) => {
                    toaster.success(format!("Driver {} created", account.username));
                    on_created.run(());
                }
                Err(e) => toaster.error(format!("Failed to create driver: {e}")),
            }
            saving.set(false);
        });
    };

    let field = move |signal: RwSignal<String>,
                      placeholder: &'static str,
                      input_type: &'static str| {
        view! {
            <input
                type=input_type
                placeholder=placeholder
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div class="absolute inset-0 bg-black/50" on:click=move |_| on_close.run(())></div>

            <div class="relative w-full max-w-lg bg-white rounded-xl shadow-xl p-6">
                <h2 class="text-xl font-semibold text-gray-900 mb-4">"Add Driver"</h2>

                <form on:submit=on_submit class="space-y-4">
                    <div class="grid grid-cols-2 gap-4">
                        {field(first_name, "First name", "text")}
                        {field(last_name, "Last name", "text")}
                    </div>
                    {field(username, "Username", "text")}
                    {field(password, "Password", "password")}
                    {field(phone_number, "Phone number", "tel")}
                    <div class="grid grid-cols-3 gap-4">
                        {field(car_type, "Car model", "text")}
                        {field(car_color, "Color", "text")}
                        {field(license_plate, "Plate", "text")}
                    </div>

                    <div class="flex justify-end gap-3 pt-2">
                        <button
                            type="button"
                            class="px-4 py-2 text-sm font-medium text-gray-700 bg-gray-100 hover:bg-gray-200 rounded-lg"
                            on:click=move |_| on_close.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 rounded-lg disabled:opacity-50"
                            disabled=move || saving.get()
                        >
                            {move || if saving.get() { "Creating..." } else { "Create Driver" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
