//! Realtime channel client for driver location streaming.
//!
//! This is the companion channel to the REST gateway: it authenticates with
//! the same bearer credential but has a fully independent lifecycle. Drivers
//! emit their position on a fixed interval while sharing is on; riders
//! subscribe to a driver's stream while a ride is active. The socket handle
//! and the emission timer live in thread-local cells and are released
//! explicitly so neither outlives its consumer.

use std::collections::HashMap;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::rides::GeoPoint;

/// How often a sharing driver emits its position.
#[cfg(not(feature = "ssr"))]
const LOCATION_UPDATE_INTERVAL_MS: u32 = 10_000;

/// Connection state for the realtime channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Error,
}

/// Events emitted by this client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    Auth { token: String },
    LocationUpdate { latitude: f64, longitude: f64 },
    SubscribeToDriver { driver_id: i64 },
    UnsubscribeFromDriver { driver_id: i64 },
}

/// Events consumed by this client.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    DriverLocation {
        driver_id: i64,
        latitude: f64,
        longitude: f64,
    },
}

/// Realtime context provided to the component tree.
#[derive(Clone, Copy)]
pub struct RealtimeContext {
    /// Current connection state
    pub connection_state: RwSignal<ConnectionState>,
    /// Latest known position per subscribed driver
    pub driver_positions: RwSignal<HashMap<i64, GeoPoint>>,
    /// Whether the periodic location emitter is running
    pub sharing_location: RwSignal<bool>,
    /// Error message (if any)
    pub error: RwSignal<Option<String>>,
}

impl RealtimeContext {
    fn new() -> Self {
        Self {
            connection_state: RwSignal::new(ConnectionState::Disconnected),
            driver_positions: RwSignal::new(HashMap::new()),
            sharing_location: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Open the channel, authenticating with the session credential.
    #[cfg(not(feature = "ssr"))]
    pub fn connect(&self, token: String) {
        use leptos::web_sys::{CloseEvent, ErrorEvent, MessageEvent, WebSocket};
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        if self.connection_state.get_untracked() != ConnectionState::Disconnected {
            return;
        }

        self.connection_state.set(ConnectionState::Connecting);
        self.error.set(None);

        // Configured socket endpoint when the deployment injected one,
        // otherwise same-origin /ws (reverse-proxied deployments).
        let ws_url = crate::ui::deployment::socket_url().unwrap_or_else(|| {
            let window = leptos::web_sys::window().expect("no window");
            let location = window.location();
            let protocol = if location.protocol().unwrap_or_default() == "https:" {
                "wss:"
            } else {
                "ws:"
            };
            let host = location
                .host()
                .unwrap_or_else(|_| "localhost:3000".to_string());
            format!("{}//{}/ws", protocol, host)
        });

        let ws = match WebSocket::new(&ws_url) {
            Ok(ws) => ws,
            Err(e) => {
                self.connection_state.set(ConnectionState::Error);
                self.error
                    .set(Some(format!("Failed to open channel: {:?}", e)));
                return;
            }
        };

        let ctx = *self;

        // onopen: authenticate before anything else flows
        let ws_clone = ws.clone();
        let onopen = Closure::wrap(Box::new(move |_: leptos::web_sys::Event| {
            let auth = ClientEvent::Auth {
                token: token.clone(),
            };
            if let Ok(json) = serde_json::to_string(&auth) {
                let _ = ws_clone.send_with_str(&json);
            }
            ctx.connection_state.set(ConnectionState::Connected);
        }) as Box<dyn FnMut(leptos::web_sys::Event)>);
        ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
        onopen.forget();

        // onmessage
        let onmessage = Closure::wrap(Box::new(move |e: MessageEvent| {
            if let Some(text) = e.data().as_string() {
                handle_event(&ctx, &text);
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        onmessage.forget();

        // onclose: the emitter must not keep firing into a dead socket
        let onclose = Closure::wrap(Box::new(move |_: CloseEvent| {
            ctx.stop_location_updates();
            ctx.connection_state.set(ConnectionState::Disconnected);
            ctx.driver_positions.set(HashMap::new());
        }) as Box<dyn FnMut(CloseEvent)>);
        ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));
        onclose.forget();

        // onerror
        let onerror = Closure::wrap(Box::new(move |_: ErrorEvent| {
            ctx.connection_state.set(ConnectionState::Error);
            ctx.error.set(Some("Realtime channel error".to_string()));
        }) as Box<dyn FnMut(ErrorEvent)>);
        ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        store_socket(ws);
    }

    /// Connect stub for SSR
    #[cfg(feature = "ssr")]
    pub fn connect(&self, _token: String) {
        // No-op on server
    }

    /// Close the channel and stop the location emitter.
    #[cfg(not(feature = "ssr"))]
    pub fn disconnect(&self) {
        self.stop_location_updates();
        close_socket();
        self.connection_state.set(ConnectionState::Disconnected);
        self.driver_positions.set(HashMap::new());
        self.error.set(None);
    }

    /// Disconnect stub for SSR
    #[cfg(feature = "ssr")]
    pub fn disconnect(&self) {
        self.connection_state.set(ConnectionState::Disconnected);
        self.driver_positions.set(HashMap::new());
    }

    /// Start emitting the device position every 10 seconds (drivers).
    #[cfg(not(feature = "ssr"))]
    pub fn start_location_updates(&self) {
        use gloo_timers::callback::Interval;

        if self.sharing_location.get_untracked() {
            return;
        }

        let interval = Interval::new(LOCATION_UPDATE_INTERVAL_MS, emit_current_position);
        LOCATION_TIMER.with(|cell| {
            *cell.borrow_mut() = Some(interval);
        });
        self.sharing_location.set(true);
    }

    /// Start stub for SSR
    #[cfg(feature = "ssr")]
    pub fn start_location_updates(&self) {
        // No-op on server
    }

    /// Stop the periodic emitter. Idempotent; dropping the interval cancels it.
    #[cfg(not(feature = "ssr"))]
    pub fn stop_location_updates(&self) {
        LOCATION_TIMER.with(|cell| {
            cell.borrow_mut().take();
        });
        self.sharing_location.set(false);
    }

    /// Stop stub for SSR
    #[cfg(feature = "ssr")]
    pub fn stop_location_updates(&self) {
        self.sharing_location.set(false);
    }

    /// Follow a driver's position stream (riders).
    pub fn subscribe_driver_location(&self, driver_id: i64) {
        send_event(&ClientEvent::SubscribeToDriver { driver_id });
    }

    /// Stop following a driver and drop its cached position.
    pub fn unsubscribe_driver_location(&self, driver_id: i64) {
        send_event(&ClientEvent::UnsubscribeFromDriver { driver_id });
        self.driver_positions.update(|positions| {
            positions.remove(&driver_id);
        });
    }
}

/// Provide the realtime context to the component tree
pub fn provide_realtime_context() -> RealtimeContext {
    let ctx = RealtimeContext::new();
    provide_context(ctx);
    ctx
}

/// Get the realtime context from the component tree
pub fn use_realtime_context() -> RealtimeContext {
    expect_context::<RealtimeContext>()
}

/// Handle one incoming channel event
#[cfg(not(feature = "ssr"))]
fn handle_event(ctx: &RealtimeContext, text: &str) {
    match serde_json::from_str::<ServerEvent>(text) {
        Ok(ServerEvent::DriverLocation {
            driver_id,
            latitude,
            longitude,
        }) => {
            ctx.driver_positions.update(|positions| {
                positions.insert(
                    driver_id,
                    GeoPoint {
                        lat: latitude,
                        lng: longitude,
                    },
                );
            });
        }
        Err(e) => {
            leptos::logging::warn!("unrecognized channel event: {}", e);
        }
    }
}

/// Read the device position once and emit it on the channel.
#[cfg(not(feature = "ssr"))]
fn emit_current_position() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(geolocation) = window.navigator().geolocation() else {
        return;
    };

    let on_position = Closure::wrap(Box::new(move |position: web_sys::Position| {
        let coords = position.coords();
        let point = GeoPoint {
            lat: coords.latitude(),
            lng: coords.longitude(),
        };
        send_event(&ClientEvent::LocationUpdate {
            latitude: point.lat,
            longitude: point.lng,
        });
        // REST mirror: dispatch keeps a last-known position even when no
        // rider is subscribed to the stream.
        leptos::task::spawn_local(async move {
            let _ = crate::ui::api::driver::update_location(&point).await;
        });
    }) as Box<dyn FnMut(web_sys::Position)>);

    let on_error = Closure::wrap(Box::new(move |e: web_sys::PositionError| {
        leptos::logging::warn!("geolocation unavailable: {}", e.message());
    }) as Box<dyn FnMut(web_sys::PositionError)>);

    let _ = geolocation.get_current_position_with_error_callback(
        on_position.as_ref().unchecked_ref(),
        Some(on_error.as_ref().unchecked_ref()),
    );
    on_position.forget();
    on_error.forget();
}

// Channel handles live in thread_local cells: single-threaded WASM, one
// socket and at most one emission timer at a time.
#[cfg(not(feature = "ssr"))]
thread_local! {
    static SOCKET: std::cell::RefCell<Option<leptos::web_sys::WebSocket>> =
        const { std::cell::RefCell::new(None) };
    static LOCATION_TIMER: std::cell::RefCell<Option<gloo_timers::callback::Interval>> =
        const { std::cell::RefCell::new(None) };
}

#[cfg(not(feature = "ssr"))]
fn store_socket(ws: leptos::web_sys::WebSocket) {
    SOCKET.with(|cell| {
        *cell.borrow_mut() = Some(ws);
    });
}

#[cfg(not(feature = "ssr"))]
fn close_socket() {
    SOCKET.with(|cell| {
        if let Some(ws) = cell.borrow_mut().take() {
            let _ = ws.close();
        }
    });
}

#[cfg(not(feature = "ssr"))]
fn send_event(event: &ClientEvent) {
    SOCKET.with(|cell| {
        if let Some(ref ws) = *cell.borrow() {
            if ws.ready_state() == leptos::web_sys::WebSocket::OPEN {
                if let Ok(json) = serde_json::to_string(event) {
                    let _ = ws.send_with_str(&json);
                }
            }
        }
    });
}

#[cfg(feature = "ssr")]
fn send_event(_event: &ClientEvent) {
    // No-op on server
}
