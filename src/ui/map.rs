//! Map widget.
//!
//! A lightweight SVG map: pickup and destination markers, an optional live
//! driver marker, and click-to-set when interactive (first click places the
//! pickup, second the destination). Purely presentational; coordinates come
//! from and go back to the caller.

use leptos::prelude::*;

use crate::core::rides::GeoPoint;

/// Default viewport center when nothing is placed yet (central London).
const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 51.5074,
    lng: -0.1278,
};

/// Degrees of latitude/longitude spanned by the viewport.
const LAT_SPAN: f64 = 0.12;
const LNG_SPAN: f64 = 0.24;

const VIEW_WIDTH: f64 = 600.0;
const VIEW_HEIGHT: f64 = 400.0;

fn project(center: GeoPoint, point: GeoPoint) -> (f64, f64) {
    let x = (point.lng - center.lng + LNG_SPAN / 2.0) / LNG_SPAN * VIEW_WIDTH;
    // Latitude grows north, screen y grows down.
    let y = (center.lat - point.lat + LAT_SPAN / 2.0) / LAT_SPAN * VIEW_HEIGHT;
    (x, y)
}

fn unproject(center: GeoPoint, x: f64, y: f64) -> GeoPoint {
    GeoPoint {
        lat: center.lat + LAT_SPAN / 2.0 - y / VIEW_HEIGHT * LAT_SPAN,
        lng: center.lng - LNG_SPAN / 2.0 + x / VIEW_WIDTH * LNG_SPAN,
    }
}

/// Map component with pickup/destination markers.
#[component]
pub fn RideMap(
    /// Pickup marker; set by clicking when interactive
    pickup: RwSignal<Option<GeoPoint>>,
    /// Destination marker; set by the second click when interactive
    destination: RwSignal<Option<GeoPoint>>,
    /// Whether clicks place markers
    #[prop(default = true)]
    interactive: bool,
    /// Live driver position to render, if any
    #[prop(optional, into)]
    driver: Option<Signal<Option<GeoPoint>>>,
) -> impl IntoView {
    let center = move || pickup.get().unwrap_or(DEFAULT_CENTER);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if !interactive {
            return;
        }
        let point = unproject(center(), ev.offset_x() as f64, ev.offset_y() as f64);
        if pickup.get_untracked().is_none() {
            pickup.set(Some(point));
        } else if destination.get_untracked().is_none() {
            destination.set(Some(point));
        }
    };

    let marker = move |point: GeoPoint, label: &'static str, fill: &'static str| {
        let (x, y) = project(center(), point);
        view! {
            <g>
                <circle cx=x cy=y r="10" fill=fill stroke="white" stroke-width="2"/>
                <text
                    x=x
                    y=y + 4.0
                    text-anchor="middle"
                    font-size="11"
                    fill="white"
                    font-weight="bold"
                >
                    {label}
                </text>
            </g>
        }
    };

    view! {
        <svg
            viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
            class="w-full h-96 bg-gray-100 rounded-lg border border-gray-300 cursor-crosshair"
            on:click=on_click
        >
            // Simple street grid backdrop
            {(1..8).map(|i| {
                let y = i as f64 * VIEW_HEIGHT / 8.0;
                view! { <line x1="0" y1=y x2=VIEW_WIDTH y2=y stroke="#d1d5db" stroke-width="1"/> }
            }).collect_view()}
            {(1..12).map(|i| {
                let x = i as f64 * VIEW_WIDTH / 12.0;
                view! { <line x1=x y1="0" x2=x y2=VIEW_HEIGHT stroke="#d1d5db" stroke-width="1"/> }
            }).collect_view()}

            // Route line once both ends are placed
            {move || {
                match (pickup.get(), destination.get()) {
                    (Some(from), Some(to)) => {
                        let (x1, y1) = project(center(), from);
                        let (x2, y2) = project(center(), to);
                        Some(view! {
                            <line
                                x1=x1 y1=y1 x2=x2 y2=y2
                                stroke="#2563eb" stroke-width="3" stroke-dasharray="8 4"
                            />
                        })
                    }
                    _ => None,
                }
            }}

            {move || pickup.get().map(|p| marker(p, "P", "#16a34a"))}
            {move || destination.get().map(|p| marker(p, "D", "#dc2626"))}
            {move || {
                driver
                    .and_then(|d| d.get())
                    .map(|p| marker(p, "T", "#f59e0b"))
            }}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_and_unproject_are_inverse() {
        let point = GeoPoint {
            lat: 51.49,
            lng: -0.10,
        };
        let (x, y) = project(DEFAULT_CENTER, point);
        let back = unproject(DEFAULT_CENTER, x, y);
        assert!((back.lat - point.lat).abs() < 1e-9);
        assert!((back.lng - point.lng).abs() < 1e-9);
    }

    #[test]
    fn viewport_center_projects_to_the_middle() {
        let (x, y) = project(DEFAULT_CENTER, DEFAULT_CENTER);
        assert!((x - VIEW_WIDTH / 2.0).abs() < 1e-9);
        assert!((y - VIEW_HEIGHT / 2.0).abs() < 1e-9);
    }
}
