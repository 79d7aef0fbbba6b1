pub mod api;
pub mod deployment;
pub mod map;
pub mod notifications;
pub mod pages;
pub mod payment_modal;
pub mod realtime;
pub mod session;

pub use map::RideMap;
pub use notifications::{Toaster, ToasterContainer, provide_toaster, use_toaster};
pub use payment_modal::PaymentModal;
pub use realtime::{provide_realtime_context, use_realtime_context};
