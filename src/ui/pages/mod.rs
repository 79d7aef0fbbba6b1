pub mod admin;
pub mod book;
pub mod driver;
pub mod home;
pub mod layout;
pub mod login;
pub mod not_found;
pub mod register;
pub mod rides;

pub use admin::AdminPage;
pub use book::BookPage;
pub use driver::DriverPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use rides::RidesPage;
