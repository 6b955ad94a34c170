pub mod admin_dashboard;
pub mod admin_login;
pub mod booking;
pub mod home;
pub mod not_found;
pub mod search_bar;

pub use admin_dashboard::AdminDashboard;
pub use admin_login::AdminLoginPage;
pub use booking::BookingPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use search_bar::SearchBar;
