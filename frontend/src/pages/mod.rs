pub mod calendar;
pub mod dashboard;
pub mod login;
pub mod users;
pub mod vacations;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
