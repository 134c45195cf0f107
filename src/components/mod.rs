pub mod app;
pub mod dashboard;
pub mod login;
pub mod order_row;
pub mod protected;

pub use app::App;
pub use dashboard::AdminDashboard;
pub use login::AdminLogin;
pub use order_row::OrderRow;
pub use protected::ProtectedRoute;
