pub mod admin_page;
pub mod app;
pub mod dashboard_page;
pub mod edit_profile_page;
pub mod feedback;
pub mod form_input;
pub mod header;
pub mod home_page;
pub mod info_item;
pub mod login_page;
pub mod my_page;
pub mod noise_chart;
pub mod noise_table;
pub mod sidebar;
pub mod signup_page;
pub mod toast_container;
pub mod toggle_item;

pub use admin_page::AdminPage;
pub use app::{App, Screen};
pub use dashboard_page::DashboardPage;
pub use edit_profile_page::EditProfilePage;
pub use feedback::{ErrorPanel, LoadingPanel, NoAccessPanel, RedirectingPanel};
pub use form_input::FormInput;
pub use header::Header;
pub use home_page::HomePage;
pub use info_item::InfoItem;
pub use login_page::LoginPage;
pub use my_page::MyPage;
pub use noise_chart::NoiseChart;
pub use noise_table::NoiseTable;
pub use sidebar::Sidebar;
pub use signup_page::SignupPage;
pub use toast_container::ToastContainer;
pub use toggle_item::ToggleItem;
