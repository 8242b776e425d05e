pub mod admin_service;
pub mod api;
pub mod auth_service;
pub mod device_service;
pub mod user_service;

pub use admin_service::{change_role, fetch_user_by_email, fetch_users};
pub use api::{api_request, ApiError, ErrorCode, Method, RequestOptions};
pub use auth_service::{login, signup};
pub use device_service::fetch_device_list;
pub use user_service::{
    delete_account, fetch_my_profile, update_notice, update_profile, NoticeUpdate, ProfileUpdate,
};
