pub mod admin;
pub mod auth;
pub mod noise;
pub mod user;

pub use admin::Pagination;
pub use auth::{LoginRequest, SignupData, SignupRequest, TokenPair};
pub use noise::{
    flatten_device_list, format_datetime, format_time, recent_events, sort_events_for_chart,
    DeviceListItem, NoiseEvent,
};
pub use user::UserProfile;
