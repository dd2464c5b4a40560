pub mod access_levels;
pub mod admin_complaints;
pub mod complaints;
pub mod dashboard;
pub mod home;
pub mod news;
pub mod properties;
pub mod reports;
pub mod users;

pub use access_levels::access_levels_page;
pub use admin_complaints::admin_complaints_page;
pub use complaints::complaints_page;
pub use dashboard::dashboard_page;
pub use home::home_page;
pub use news::news_page;
pub use properties::properties_page;
pub use reports::reports_page;
pub use users::users_page;
