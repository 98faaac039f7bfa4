pub mod config;
pub mod daily_team;
pub mod fake_feed;
pub mod feed;
pub mod grade;
pub mod store;
pub mod summary;
pub mod tracker;
pub mod week_window;
pub mod weekly_team;
