pub mod checkin;
pub mod config;
pub mod karma;
pub mod log;
pub mod practice;
pub mod profile;
pub mod quotes;
pub mod reading;
pub mod store;
pub mod streak;
