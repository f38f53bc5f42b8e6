pub mod checkin;
pub mod config;
pub mod db;
pub mod init;
pub mod karma;
pub mod lang;
pub mod log;
pub mod practice;
pub mod profile;
pub mod quote;
pub mod read;
pub mod saved;
pub mod streak;
