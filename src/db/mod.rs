pub mod checkins;
pub mod initialize;
pub mod karma;
pub mod kv;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod practices;
pub mod saved_quotes;
pub mod stats;
