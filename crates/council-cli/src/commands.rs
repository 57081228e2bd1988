pub mod ask;
pub mod config;
pub mod models;
pub mod storage;
