pub mod catalog;
pub mod config;
pub mod storage;
pub mod theme;
