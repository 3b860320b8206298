pub mod account;
pub mod config;
pub mod habit;
pub mod report;
pub mod stats;

mod common;
