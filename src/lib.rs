pub mod booking;
pub mod config;
pub mod error;
pub mod startup;
pub mod utils;
