pub mod config;
pub mod data;
pub mod errors;
pub mod logger;
pub mod mutation;
pub mod query;
pub mod screen;
