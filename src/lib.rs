pub mod config;
pub mod error;
pub mod pipeline;
pub mod services;
pub mod types;
