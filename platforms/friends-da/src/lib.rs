pub mod client;
pub mod config;
pub mod wire;

pub use client::DaClient;
pub use config::{ConfigError, DaConfig, APP_ID_ENV, DEFAULT_ENDPOINT};
