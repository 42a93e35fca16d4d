pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use config::ClientConfig;
pub use models::search::{PlayerSearchResult, SearchType};
pub use services::client::TruckyClient;
