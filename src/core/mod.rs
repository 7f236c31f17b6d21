pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheStats, QueryCache};
pub use config::AyurgenixConfig;
pub use error::{AyurgenixError, Result};
