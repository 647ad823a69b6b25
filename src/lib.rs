pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::AirtableClient;
pub use config::{load_env_file, AirtableConfig};
pub use crate::core::inspect::{FieldInspector, FieldReport};
pub use utils::error::{AirtableError, Result};
