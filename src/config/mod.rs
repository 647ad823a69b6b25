pub mod env;

pub use env::{load_env_file, AirtableConfig, DEFAULT_API_URL};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_optional_non_empty, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "airtable-fields")]
#[command(about = "Print the field names of the first record in an Airtable table")]
pub struct CliConfig {
    #[arg(long, default_value = ".env", help = "Env file loaded before reading AIRTABLE_* variables")]
    pub env_file: String,

    #[arg(long, help = "Only consider records visible in this view")]
    pub view: Option<String>,

    #[arg(long, help = "Only consider records matching this Airtable formula")]
    pub filter_by_formula: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_optional_non_empty("view", self.view.as_deref())?;
        validate_optional_non_empty("filter_by_formula", self.filter_by_formula.as_deref())
    }
}
