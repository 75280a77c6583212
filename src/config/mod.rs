pub mod dataset_config;
pub mod species_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "results/tables/orthologs.csv";
pub const DEFAULT_SPECIES_CONFIG: &str = "config/species.yaml";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "flight-genes")]
#[command(about = "Build the sparrow/butterfly flight-gene ortholog table")]
pub struct CliConfig {
    #[arg(long, default_value = ".")]
    pub project_root: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: String,

    #[arg(long, help = "TOML dataset file replacing the built-in records")]
    pub dataset: Option<String>,

    #[arg(long, help = "Reject identity values outside 0-100")]
    pub strict: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Default for CliConfig {
    fn default() -> Self {
        Self {
            project_root: ".".to_string(),
            output: DEFAULT_OUTPUT_PATH.to_string(),
            dataset: None,
            strict: false,
            verbose: false,
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn project_root(&self) -> &str {
        &self.project_root
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn dataset_file(&self) -> Option<&str> {
        self.dataset.as_deref()
    }

    fn strict(&self) -> bool {
        self.strict
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("project_root", &self.project_root)?;
        validate_path("output", &self.output)?;
        if let Some(dataset) = &self.dataset {
            validate_path("dataset", dataset)?;
        }
        Ok(())
    }
}
