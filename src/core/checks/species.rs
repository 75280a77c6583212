use crate::config::species_config::SpeciesConfig;
use crate::core::{CheckOutcome, ProjectCheck};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use async_trait::async_trait;
use std::path::PathBuf;

pub struct ConfigCheck {
    config_path: PathBuf,
}

impl ConfigCheck {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    fn load(&self) -> Result<SpeciesConfig> {
        let config = SpeciesConfig::from_file(&self.config_path)?;
        config.validate()?;
        Ok(config)
    }
}

#[async_trait]
impl ProjectCheck for ConfigCheck {
    fn name(&self) -> &str {
        "Config file"
    }

    async fn run(&self) -> CheckOutcome {
        match self.load() {
            Ok(config) => {
                // validate() 已確認兩個名稱都存在
                let sparrow = config.sparrow_name().unwrap_or_default();
                let butterfly = config.butterfly_name().unwrap_or_default();
                CheckOutcome::pass(
                    self.name(),
                    vec![
                        "✅ Config file OK".to_string(),
                        format!("   Sparrow: {}", sparrow),
                        format!("   Butterfly: {}", butterfly),
                    ],
                )
            }
            Err(e) => {
                tracing::warn!("Config check failed for {}: {}", self.config_path.display(), e);
                CheckOutcome::fail(
                    self.name(),
                    vec![format!("❌ Failed to read config file: {}", e)],
                )
            }
        }
    }
}
