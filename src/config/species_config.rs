use crate::utils::error::{GeneError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const SPARROW_KEY: &str = "sparrow";
pub const BUTTERFLY_KEY: &str = "butterfly";

/// `config/species.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesConfig {
    pub species: Option<BTreeMap<String, SpeciesEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesEntry {
    pub name: Option<String>,
    // genome 路徑等其他欄位不檢查
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl SpeciesConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn species_name(&self, key: &str) -> Result<&str> {
        let species = validate_required_field("species", &self.species)?;
        let entry = species
            .get(key)
            .ok_or_else(|| GeneError::MissingConfigError {
                field: format!("species.{}", key),
            })?;
        let name = validate_required_field(&format!("species.{}.name", key), &entry.name)?;
        Ok(name.as_str())
    }

    pub fn sparrow_name(&self) -> Result<&str> {
        self.species_name(SPARROW_KEY)
    }

    pub fn butterfly_name(&self) -> Result<&str> {
        self.species_name(BUTTERFLY_KEY)
    }
}

impl Validate for SpeciesConfig {
    fn validate(&self) -> Result<()> {
        for key in [SPARROW_KEY, BUTTERFLY_KEY] {
            let name = self.species_name(key)?;
            validate_non_empty_string(&format!("species.{}.name", key), name)?;
        }
        Ok(())
    }
}
