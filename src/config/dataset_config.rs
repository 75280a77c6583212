use crate::core::{ConfigProvider, DatasetSource};
use crate::domain::model::GeneOrthologRecord;
use crate::domain::seed::seed_records;
use crate::utils::error::{GeneError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub dataset: Option<DatasetInfo>,
    #[serde(default)]
    pub records: Vec<GeneOrthologRecord>,
    /// 開啟時 identity 必須介於 0 到 100
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub name: String,
    pub description: Option<String>,
}

impl DatasetConfig {
    /// 從 TOML 檔案載入資料集
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析資料集
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GeneError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GENE_SET})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = self.strict || strict;
        self
    }

    pub fn name(&self) -> &str {
        self.dataset
            .as_ref()
            .map(|d| d.name.as_str())
            .unwrap_or("unnamed")
    }
}

impl Validate for DatasetConfig {
    fn validate(&self) -> Result<()> {
        validate_records(&self.records, self.strict)
    }
}

impl DatasetSource for DatasetConfig {
    fn records(&self) -> Result<Vec<GeneOrthologRecord>> {
        self.validate()?;
        Ok(self.records.clone())
    }
}

/// 內建的三筆飛行相關基因
#[derive(Debug, Clone, Default)]
pub struct SeedDataset {
    pub strict: bool,
}

impl DatasetSource for SeedDataset {
    fn records(&self) -> Result<Vec<GeneOrthologRecord>> {
        let records = seed_records();
        validate_records(&records, self.strict)?;
        Ok(records)
    }
}

/// 有指定 --dataset 時讀檔，否則使用內建資料
pub fn dataset_source<C: ConfigProvider>(config: &C) -> Result<Box<dyn DatasetSource>> {
    match config.dataset_file() {
        Some(path) => {
            tracing::info!("📁 Loading dataset from: {}", path);
            let dataset = DatasetConfig::from_file(path)?.with_strict(config.strict());
            tracing::debug!(
                "Dataset '{}' declares {} records",
                dataset.name(),
                dataset.records.len()
            );
            Ok(Box::new(dataset))
        }
        None => Ok(Box::new(SeedDataset {
            strict: config.strict(),
        })),
    }
}

pub fn validate_records(records: &[GeneOrthologRecord], strict: bool) -> Result<()> {
    for (i, record) in records.iter().enumerate() {
        validate_non_empty_string(&format!("records[{}].sparrow", i), &record.sparrow_gene)?;
        validate_non_empty_string(&format!("records[{}].butterfly", i), &record.butterfly_gene)?;
        if strict {
            validate_range(
                &format!("records[{}].identity", i),
                record.identity_percent,
                0.0,
                100.0,
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DATASET: &str = r#"
[dataset]
name = "flight-genes"
description = "Wing muscle and navigation candidates"

[[records]]
sparrow = "MYH7"
butterfly = "Mhc"
identity = 87.5
category = "muscle"

[[records]]
sparrow = "PER2"
butterfly = "per"
identity = 104.0
category = "circadian"
"#;

    #[test]
    fn test_parse_dataset_in_declaration_order() {
        let config = DatasetConfig::from_toml_str(DATASET).unwrap();
        assert_eq!(config.name(), "flight-genes");

        let records = config.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sparrow_gene, "MYH7");
        assert_eq!(records[1].butterfly_gene, "per");
        assert_eq!(records[1].identity_percent, 104.0);
    }

    #[test]
    fn test_strict_mode_rejects_out_of_range_identity() {
        let config = DatasetConfig::from_toml_str(DATASET).unwrap().with_strict(true);
        let err = config.records().unwrap_err();
        assert!(err.to_string().contains("records[1].identity"));
    }

    #[test]
    fn test_empty_gene_symbol_rejected() {
        let content = r#"
[[records]]
sparrow = " "
butterfly = "Mhc"
identity = 87.5
category = "muscle"
"#;
        let config = DatasetConfig::from_toml_str(content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FLIGHT_GENES_TEST_CATEGORY", "wing");

        let content = r#"
[[records]]
sparrow = "MYH7"
butterfly = "Mhc"
identity = 87.5
category = "${FLIGHT_GENES_TEST_CATEGORY}"
"#;
        let config = DatasetConfig::from_toml_str(content).unwrap();
        assert_eq!(config.records[0].category, "wing");

        std::env::remove_var("FLIGHT_GENES_TEST_CATEGORY");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = DatasetConfig::from_toml_str("[[records]\nsparrow =").unwrap_err();
        assert!(matches!(err, GeneError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_dataset_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(DATASET.as_bytes()).unwrap();

        let config = DatasetConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.records.len(), 2);
    }

    #[test]
    fn test_seed_dataset_passes_strict() {
        let records = SeedDataset { strict: true }.records().unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_bundled_dataset_matches_seed() {
        let config = DatasetConfig::from_toml_str(include_str!("../../config/genes.toml")).unwrap();
        assert_eq!(config.records().unwrap(), seed_records());
    }
}
