use crate::adapters::ProjectStorage;
use crate::config::{DEFAULT_OUTPUT_PATH, DEFAULT_SPECIES_CONFIG};
use crate::core::checks::builder_run::DEFAULT_TIMEOUT;
use crate::core::checks::{BuilderRunCheck, ConfigCheck, DirectoryCheck, ResultsCheck};
use crate::core::{CheckOutcome, ProjectCheck};
use crate::utils::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const BUILDER_BINARY: &str = "flight-genes";

#[derive(Debug, Clone)]
pub struct ValidatorSettings {
    pub project_root: PathBuf,
    /// 相對於 project_root
    pub config_path: PathBuf,
    /// 相對於 project_root
    pub results_path: PathBuf,
    pub builder_program: PathBuf,
    pub builder_timeout: Duration,
}

impl ValidatorSettings {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            config_path: PathBuf::from(DEFAULT_SPECIES_CONFIG),
            results_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            builder_program: default_builder_path(),
            builder_timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// 與目前執行檔同目錄的 flight-genes，找不到執行檔路徑時交給 PATH 搜尋
pub fn default_builder_path() -> PathBuf {
    let file_name = format!("{}{}", BUILDER_BINARY, std::env::consts::EXE_SUFFIX);
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&file_name)))
        .unwrap_or_else(|| PathBuf::from(file_name))
}

pub struct ProjectValidator {
    checks: Vec<Box<dyn ProjectCheck>>,
}

impl ProjectValidator {
    pub fn new(checks: Vec<Box<dyn ProjectCheck>>) -> Self {
        Self { checks }
    }

    pub fn from_settings(settings: &ValidatorSettings) -> Self {
        let root: &Path = &settings.project_root;
        Self::new(vec![
            Box::new(DirectoryCheck::new(root)),
            Box::new(ConfigCheck::new(root.join(&settings.config_path))),
            Box::new(
                BuilderRunCheck::new(&settings.builder_program, root)
                    .with_timeout(settings.builder_timeout),
            ),
            Box::new(ResultsCheck::new(
                ProjectStorage::new(root),
                settings.results_path.to_string_lossy(),
            )),
        ])
    }

    /// 依序執行所有檢查；任何一項失敗都不會中斷後續檢查
    pub async fn run(&self) -> ValidationReport {
        let mut outcomes = Vec::with_capacity(self.checks.len());

        for check in &self.checks {
            println!("\n🧪 Check: {}", check.name());
            tracing::debug!("Running check '{}'", check.name());

            let outcome = check.run().await;
            for line in &outcome.details {
                println!("  {}", line);
            }
            tracing::info!(
                "{} {}",
                if outcome.passed { "✅" } else { "❌" },
                outcome.name
            );
            outcomes.push(outcome);
        }

        ValidationReport { outcomes }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl ValidationReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// CI 用的 JSON 報告
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total() == 0 {
            return 100.0;
        }
        self.passed() as f64 / self.total() as f64 * 100.0
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let rule = "=".repeat(60);
        let mut lines = vec![
            String::new(),
            rule.clone(),
            "Summary:".to_string(),
            rule.clone(),
        ];

        for outcome in &self.outcomes {
            let status = if outcome.passed { "✅ passed" } else { "❌ failed" };
            lines.push(format!("  {}: {}", outcome.name, status));
        }

        lines.push(String::new());
        lines.push(format!(
            "📈 Pass rate: {}/{} ({:.0}%)",
            self.passed(),
            self.total(),
            self.pass_rate()
        ));

        if self.all_passed() {
            lines.push(String::new());
            lines.push("🎉 All checks passed! The project is ready to use.".to_string());
            lines.push("Next steps:".to_string());
            lines.push("  1. Add real genome data under data/genomes/".to_string());
            lines.push("  2. Replace the built-in records with a --dataset file".to_string());
            lines.push(format!("  3. Run {} to start the analysis", BUILDER_BINARY));
        } else {
            lines.push(String::new());
            lines.push("⚠️  Some checks failed, please review the project setup.".to_string());
        }

        lines.push(rule);
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FixedCheck {
        name: &'static str,
        passed: bool,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ProjectCheck for FixedCheck {
        fn name(&self) -> &str {
            self.name
        }

        async fn run(&self) -> CheckOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.passed {
                CheckOutcome::pass(self.name, vec![])
            } else {
                CheckOutcome::fail(self.name, vec!["boom".to_string()])
            }
        }
    }

    fn fixed(
        name: &'static str,
        passed: bool,
        calls: &Arc<AtomicUsize>,
    ) -> Box<dyn ProjectCheck> {
        Box::new(FixedCheck {
            name,
            passed,
            calls: Arc::clone(calls),
        })
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_later_checks() {
        let calls = Arc::new(AtomicUsize::new(0));
        let validator = ProjectValidator::new(vec![
            fixed("first", false, &calls),
            fixed("second", true, &calls),
            fixed("third", false, &calls),
            fixed("fourth", true, &calls),
        ]);

        let report = validator.run().await;
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert_eq!(report.passed(), 2);
        assert_eq!(report.total(), 4);
        assert!(!report.all_passed());
        assert_eq!(report.exit_code(), 1);
        assert!(report
            .summary_lines()
            .iter()
            .any(|l| l == "📈 Pass rate: 2/4 (50%)"));
    }

    #[tokio::test]
    async fn test_all_passed_exits_zero_with_next_steps() {
        let calls = Arc::new(AtomicUsize::new(0));
        let validator = ProjectValidator::new(vec![fixed("only", true, &calls)]);

        let report = validator.run().await;
        assert_eq!(report.exit_code(), 0);
        let summary = report.summary_lines();
        assert!(summary.iter().any(|l| l.starts_with("🎉")));
        assert!(summary.iter().any(|l| l == "  only: ✅ passed"));
    }

    #[test]
    fn test_report_serializes_for_ci() {
        let report = ValidationReport {
            outcomes: vec![CheckOutcome::fail("Config file", vec!["missing".to_string()])],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcomes"][0]["name"], "Config file");
        assert_eq!(json["outcomes"][0]["passed"], false);
    }

    #[test]
    fn test_report_to_json_matches_outcomes() {
        let report = ValidationReport {
            outcomes: vec![
                CheckOutcome::pass("Directory structure", vec![]),
                CheckOutcome::fail("Results file", vec!["❌ Results file not found".to_string()]),
            ],
        };
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["outcomes"].as_array().unwrap().len(), 2);
        assert_eq!(value["outcomes"][1]["details"][0], "❌ Results file not found");
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_default_builder_sits_next_to_current_exe() {
        let path = default_builder_path();
        let expected = format!("{}{}", BUILDER_BINARY, std::env::consts::EXE_SUFFIX);
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), expected);
    }
}
