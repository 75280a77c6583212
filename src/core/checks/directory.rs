use crate::core::{CheckOutcome, ProjectCheck};
use async_trait::async_trait;
use std::path::PathBuf;

pub const REQUIRED_DIRECTORIES: [&str; 7] = [
    "data/genomes/passer_domesticus",
    "data/genomes/bombyx_mori",
    "src",
    "notebooks",
    "config",
    "results/tables",
    "results/figures",
];

pub struct DirectoryCheck {
    project_root: PathBuf,
    required: Vec<String>,
}

impl DirectoryCheck {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self::with_directories(
            project_root,
            REQUIRED_DIRECTORIES.iter().map(|d| d.to_string()).collect(),
        )
    }

    pub fn with_directories(project_root: impl Into<PathBuf>, required: Vec<String>) -> Self {
        Self {
            project_root: project_root.into(),
            required,
        }
    }

    pub fn missing_directories(&self) -> Vec<String> {
        self.required
            .iter()
            .filter(|dir| !self.project_root.join(dir).exists())
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ProjectCheck for DirectoryCheck {
    fn name(&self) -> &str {
        "Directory structure"
    }

    async fn run(&self) -> CheckOutcome {
        let missing = self.missing_directories();
        let details = self
            .required
            .iter()
            .map(|dir| {
                if missing.contains(dir) {
                    format!("❌ {} - missing", dir)
                } else {
                    format!("✅ {}", dir)
                }
            })
            .collect();

        if missing.is_empty() {
            CheckOutcome::pass(self.name(), details)
        } else {
            tracing::warn!("Missing directories: {}", missing.join(", "));
            CheckOutcome::fail(self.name(), details)
        }
    }
}
