use crate::adapters::ProjectStorage;
use crate::core::{CheckOutcome, ProjectCheck, Storage};
use crate::utils::error::{GeneError, Result};
use async_trait::async_trait;
use std::io::Read;

const PREVIEW_ROWS: usize = 3;

/// A parsed CSV: header plus rows of equal width.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TabularData {
    pub fn from_reader<R: Read>(source_name: &str, rdr: R) -> Result<Self> {
        // 預設 flexible = false，欄數不一致會回傳錯誤
        let mut reader = csv::Reader::from_reader(rdr);
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        // 空檔案或只有一個空白欄位都不算表格
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(GeneError::EmptyTable {
                source_name: source_name.to_string(),
            });
        }

        let rows = reader
            .records()
            .map(|r| r.map(|rec| rec.iter().map(str::to_string).collect()))
            .collect::<std::result::Result<Vec<Vec<String>>, _>>()?;
        Ok(Self { headers, rows })
    }

    /// 前 n 列，含索引欄並靠右對齊
    pub fn preview(&self, n: usize) -> Vec<String> {
        let shown = &self.rows[..self.rows.len().min(n)];
        let index_width = shown.len().saturating_sub(1).to_string().len();

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in shown {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }

        let render = |index: &str, cells: &[String]| {
            let mut line = format!("{:>width$}", index, width = index_width);
            for (cell, width) in cells.iter().zip(&widths) {
                line.push_str(&format!("  {:>width$}", cell, width = *width));
            }
            line
        };

        let mut lines = vec![render("", &self.headers)];
        for (i, row) in shown.iter().enumerate() {
            lines.push(render(&i.to_string(), row));
        }
        lines
    }
}

pub struct ResultsCheck {
    storage: ProjectStorage,
    results_path: String,
}

impl ResultsCheck {
    pub fn new(storage: ProjectStorage, results_path: impl Into<String>) -> Self {
        Self {
            storage,
            results_path: results_path.into(),
        }
    }
}

#[async_trait]
impl ProjectCheck for ResultsCheck {
    fn name(&self) -> &str {
        "Results file"
    }

    async fn run(&self) -> CheckOutcome {
        let full_path = self.storage.resolve(&self.results_path);

        let bytes = match self.storage.read_file(&self.results_path).await {
            Ok(bytes) => bytes,
            Err(GeneError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return CheckOutcome::fail(
                    self.name(),
                    vec![format!("❌ Results file not found: {}", full_path.display())],
                );
            }
            Err(e) => {
                tracing::warn!("Could not read {}: {}", full_path.display(), e);
                return CheckOutcome::fail(
                    self.name(),
                    vec![format!("❌ Failed to read results file: {}", e)],
                );
            }
        };

        match TabularData::from_reader(&self.results_path, bytes.as_slice()) {
            Ok(table) => {
                let mut details = vec![
                    format!("✅ Results file exists with {} rows", table.rows.len()),
                    format!("   First {} rows:", PREVIEW_ROWS),
                ];
                details.extend(table.preview(PREVIEW_ROWS));
                CheckOutcome::pass(self.name(), details)
            }
            Err(e) => {
                tracing::warn!("Could not parse {}: {}", full_path.display(), e);
                CheckOutcome::fail(
                    self.name(),
                    vec![format!("❌ Failed to read results file: {}", e)],
                )
            }
        }
    }
}
