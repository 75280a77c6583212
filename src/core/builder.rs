use crate::adapters::ProjectStorage;
use crate::config::dataset_config::dataset_source;
use crate::core::table::OrthologTable;
use crate::core::{ConfigProvider, DatasetSource, Storage};
use crate::utils::error::Result;

pub struct DatasetBuilder<S: Storage, D: DatasetSource> {
    storage: S,
    source: D,
    output_path: String,
}

impl<S: Storage, D: DatasetSource> DatasetBuilder<S, D> {
    pub fn new(storage: S, source: D, output_path: impl Into<String>) -> Self {
        Self {
            storage,
            source,
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    /// 組出資料表、寫出 CSV 並在 stdout 列出每筆記錄。
    /// 寫入失敗直接回傳錯誤，不重試也不清理。
    pub async fn build_and_persist(&self) -> Result<(OrthologTable, String)> {
        print_banner();

        let table: OrthologTable = self.source.records()?.into();
        tracing::debug!("Assembled {} ortholog records", table.len());

        let csv_data = table.to_csv_bytes()?;
        tracing::debug!(
            "Writing {} bytes to {}",
            csv_data.len(),
            self.output_path
        );
        self.storage.write_file(&self.output_path, &csv_data).await?;

        println!("Found {} flight-related genes:", table.len());
        for record in table.iter() {
            println!("  • {}", record);
        }
        println!();
        println!("📊 Results saved: {}", self.output_path);
        println!("✅ Analysis complete!");

        tracing::info!("💾 Wrote {} records to {}", table.len(), self.output_path);
        Ok((table, self.output_path.clone()))
    }
}

impl DatasetBuilder<ProjectStorage, Box<dyn DatasetSource>> {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(
            ProjectStorage::new(config.project_root()),
            dataset_source(config)?,
            config.output_path(),
        ))
    }
}

fn print_banner() {
    let rule = "=".repeat(50);
    println!("{}", rule);
    println!("Sparrow & butterfly flight gene analysis");
    println!("{}", rule);
}
