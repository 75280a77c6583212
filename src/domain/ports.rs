use crate::domain::model::{CheckOutcome, GeneOrthologRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn project_root(&self) -> &str;
    fn output_path(&self) -> &str;
    fn dataset_file(&self) -> Option<&str>;
    fn strict(&self) -> bool;
}

/// Supplies the ordered records the builder writes out.
pub trait DatasetSource: Send + Sync {
    fn records(&self) -> Result<Vec<GeneOrthologRecord>>;
}

impl<T: DatasetSource + ?Sized> DatasetSource for Box<T> {
    fn records(&self) -> Result<Vec<GeneOrthologRecord>> {
        (**self).records()
    }
}

#[async_trait]
pub trait ProjectCheck: Send + Sync {
    fn name(&self) -> &str;
    async fn run(&self) -> CheckOutcome;
}
