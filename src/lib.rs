pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::ProjectStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{
    builder::DatasetBuilder,
    table::OrthologTable,
    validator::{ProjectValidator, ValidationReport, ValidatorSettings},
};
pub use domain::model::GeneOrthologRecord;
pub use utils::error::{GeneError, Result};
