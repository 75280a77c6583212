pub mod builder;
pub mod checks;
pub mod table;
pub mod validator;

pub use crate::domain::model::{CheckOutcome, GeneOrthologRecord};
pub use crate::domain::ports::{ConfigProvider, DatasetSource, ProjectCheck, Storage};
pub use crate::utils::error::Result;
