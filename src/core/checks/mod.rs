pub mod builder_run;
pub mod directory;
pub mod results;
pub mod species;

pub use builder_run::BuilderRunCheck;
pub use directory::{DirectoryCheck, REQUIRED_DIRECTORIES};
pub use results::ResultsCheck;
pub use species::ConfigCheck;
