pub mod config_model;
pub mod diagnostic;
pub mod verdict;

pub use config_model::{ConfigModel, KeyValueEntry, Section};
pub use diagnostic::{Diagnostic, Severity};
pub use verdict::ParseVerdict;
