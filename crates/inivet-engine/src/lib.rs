pub mod io;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use models::{ConfigModel, Diagnostic, KeyValueEntry, ParseVerdict, Section, Severity};
pub use parsing::{LineClass, Parser, SyntaxError, parse_lines, parse_text};
