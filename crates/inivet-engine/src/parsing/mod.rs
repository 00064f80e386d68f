pub mod classify;
pub mod parser;

pub use classify::{LineClass, SyntaxError, classify};
pub use parser::Parser;

use crate::models::ParseVerdict;

/// Runs one validation pass over a sequence of lines.
pub fn parse_lines<I, S>(lines: I) -> ParseVerdict
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::new();
    for line in lines {
        parser.feed(line.as_ref());
    }
    parser.finish()
}

/// Convenience: validate a whole input buffer, splitting on line endings.
pub fn parse_text(text: &str) -> ParseVerdict {
    parse_lines(text.lines())
}
