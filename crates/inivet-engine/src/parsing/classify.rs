use thiserror::Error;

/// Per-line syntax failures surfaced as diagnostics, never as aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Section missing closing bracket ']'")]
    MissingClosingBracket,
    #[error("Section name cannot be empty")]
    EmptySectionName,
    #[error("Section name contains invalid character '{0}'")]
    InvalidSectionCharacter(char),
    #[error("Key cannot be empty")]
    EmptyKey,
    #[error("Key contains whitespace")]
    KeyContainsWhitespace,
    #[error("Key contains invalid character '{0}'")]
    InvalidKeyCharacter(char),
    #[error("Value cannot be empty")]
    EmptyValue,
}

/// Classification of a single raw line.
///
/// `Section` and `KeyValue` carry a `Result` because "this line is a section
/// candidate but malformed" must stay distinct from "this line is not a
/// section at all" — the former is an error, the latter falls through to the
/// next classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    Comment,
    Section(Result<String, SyntaxError>),
    KeyValue(Result<(String, String), SyntaxError>),
    Invalid,
}

/// Classifies a line with fixed precedence:
/// blank, then comment, then section candidate, then key-value candidate,
/// then invalid. Precedence matters because a malformed header like
/// `[a=b` also contains `=`.
pub fn classify(line: &str) -> LineClass {
    if is_blank(line) {
        return LineClass::Blank;
    }
    if is_comment(line) {
        return LineClass::Comment;
    }
    if let Some(section) = classify_section(line) {
        return LineClass::Section(section);
    }
    if let Some(pair) = classify_key_value(line) {
        return LineClass::KeyValue(pair);
    }
    LineClass::Invalid
}

/// True for empty lines and lines of only spaces, tabs, CR, or LF.
pub fn is_blank(line: &str) -> bool {
    line.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

/// True when the first character after space/tab indentation is `;` or `#`.
///
/// Callers must check [`is_blank`] first: a whitespace-only line is blank,
/// never a comment.
pub fn is_comment(line: &str) -> bool {
    matches!(
        line.trim_start_matches([' ', '\t']).chars().next(),
        Some(';' | '#')
    )
}

/// Attempts to read the line as a `[section]` header.
///
/// Returns `None` when the trimmed line does not start with `[` (not a
/// section candidate). The name between the brackets is trimmed of outer
/// whitespace only; interior whitespace is an invalid character.
pub fn classify_section(line: &str) -> Option<Result<String, SyntaxError>> {
    let trimmed = line.trim();
    if !trimmed.starts_with('[') {
        return None;
    }
    Some(section_name(trimmed))
}

fn section_name(trimmed: &str) -> Result<String, SyntaxError> {
    // A bare "[" fails here too: its last character is the opening bracket.
    if !trimmed.ends_with(']') {
        return Err(SyntaxError::MissingClosingBracket);
    }

    let name = trimmed[1..trimmed.len() - 1].trim();
    if name.is_empty() {
        return Err(SyntaxError::EmptySectionName);
    }
    if let Some(offender) = name.chars().find(|&c| !is_name_char(c)) {
        return Err(SyntaxError::InvalidSectionCharacter(offender));
    }

    Ok(name.to_owned())
}

/// Attempts to read the line as a `key=value` pair, splitting at the first
/// `=`. Returns `None` when the line contains no `=` at all.
///
/// Checks apply in order — empty key, whitespace in key, invalid key
/// character, empty value — and the first failure wins.
pub fn classify_key_value(line: &str) -> Option<Result<(String, String), SyntaxError>> {
    let (left, right) = line.split_once('=')?;
    Some(key_value(left, right))
}

fn key_value(left: &str, right: &str) -> Result<(String, String), SyntaxError> {
    let key = left.trim();
    if key.is_empty() {
        return Err(SyntaxError::EmptyKey);
    }
    if key.chars().any(char::is_whitespace) {
        return Err(SyntaxError::KeyContainsWhitespace);
    }
    if let Some(offender) = key.chars().find(|&c| !is_name_char(c)) {
        return Err(SyntaxError::InvalidKeyCharacter(offender));
    }

    let value = right.trim();
    if value.is_empty() {
        return Err(SyntaxError::EmptyValue);
    }

    Ok((key.to_owned(), value.to_owned()))
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
