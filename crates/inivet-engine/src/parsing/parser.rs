use crate::models::{ConfigModel, Diagnostic, ParseVerdict};

use super::classify::{LineClass, classify};

/// Stateful accumulator driving the classifier over a line sequence.
///
/// Holds the current-section context and the growing model; one instance
/// per validation run, so independent files can be validated concurrently
/// without shared state. Every anomaly becomes a diagnostic — parsing
/// continues past errors so one pass reports all problems.
#[derive(Debug, Default)]
pub struct Parser {
    /// Index into the model of the section key-value lines land in.
    /// `None` until the first valid section header.
    current_section: Option<usize>,
    model: ConfigModel,
    diagnostics: Vec<Diagnostic>,
    total_lines: usize,
    error_count: usize,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one raw line. Blank and comment lines are skipped silently;
    /// valid section and key-value lines get an Info diagnostic.
    pub fn feed(&mut self, line: &str) {
        self.total_lines += 1;
        let line_no = self.total_lines;

        match classify(line) {
            LineClass::Blank | LineClass::Comment => {}
            LineClass::Section(Ok(name)) => self.enter_section(line_no, name),
            LineClass::Section(Err(e)) => self.error(line_no, e.to_string()),
            LineClass::KeyValue(Ok((key, value))) => self.assign(line_no, key, value),
            LineClass::KeyValue(Err(e)) => self.error(line_no, e.to_string()),
            LineClass::Invalid => self.error(line_no, format!("Invalid syntax: {line}")),
        }
    }

    /// Finalizes the run and hands the model to the caller.
    pub fn finish(self) -> ParseVerdict {
        ParseVerdict {
            total_lines: self.total_lines,
            error_count: self.error_count,
            diagnostics: self.diagnostics,
            model: self.model,
        }
    }

    fn enter_section(&mut self, line_no: usize, name: String) {
        if self.model.contains_section(&name) {
            self.diagnostics.push(Diagnostic::warning(
                line_no,
                format!("Section [{name}] already exists, entries will be merged"),
            ));
        }
        self.current_section = Some(self.model.ensure_section(&name));
        self.diagnostics
            .push(Diagnostic::info(line_no, format!("Valid section [{name}]")));
    }

    fn assign(&mut self, line_no: usize, key: String, value: String) {
        let Some(index) = self.current_section else {
            self.error(line_no, "Key-value pair found outside of any section");
            return;
        };

        let section = self.model.section_at_mut(index);
        if section.contains_key(&key) {
            self.diagnostics.push(Diagnostic::warning(
                line_no,
                format!("Key '{key}' already exists, value will be overwritten"),
            ));
        }
        section.set(key, value);
        self.diagnostics
            .push(Diagnostic::info(line_no, "Valid key-value pair"));
    }

    fn error(&mut self, line_no: usize, message: impl Into<String>) {
        self.error_count += 1;
        self.diagnostics.push(Diagnostic::error(line_no, message));
    }
}
