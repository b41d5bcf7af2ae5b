//! Script assembly and output
//!
//! A script is a short comment header followed by the statements, separated
//! by blank lines and wrapped in a single `BEGIN;` / `COMMIT;` transaction.

use ms_core::{SeedError, SeedResult};
use std::path::Path;

/// An ordered, transaction-wrapped SQL script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedScript {
    header: Vec<String>,
    statements: Vec<String>,
}

impl SeedScript {
    /// Start a script whose header names the generator and its source
    pub fn new(source_name: &str) -> Self {
        Self {
            header: vec![
                format!("-- Generated by marketseed {}", env!("CARGO_PKG_VERSION")),
                format!("-- Source: {source_name}"),
            ],
            statements: Vec::new(),
        }
    }

    /// Append one terminated statement
    pub fn push(&mut self, statement: impl Into<String>) {
        self.statements.push(statement.into());
    }

    /// Append a statement when one was produced
    pub fn push_opt(&mut self, statement: Option<String>) {
        if let Some(statement) = statement {
            self.push(statement);
        }
    }

    /// Append several statements in order
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, statements: I) {
        self.statements.extend(statements);
    }

    /// Statements in emission order, without the transaction wrapper
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Render the full script text, ending with a newline
    pub fn render(&self) -> String {
        let mut body = Vec::with_capacity(self.statements.len() + 2);
        body.push("BEGIN;");
        body.extend(self.statements.iter().map(String::as_str));
        body.push("COMMIT;");

        let mut out = String::new();
        for line in &self.header {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&body.join("\n\n"));
        out.push('\n');
        out
    }

    /// Write the rendered script, replacing any existing file
    pub fn write(&self, path: &Path) -> SeedResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SeedError::IoWithPath {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, self.render()).map_err(|e| SeedError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        log::debug!(
            "Wrote {} statements to {}",
            self.statements.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_wraps_in_transaction() {
        let mut script = SeedScript::new("seed.json");
        script.push("DELETE FROM a;");
        script.push_opt(None);
        script.push_opt(Some("DELETE FROM b;".to_string()));

        let text = script.render();
        assert!(text.starts_with("-- Generated by marketseed "));
        assert!(text.contains("\n-- Source: seed.json\nBEGIN;\n\nDELETE FROM a;\n\nDELETE FROM b;\n\nCOMMIT;\n"));
        assert!(text.ends_with("COMMIT;\n"));
        assert_eq!(script.statements().len(), 2);
    }

    #[test]
    fn test_empty_script() {
        let script = SeedScript::new("seed.json");
        assert!(script.render().ends_with("BEGIN;\n\nCOMMIT;\n"));
    }

    #[test]
    fn test_write_creates_parent_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scripts").join("seed.sql");

        let mut first = SeedScript::new("seed.json");
        first.push("SELECT 1;");
        first.write(&path).unwrap();

        let second = SeedScript::new("seed.json");
        second.write(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, second.render());
        assert!(!written.contains("SELECT 1;"));
    }
}
