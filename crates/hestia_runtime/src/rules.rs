//! Rule files.
//!
//! A rule file holds one `condition -> action` rule per line. Blank lines
//! and lines starting with `#` are ignored.
//!
//! ```text
//! # evening comfort
//! zaman_akşam & kişi_evde & !perde_açık -> perde_kapat
//! kişi_üşüyor -> ısıtıcı_aç
//! ```

use std::fs;
use std::path::Path;

use hestia_foundation::{Error, ErrorContext, Result};
use hestia_language::{RuleDecl, parse_rule};

/// Comment marker.
pub const COMMENT: char = '#';

/// Parses rule file source into rules paired with their 1-based line
/// numbers. `name` labels errors.
///
/// # Errors
/// Returns the first malformed line's error, with the file name and
/// 1-based line number attached.
pub fn parse_rules_source(source: &str, name: &str) -> Result<Vec<(usize, RuleDecl)>> {
    let mut rules = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT) {
            continue;
        }
        let decl = parse_rule(line).map_err(|e| {
            e.with_context(ErrorContext::new().with_source(name).with_line(index + 1))
        })?;
        rules.push((index + 1, decl));
    }
    Ok(rules)
}

/// Reads and parses a rule file.
///
/// # Errors
/// Returns an I/O error if the file cannot be read, or a rule syntax
/// error as [`parse_rules_source`] does.
pub fn read_rules_file(path: &Path) -> Result<Vec<(usize, RuleDecl)>> {
    let name = path.display().to_string();
    let source = fs::read_to_string(path).map_err(|e| {
        Error::io(e.to_string()).with_context(ErrorContext::new().with_source(name.as_str()))
    })?;
    parse_rules_source(&source, &name)
}
