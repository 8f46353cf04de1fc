//! Line-oriented declaration parser.
//!
//! Two independent single-line patterns, no grammar:
//! - header:   `export interface Name ...`
//! - property: `name?: Type[];`
//!
//! Anything else (comments, braces, unions, generics, multi-line types) is
//! skipped without complaint.
use std::path::Path;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::ir::{Field, InterfaceRecord};

static PROPERTY_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\w+)[\s?:]*(\w+)([\[\]]*);$").expect("static regex")
});

static HEADER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^export\s+interface\s+(\w*).*$").expect("static regex")
});

/// Per-file scan state. Scoped to exactly one declaration file.
#[derive(Debug, Default)]
struct Scan {
    name: Option<String>,
    fields: Vec<Field>,
}

impl Scan {
    fn feed(&mut self, line: &str) {
        if let Some(caps) = PROPERTY_LINE.captures(line) {
            self.fields.push(Field {
                name: caps[1].to_string(),
                declared_type: caps[2].to_string(),
                is_array: !caps[3].is_empty(),
            });
            return;
        }
        if let Some(caps) = HEADER_LINE.captures(line) {
            // single interface per file: the first header wins
            if self.name.is_none() && !caps[1].is_empty() {
                self.name = Some(caps[1].to_string());
            }
        }
    }

    fn finish(self, source_path: &Path) -> Option<InterfaceRecord> {
        let name = self.name?;
        Some(InterfaceRecord {
            name,
            source_path: source_path.to_path_buf(),
            fields: self.fields,
        })
    }
}

/// Parse one declaration file's text. `None` when no interface header matched.
pub fn parse_declaration(source_path: &Path, source: &str) -> Option<InterfaceRecord> {
    let mut scan = Scan::default();
    for line in source.lines() {
        scan.feed(line);
    }
    let record = scan.finish(source_path);
    match &record {
        Some(r) => tracing::debug!(
            interface = %r.name,
            fields = r.fields.len(),
            path = %source_path.display(),
            "parsed declaration"
        ),
        None => tracing::debug!(path = %source_path.display(), "no interface header, skipped"),
    }
    record
}

// ------------------------------- Tests ------------------------------------ //
