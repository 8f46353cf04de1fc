// Parsed declaration model. Plain data, no generation logic here.
use std::path::PathBuf;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub declared_type: String,  // primitive token or another interface's name
    pub is_array: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceRecord {
    pub name: String,
    pub source_path: PathBuf,
    pub fields: Vec<Field>,     // source declaration order
}

impl Field {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>, is_array: bool) -> Self {
        Self { name: name.into(), declared_type: declared_type.into(), is_array }
    }
}

/// `mock<Interface><n>`
pub fn mock_const_name(interface: &str, n: usize) -> String {
    format!("mock{interface}{n}")
}
