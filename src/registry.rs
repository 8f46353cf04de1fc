use indexmap::IndexMap;
use serde::Serialize;

use crate::ir::InterfaceRecord;

/// Parsed interfaces keyed by name. Built once per run, read-only during emission.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Registry {
    records: IndexMap<String, InterfaceRecord>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }

    /// Insert or replace. Returns the record that was overwritten, if any.
    pub fn register(&mut self, record: InterfaceRecord) -> Option<InterfaceRecord> {
        let previous = self.records.insert(record.name.clone(), record);
        if let Some(prev) = &previous {
            tracing::debug!(
                interface = %prev.name,
                replaced = %prev.source_path.display(),
                "interface declared more than once, last declaration wins"
            );
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&InterfaceRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn records(&self) -> impl Iterator<Item = &InterfaceRecord> {
        self.records.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

impl FromIterator<InterfaceRecord> for Registry {
    fn from_iter<I: IntoIterator<Item = InterfaceRecord>>(iter: I) -> Self {
        let mut registry = Registry::new();
        for record in iter {
            registry.register(record);
        }
        registry
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Field;
    use std::path::PathBuf;

    fn record(name: &str, path: &str, fields: Vec<Field>) -> InterfaceRecord {
        InterfaceRecord { name: name.into(), source_path: PathBuf::from(path), fields }
    }

    #[test]
    fn last_write_wins() {
        let mut reg = Registry::new();
        assert!(reg.register(record("User", "a/User.interface.ts", vec![Field::new("id", "number", false)])).is_none());
        let prev = reg.register(record("User", "b/User.interface.ts", vec![Field::new("email", "string", false)]));
        assert_eq!(prev.unwrap().source_path, PathBuf::from("a/User.interface.ts"));
        assert_eq!(reg.len(), 1);
        let user = reg.get("User").unwrap();
        assert_eq!(user.source_path, PathBuf::from("b/User.interface.ts"));
        assert_eq!(user.fields[0].name, "email");
    }

    #[test]
    fn overwrite_keeps_first_insertion_position() {
        let reg: Registry = [
            record("A", "a", vec![]),
            record("B", "b", vec![]),
            record("A", "a2", vec![]),
        ].into_iter().collect();
        assert_eq!(reg.names().collect::<Vec<_>>(), ["A", "B"]);
        assert!(reg.contains("B"));
        assert!(!reg.contains("C"));
    }

    #[test]
    fn serializes_as_name_map() {
        let reg: Registry = [record("User", "u.ts", vec![Field::new("tags", "string", true)])].into_iter().collect();
        let json = serde_json::to_value(&reg).unwrap();
        assert_eq!(json["User"]["fields"][0]["is_array"], true);
        assert_eq!(json["User"]["source_path"], "u.ts");
    }
}
