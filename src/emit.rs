//! Mock module text for one interface record.
use std::path::{Component, Path, PathBuf};

use indexmap::IndexSet;

use crate::ir::{mock_const_name, Field, InterfaceRecord};
use crate::registry::Registry;
use crate::synth::{self, ValueKind, ValueProvider};

/// How many mock constants a module defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum EmitMode {
    /// `mock<Name>1` only.
    #[default]
    Linked,
    /// `mock<Name>1` and `mock<Name>2`.
    Pair,
}

impl EmitMode {
    pub fn const_count(self) -> usize {
        match self {
            EmitMode::Linked => 1,
            EmitMode::Pair => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmitOptions {
    pub mode: EmitMode,
    /// Extension shared by declaration and output files, without the dot.
    pub ext: String,
    /// Directory the modules are written to. When set, own-type imports are
    /// relative to it; otherwise the declaration path is used as found.
    pub out_dir: Option<PathBuf>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self { mode: EmitMode::default(), ext: "ts".into(), out_dir: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockModule {
    pub interface: String,
    pub file_name: String,
    pub content: String,
}

/// `<Name>.stubs.<ext>`
pub fn stub_file_name(interface: &str, ext: &str) -> String {
    format!("{interface}.stubs.{ext}")
}

pub fn emit<P: ValueProvider + ?Sized>(
    record: &InterfaceRecord,
    registry: &Registry,
    options: &EmitOptions,
    provider: &mut P,
) -> MockModule {
    let mut out = String::new();
    out.push_str(&import_section(record, registry, options));
    for n in 1..=options.mode.const_count() {
        out.push('\n');
        out.push_str(&mock_const(record, registry, n, provider));
    }
    MockModule {
        interface: record.name.clone(),
        file_name: stub_file_name(&record.name, &options.ext),
        content: out,
    }
}

/// Own type import followed by one import per referenced interface.
pub fn import_section(record: &InterfaceRecord, registry: &Registry, options: &EmitOptions) -> String {
    let mut out = format!(
        "import {{ {} }} from '{}';\n",
        record.name,
        module_specifier(record, options),
    );
    for referenced in referenced_interfaces(record, registry) {
        if referenced == record.name {
            continue;
        }
        out.push_str(&format!(
            "import {{ {} }} from './{}.stubs';\n",
            mock_const_name(referenced, 1),
            referenced,
        ));
    }
    out
}

/// Distinct interface names this record's fields point at, in field order.
pub fn referenced_interfaces<'a>(record: &'a InterfaceRecord, registry: &Registry) -> IndexSet<&'a str> {
    record
        .fields
        .iter()
        .filter(|field| {
            matches!(
                synth::classify(field, |name| registry.contains(name)),
                Some(ValueKind::Reference(_))
            )
        })
        .map(|field| field.declared_type.as_str())
        .collect()
}

fn mock_const<P: ValueProvider + ?Sized>(
    record: &InterfaceRecord,
    registry: &Registry,
    n: usize,
    provider: &mut P,
) -> String {
    let properties = record
        .fields
        .iter()
        .map(|field| {
            // the first constant cannot spread itself while it is being initialized
            let literal = if n == 1 && is_self_reference(field, record, registry) {
                tracing::warn!(
                    interface = %record.name,
                    field = %field.name,
                    "self-referencing field in the primary mock, emitting null"
                );
                if field.is_array { "[null]".to_string() } else { "null".to_string() }
            } else {
                synth::synthesize(field, registry, provider)
            };
            format!("    {}: {literal}", field.name)
        })
        .collect::<Vec<_>>()
        .join(",\n");
    let name = mock_const_name(&record.name, n);
    if properties.is_empty() {
        return format!("export const {name}: {} = {{}};\n", record.name);
    }
    format!("export const {name}: {} = {{\n{properties}\n}};\n", record.name)
}

fn is_self_reference(field: &Field, record: &InterfaceRecord, registry: &Registry) -> bool {
    matches!(
        synth::classify(field, |name| registry.contains(name)),
        Some(ValueKind::Reference(target)) if target == record.name
    )
}

/// Declaration path minus its extension, `/`-separated, relative to the
/// output directory when one is known.
fn module_specifier(record: &InterfaceRecord, options: &EmitOptions) -> String {
    let path = match &options.out_dir {
        Some(out_dir) => relative_specifier(&record.source_path, out_dir),
        None => record.source_path.to_string_lossy().replace('\\', "/"),
    };
    let suffix = format!(".{}", options.ext);
    match path.strip_suffix(&suffix) {
        Some(stripped) => stripped.to_string(),
        None => path,
    }
}

/// `./` or `../` specifier for `target` as seen from `base`. Falls back to the
/// target itself when the two share no root.
pub fn relative_specifier(target: &Path, base: &Path) -> String {
    let target_parts: Vec<Component> = target.components().collect();
    let base_parts: Vec<Component> = base.components().collect();
    let common = target_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return target.to_string_lossy().replace('\\', "/");
    }
    let mut segments: Vec<String> = std::iter::repeat_n("..".to_string(), base_parts.len() - common).collect();
    segments.extend(target_parts[common..].iter().map(|c| c.as_os_str().to_string_lossy().to_string()));
    let joined = segments.join("/");
    if joined.starts_with("..") { joined } else { format!("./{joined}") }
}

// ------------------------------- Tests ------------------------------------ //
