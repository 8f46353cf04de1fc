//! Field -> literal text.
//!
//! Classification (`kind`) picks a semantic kind for a field, the provider
//! supplies raw fake values, and this module renders them as source
//! literals: quoted strings, bare numbers/booleans, `null`, or a spread of
//! another interface's mock constant.
pub mod kind;
pub mod provider;

pub use kind::{classify, ValueKind};
pub use provider::{FakerProvider, ValueProvider};

use crate::ir::{mock_const_name, Field};
use crate::registry::Registry;

pub const NUMBER_RANGE: (i64, i64) = (0, 99_999);
pub const ZIP_RANGE: (i64, i64) = (10_000, 99_999);
pub const HOUSE_NUMBER_RANGE: (i64, i64) = (1, 200);

/// Literal text for one field, including array/reference wrapping.
pub fn synthesize<P: ValueProvider + ?Sized>(field: &Field, registry: &Registry, provider: &mut P) -> String {
    let kind = match classify(field, |name| registry.contains(name)) {
        Some(kind) => kind,
        None => {
            tracing::warn!(
                field = %field.name,
                declared_type = %field.declared_type,
                "property type not found, emitting null"
            );
            ValueKind::Null
        }
    };
    let literal = render_kind(&kind, provider);
    let literal = if kind.is_reference() { format!("{{...{literal}}}") } else { literal };
    if field.is_array { format!("[{literal}]") } else { literal }
}

/// Bare literal for a kind, before any wrapping.
pub fn render_kind<P: ValueProvider + ?Sized>(kind: &ValueKind, provider: &mut P) -> String {
    match kind {
        ValueKind::Number => provider.random_integer(NUMBER_RANGE.0, NUMBER_RANGE.1).to_string(),
        ValueKind::String => quote(&provider.random_word()),
        ValueKind::Zip => quote(&provider.random_integer(ZIP_RANGE.0, ZIP_RANGE.1).to_string()),
        ValueKind::Street => {
            let street = provider.random_street_name();
            let number = provider.random_integer(HOUSE_NUMBER_RANGE.0, HOUSE_NUMBER_RANGE.1);
            quote(&format!("{street} {number}"))
        }
        ValueKind::Email => quote(&provider.random_email()),
        ValueKind::Country => quote(&provider.random_country()),
        ValueKind::City => quote(&provider.random_city()),
        ValueKind::Name => quote(&provider.random_first_name()),
        ValueKind::Boolean => provider.random_boolean().to_string(),
        ValueKind::Date => quote(&provider.random_date().format("%Y-%m-%d").to_string()),
        ValueKind::Null => "null".to_string(),
        ValueKind::Reference(interface) => mock_const_name(interface, 1),
    }
}

/// Single-quoted string literal.
pub fn quote(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('\'');
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

// ------------------------------- Tests ------------------------------------ //
