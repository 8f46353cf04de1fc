use crate::ir::Field;

/// Semantic value kind derived from a field's `(name, declared_type)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    String,
    Boolean,
    Date,
    Zip,
    Street,
    Email,
    Country,
    City,
    Name,
    Null,
    /// Declared type is another registered interface.
    Reference(String),
}

impl ValueKind {
    pub fn is_reference(&self) -> bool {
        matches!(self, ValueKind::Reference(_))
    }
}

/// Name-driven overrides. Exact, case-sensitive.
pub fn name_override(field_name: &str) -> Option<ValueKind> {
    let kind = match field_name {
        "dateOfBirth" | "expiration" | "createdAt" | "start" | "end" => ValueKind::Date,
        "street" => ValueKind::Street,
        "postalCode" | "zip" => ValueKind::Zip,
        "email" | "email1" | "email2" => ValueKind::Email,
        "country" => ValueKind::Country,
        "city" | "town" => ValueKind::City,
        "firstName" | "lastName" | "name" => ValueKind::Name,
        _ => return None,
    };
    Some(kind)
}

/// Kinds for built-in type tokens.
pub fn primitive_kind(declared_type: &str) -> Option<ValueKind> {
    let kind = match declared_type {
        "number" => ValueKind::Number,
        "string" => ValueKind::String,
        "boolean" => ValueKind::Boolean,
        "Date" => ValueKind::Date,
        "any" | "null" | "undefined" | "unknown" => ValueKind::Null,
        _ => return None,
    };
    Some(kind)
}

/// Effective kind for a field. `None` when the declared type is neither a
/// primitive nor a known interface and no name override applies.
pub fn classify(field: &Field, is_interface: impl Fn(&str) -> bool) -> Option<ValueKind> {
    if let Some(kind) = name_override(&field.name) {
        return Some(kind);
    }
    if let Some(kind) = primitive_kind(&field.declared_type) {
        return Some(kind);
    }
    if is_interface(&field.declared_type) {
        return Some(ValueKind::Reference(field.declared_type.clone()));
    }
    None
}

// ------------------------------- Tests ------------------------------------ //
