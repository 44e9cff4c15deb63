//! Dynamic values and declared attribute types

use std::fmt;

/// A typed configuration value.
///
/// Conversion produces a `Value` from a raw environment string, and explicit
/// schema defaults are stored as `Value`s. The variants mirror the semantic
/// kinds a schema can declare.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// A member of a named enumeration, selected by name lookup.
    Enum {
        /// Name of the enumeration type
        ty: String,
        /// Name of the selected member
        member: String,
    },
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Member name if this value is an enumeration member.
    pub fn as_enum(&self) -> Option<&str> {
        match self {
            Value::Enum { member, .. } => Some(member),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// The semantic type of a schema attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    Str,
    Int,
    Float,
    Bool,
    /// A named enumeration converted by member-name lookup
    Enum(EnumType),
    /// A user type with a single-argument string constructor
    Custom(CustomType),
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Str => f.write_str("str"),
            Kind::Int => f.write_str("int"),
            Kind::Float => f.write_str("float"),
            Kind::Bool => f.write_str("bool"),
            Kind::Enum(e) => f.write_str(e.name()),
            Kind::Custom(c) => f.write_str(c.name()),
        }
    }
}

/// A named enumeration type with a fixed member list.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    name: String,
    members: Vec<String>,
}

impl EnumType {
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Exact-name member lookup
    pub fn member(&self, name: &str) -> Option<&str> {
        self.members
            .iter()
            .find(|m| m.as_str() == name)
            .map(String::as_str)
    }
}

/// Single-argument string constructor for a custom type.
///
/// The error string becomes the conversion error detail.
pub type ParseFn = fn(&str) -> Result<Value, String>;

/// A user-defined type converted via its own string constructor.
#[derive(Debug, Clone)]
pub struct CustomType {
    name: String,
    parse: ParseFn,
}

impl CustomType {
    pub fn new(name: impl Into<String>, parse: ParseFn) -> Self {
        Self {
            name: name.into(),
            parse,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parse(&self) -> ParseFn {
        self.parse
    }
}

// Custom types are identified by name; function pointer comparison is
// not meaningful across codegen units.
impl PartialEq for CustomType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// The declared type of a schema attribute: a [`Kind`], possibly marked
/// optional.
///
/// The optional marker never changes parsing. It only changes default
/// behavior: an optional attribute absent from the environment and without
/// an explicit default resolves to "no value" instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclaredType {
    kind: Kind,
    optional: bool,
}

impl DeclaredType {
    /// The implicit declared type of attributes without a type annotation.
    pub const STR: DeclaredType = DeclaredType {
        kind: Kind::Str,
        optional: false,
    };

    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            optional: false,
        }
    }

    /// The "optional of T" form of `kind`.
    pub fn optional(kind: Kind) -> Self {
        Self {
            kind,
            optional: true,
        }
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            write!(f, "optional<{}>", self.kind)
        } else {
            self.kind.fmt(f)
        }
    }
}

impl From<Kind> for DeclaredType {
    fn from(kind: Kind) -> Self {
        DeclaredType::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Str("x".to_string()).as_str(), Some("x"));
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Float(0.5).as_float(), Some(0.5));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(7).as_str(), None);

        let member = Value::Enum {
            ty: "Color".to_string(),
            member: "RED".to_string(),
        };
        assert_eq!(member.as_enum(), Some("RED"));
    }

    #[test]
    fn test_value_from_impls() {
        assert_eq!(Value::from("a"), Value::Str("a".to_string()));
        assert_eq!(Value::from(42), Value::Int(42));
        assert_eq!(Value::from(1.5), Value::Float(1.5));
        assert_eq!(Value::from(false), Value::Bool(false));
    }

    #[test]
    fn test_declared_type_display() {
        assert_eq!(DeclaredType::new(Kind::Int).to_string(), "int");
        assert_eq!(DeclaredType::STR.to_string(), "str");
        assert_eq!(DeclaredType::optional(Kind::Bool).to_string(), "optional<bool>");

        let color = EnumType::new("Color", ["RED", "GREEN"]);
        assert_eq!(DeclaredType::new(Kind::Enum(color)).to_string(), "Color");
    }

    #[test]
    fn test_enum_member_lookup_is_exact() {
        let color = EnumType::new("Color", ["RED", "GREEN"]);
        assert_eq!(color.member("RED"), Some("RED"));
        assert_eq!(color.member("red"), None);
        assert_eq!(color.member("BLUE"), None);
    }
}
