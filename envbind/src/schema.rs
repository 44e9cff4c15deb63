//! Schema descriptions: named, ordered collections of attribute declarations

use crate::error::BindError;
use crate::resolve::{build_config, Config, Options, ProcessEnv};
use crate::value::{DeclaredType, Value};

/// One attribute declaration: a name, an optional declared type, and an
/// optional explicit default.
///
/// An attribute without a declared type is implicitly typed `str`. The
/// default is independent of optionality and is used as-is, never converted.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    name: String,
    declared: Option<DeclaredType>,
    default: Option<Value>,
}

impl Attr {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared(&self) -> Option<&DeclaredType> {
        self.declared.as_ref()
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// A named collection of attribute declarations describing one
/// configuration object.
///
/// Schemas are built explicitly, either by hand with the builder methods or
/// by `#[derive(EnvSchema)]` on a struct. Only attribute triples can be
/// declared, so methods or other callables can never leak into resolution.
///
/// ```rust
/// use envbind::{DeclaredType, Kind, Schema};
///
/// let schema = Schema::new("AppConfig")
///     .attr("database_url", DeclaredType::STR)
///     .attr_with_default("port", DeclaredType::new(Kind::Int), 8080)
///     .attr("verbose", DeclaredType::optional(Kind::Bool));
/// assert_eq!(schema.attrs().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    name: String,
    attrs: Vec<Attr>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    /// Declare a typed attribute with no default.
    ///
    /// Required unless the declared type is optional.
    pub fn attr(mut self, name: impl Into<String>, declared: impl Into<DeclaredType>) -> Self {
        self.attrs.push(Attr {
            name: name.into(),
            declared: Some(declared.into()),
            default: None,
        });
        self
    }

    /// Declare a typed attribute with an explicit default.
    ///
    /// The default is stored and returned as-is when the environment has no
    /// value; it is never run through conversion.
    pub fn attr_with_default(
        mut self,
        name: impl Into<String>,
        declared: impl Into<DeclaredType>,
        default: impl Into<Value>,
    ) -> Self {
        self.attrs.push(Attr {
            name: name.into(),
            declared: Some(declared.into()),
            default: Some(default.into()),
        });
        self
    }

    /// Declare an attribute with a default but no type annotation.
    ///
    /// Environment values for it are converted with the implicit `str` type.
    pub fn attr_untyped(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.attrs.push(Attr {
            name: name.into(),
            declared: None,
            default: Some(default.into()),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    /// Resolve this schema against the process environment.
    pub fn from_env(&self, options: &Options) -> Result<Config, BindError> {
        build_config(self, &ProcessEnv, options)
    }

    /// Attribute names must be unique identifiers.
    pub(crate) fn validate(&self) -> Result<(), BindError> {
        let mut seen = std::collections::HashSet::new();
        for attr in &self.attrs {
            if !is_identifier(&attr.name) {
                return Err(BindError::InvalidSchema {
                    schema: self.name.clone(),
                    message: format!("attribute name '{}' is not an identifier", attr.name),
                });
            }
            if !seen.insert(attr.name.as_str()) {
                return Err(BindError::InvalidSchema {
                    schema: self.name.clone(),
                    message: format!("attribute '{}' is declared twice", attr.name),
                });
            }
        }
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
