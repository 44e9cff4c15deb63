//! Attribute resolution against an environment

use std::collections::{BTreeMap, HashMap};

use crate::convert::convert;
use crate::error::BindError;
use crate::schema::Schema;
use crate::value::{DeclaredType, Value};

/// Read-only key to string lookup.
///
/// Resolution only ever reads the environment, so concurrent resolutions of
/// independent schemas are safe.
pub trait Env {
    fn get(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Env for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// How an attribute name becomes its environment-variable key.
///
/// Applied uniformly to every attribute in one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseTransform {
    /// Use the attribute name verbatim
    Identity,
    /// Uppercase the attribute name
    #[default]
    Uppercase,
}

impl CaseTransform {
    pub fn apply(&self, name: &str) -> String {
        match self {
            CaseTransform::Identity => name.to_string(),
            CaseTransform::Uppercase => name.to_ascii_uppercase(),
        }
    }
}

/// Per-resolution options.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Attribute-name to environment-key transform
    pub case: CaseTransform,
    /// Defer missing-variable errors until the attribute is accessed.
    ///
    /// Defaults to `false`: a missing required variable fails resolution
    /// immediately. When enabled, the error is stored on the config and
    /// every access to that attribute raises it; all other attributes still
    /// resolve normally. Conversion errors are never deferred.
    pub lazy_missing: bool,
}

/// Resolution result for one attribute.
#[derive(Debug, Clone)]
enum Entry {
    /// Environment-derived or explicit-default value
    Value(Value),
    /// Implicit optional default: declared, but carries no value
    Absent,
    /// Missing-variable error deferred until access
    Deferred(BindError),
}

/// A resolved configuration: the schema name plus one entry per declared
/// attribute.
///
/// Reads go through [`Config::get`], which distinguishes a present value,
/// the implicit optional "no value", and a deferred missing-variable error.
#[derive(Debug, Clone)]
pub struct Config {
    schema: String,
    entries: BTreeMap<String, Entry>,
}

impl Config {
    /// Name of the schema this config was resolved from.
    pub fn schema_name(&self) -> &str {
        &self.schema
    }

    /// Read a resolved attribute by name.
    ///
    /// Returns `Ok(None)` for an optional attribute that resolved to "no
    /// value". An attribute whose missing-variable check was deferred
    /// raises the stored error on every access. An undeclared name raises
    /// [`BindError::UnknownAttribute`].
    pub fn get(&self, name: &str) -> Result<Option<&Value>, BindError> {
        match self.entries.get(name) {
            Some(Entry::Value(value)) => Ok(Some(value)),
            Some(Entry::Absent) => Ok(None),
            Some(Entry::Deferred(err)) => Err(err.clone()),
            None => Err(BindError::UnknownAttribute {
                schema: self.schema.clone(),
                attribute: name.to_string(),
            }),
        }
    }

    /// Number of declared attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve every attribute of `schema` against `env`.
///
/// Per attribute, in precedence order:
/// 1. a present environment value, converted to the declared type
///    (conversion failure is always an immediate [`BindError::Convert`]);
/// 2. the explicit default, used as-is;
/// 3. "no value", if the declared type is optional;
/// 4. [`BindError::Missing`], immediately or deferred per
///    [`Options::lazy_missing`].
pub fn build_config(
    schema: &Schema,
    env: &impl Env,
    options: &Options,
) -> Result<Config, BindError> {
    schema.validate()?;

    let mut entries = BTreeMap::new();
    for attr in schema.attrs() {
        let declared = attr.declared().cloned().unwrap_or(DeclaredType::STR);
        let key = options.case.apply(attr.name());

        let entry = match env.get(&key) {
            Some(raw) => match convert(&raw, &declared) {
                Ok(value) => Entry::Value(value),
                Err(err) => {
                    return Err(BindError::Convert {
                        schema: schema.name().to_string(),
                        attribute: attr.name().to_string(),
                        value: err.value,
                        declared,
                        message: err.message,
                    });
                }
            },
            None => {
                if let Some(default) = attr.default() {
                    Entry::Value(default.clone())
                } else if declared.is_optional() {
                    Entry::Absent
                } else {
                    let err = BindError::Missing {
                        schema: schema.name().to_string(),
                        attribute: attr.name().to_string(),
                        declared,
                    };
                    if options.lazy_missing {
                        Entry::Deferred(err)
                    } else {
                        return Err(err);
                    }
                }
            }
        };
        entries.insert(attr.name().to_string(), entry);
    }

    Ok(Config {
        schema: schema.name().to_string(),
        entries,
    })
}
