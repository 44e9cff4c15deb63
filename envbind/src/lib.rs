//! Bind attribute declarations to environment variables
//!
//! `envbind` resolves small configuration objects at process startup: a
//! [`Schema`] declares attributes (name, declared type, explicit default),
//! and resolution looks each one up in the environment, converts the raw
//! string to the declared type, and falls back to defaults when the
//! variable is absent.
//!
//! # Resolution order
//!
//! Per attribute, highest precedence first:
//!
//! 1. A present environment value, converted to the declared type
//! 2. The explicit default, used as-is
//! 3. "No value", when the declared type is optional
//! 4. A [`BindError::Missing`] error
//!
//! The environment key is derived from the attribute name by a uniform
//! case transform (uppercase by default).
//!
//! # Value parsing
//!
//! - Strings pass through unchanged
//! - Integers and floats parse with their `FromStr` forms
//! - Booleans accept a fixed case-insensitive vocabulary:
//!   `1`/`true`/`yes`/`on` and `0`/`false`/`no`/`off`
//! - Enumerations convert by exact member-name lookup
//! - Custom types convert through their own string constructor
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use envbind::{build_config, DeclaredType, Kind, Options, Schema, Value};
//!
//! let schema = Schema::new("AppConfig")
//!     .attr("database_url", DeclaredType::STR)
//!     .attr_with_default("port", DeclaredType::new(Kind::Int), 8080)
//!     .attr("api_key", DeclaredType::optional(Kind::Str));
//!
//! let env: HashMap<String, String> =
//!     [("DATABASE_URL".to_string(), "postgres://localhost/db".to_string())]
//!         .into_iter()
//!         .collect();
//!
//! let config = build_config(&schema, &env, &Options::default())?;
//! assert_eq!(
//!     config.get("database_url")?,
//!     Some(&Value::Str("postgres://localhost/db".to_string()))
//! );
//! assert_eq!(config.get("port")?, Some(&Value::Int(8080)));
//! assert_eq!(config.get("api_key")?, None); // optional, no value
//! # Ok::<(), envbind::BindError>(())
//! ```
//!
//! # Deriving schemas
//!
//! `#[derive(EnvSchema)]` builds the schema description from a struct
//! declaration; resolution stays an explicit call:
//!
//! ```rust
//! use std::collections::HashMap;
//! use envbind::{build_config, EnvSchema, Options, Value};
//!
//! #[derive(EnvSchema)]
//! struct ServerConfig {
//!     host: String,
//!     #[env(default = 8080)]
//!     port: i64,
//!     debug: Option<bool>,
//! }
//!
//! let env: HashMap<String, String> =
//!     [("HOST".to_string(), "0.0.0.0".to_string())].into_iter().collect();
//!
//! let config = build_config(&ServerConfig::schema(), &env, &Options::default())?;
//! assert_eq!(config.get("host")?, Some(&Value::Str("0.0.0.0".to_string())));
//! assert_eq!(config.get("port")?, Some(&Value::Int(8080)));
//! assert_eq!(config.get("debug")?, None);
//! # Ok::<(), envbind::BindError>(())
//! ```
//!
//! # Lazy missing-variable checks
//!
//! With [`Options::lazy_missing`] enabled, a missing required variable does
//! not fail resolution; the error is stored on the [`Config`] and raised on
//! every access to that attribute, while all other attributes resolve
//! normally.

mod convert;
mod error;
mod resolve;
mod schema;
mod value;

pub use convert::{convert, ConvertError};
pub use error::BindError;
pub use resolve::{build_config, CaseTransform, Config, Env, Options, ProcessEnv};
pub use schema::{Attr, Schema};
pub use value::{CustomType, DeclaredType, EnumType, Kind, ParseFn, Value};

pub use envbind_derive::EnvSchema;
