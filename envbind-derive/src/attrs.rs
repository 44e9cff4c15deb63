//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates the per-field options of an
//! `EnvSchema`-derived struct during macro expansion.

use syn::Field;

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Explicit default value expression.
    ///
    /// If `None`, the field has no default: required unless its type is
    /// `Option<T>`.
    pub default: Option<proc_macro2::TokenStream>,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes from a struct field.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // default = value
                if meta.path.is_ident("default") {
                    if !meta.input.peek(syn::Token![=]) {
                        return Err(meta.error("default requires a value: #[env(default = ...)]"));
                    }
                    let value = meta.value()?;
                    let tokens: proc_macro2::TokenStream = value.parse()?;
                    attrs.default = Some(tokens);
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute"))
            })?;
        }

        Ok(attrs)
    }
}
