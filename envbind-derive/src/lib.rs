//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident, Type};

mod attrs;

use attrs::FieldAttrs;

/// Map a primitive type ident to its `envbind::Kind` tokens.
///
/// `u64` is deliberately absent: converted values are `i64` and the full
/// `u64` range does not fit.
fn kind_tokens(ident: &Ident) -> Option<proc_macro2::TokenStream> {
    let name = ident.to_string();
    match name.as_str() {
        "String" => Some(quote!(::envbind::Kind::Str)),
        "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32" | "usize" => {
            Some(quote!(::envbind::Kind::Int))
        }
        "f32" | "f64" => Some(quote!(::envbind::Kind::Float)),
        "bool" => Some(quote!(::envbind::Kind::Bool)),
        _ => None,
    }
}

/// Last path segment of a bare type path, e.g. `String` in
/// `std::string::String`. Returns `None` for anything else.
fn bare_ident(ty: &Type) -> Option<&Ident> {
    if let Type::Path(type_path) = ty {
        if type_path.qself.is_none() {
            if let Some(seg) = type_path.path.segments.last() {
                if matches!(seg.arguments, syn::PathArguments::None) {
                    return Some(&seg.ident);
                }
            }
        }
    }
    None
}

/// Extract inner type from `Option<T>`, if `ty` has that shape.
fn extract_option_inner_type(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = ty {
        if let Some(seg) = type_path.path.segments.last() {
            if seg.ident == "Option" {
                if let syn::PathArguments::AngleBracketed(args) = &seg.arguments {
                    if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
                        return Some(inner);
                    }
                }
            }
        }
    }
    None
}

/// `EnvSchema` derive macro
///
/// Generates a `schema()` associated function returning the
/// `envbind::Schema` described by the struct's fields. Resolution stays an
/// explicit call (`envbind::build_config` or `Schema::from_env`).
///
/// # Field mapping
///
/// - `String` declares a `str` attribute
/// - integer primitives declare `int`, `f32`/`f64` declare `float`,
///   `bool` declares `bool`
/// - `Option<T>` declares the optional form of `T`'s mapping
/// - `#[env(default = value)]` supplies the explicit default; allowed on
///   `Option<T>` fields too, where it takes precedence over the implicit
///   "no value" default
///
/// Enumeration and custom kinds have no struct-field spelling; build those
/// schemas by hand with the `Schema` builder.
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(EnvSchema, attributes(env))]
pub fn derive_envschema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let struct_name = &input.ident;
    let schema_name = struct_name.to_string();

    // Extract fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    &input,
                    "EnvSchema only supports structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "EnvSchema only supports structs")
                .to_compile_error()
                .into();
        }
    };

    // Generate one builder call per field
    let mut attr_calls = Vec::with_capacity(fields.len());
    for field in fields {
        let field_name = field.ident.as_ref().unwrap().to_string();

        let attrs = match FieldAttrs::from_field(field) {
            Ok(attrs) => attrs,
            Err(err) => return err.to_compile_error().into(),
        };

        let (scalar_ty, is_option) = match extract_option_inner_type(&field.ty) {
            Some(inner) => (inner, true),
            None => (&field.ty, false),
        };

        let kind = bare_ident(scalar_ty).and_then(kind_tokens);
        let kind = match kind {
            Some(kind) => kind,
            None => {
                return syn::Error::new_spanned(
                    &field.ty,
                    "EnvSchema supports String, integer and float primitives, bool, \
                     and Option of those; build the Schema by hand for enum or \
                     custom kinds",
                )
                .to_compile_error()
                .into();
            }
        };

        let declared = if is_option {
            quote!(::envbind::DeclaredType::optional(#kind))
        } else {
            quote!(::envbind::DeclaredType::new(#kind))
        };

        let call = match attrs.default {
            Some(default) => quote! {
                .attr_with_default(#field_name, #declared, #default)
            },
            None => quote! {
                .attr(#field_name, #declared)
            },
        };
        attr_calls.push(call);
    }

    let expanded = quote! {
        impl #struct_name {
            /// Schema description derived from this struct's fields
            pub fn schema() -> ::envbind::Schema {
                ::envbind::Schema::new(#schema_name)
                    #(#attr_calls)*
            }
        }
    };

    TokenStream::from(expanded)
}
