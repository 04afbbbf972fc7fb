//! Rendering of generated resolver units.
//!
//! Rendering is a pure function of one [`RouteDeclaration`]: the token stream
//! is assembled with `quote` and formatted through `prettyplease`, so the
//! output is byte-for-byte reproducible. Persistence lives in
//! [`crate::persist`].

use crate::error::{Result, SignpostError};
use crate::model::{GeneratedUnit, RouteDeclaration};
use proc_macro2::Span;
use quote::quote;
use std::path::PathBuf;
use syn::Ident;

const HEADER: &str = "// @generated by signpost. Do not edit.\n";

/// Renders the resolver unit for one declaration.
///
/// The unit names the declaring type unqualified, so it must be compiled
/// inside the same module the declaration lives in (the generated file is
/// placed under the matching package directory for that reason).
pub fn render(decl: &RouteDeclaration) -> Result<GeneratedUnit> {
    let resolver = Ident::new(&decl.resolver_name(), Span::call_site());
    let target = Ident::new(&decl.simple_name, Span::call_site());
    let path = &decl.path;

    let tokens = quote! {
        #[allow(non_camel_case_types)]
        pub struct #resolver;

        impl #resolver {
            /// Resolves `path` to the declaring type's descriptor.
            /// Matching is case-insensitive; on no match, returns `None`.
            pub fn find_target_class(path: &str) -> Option<::core::any::TypeId> {
                if path.eq_ignore_ascii_case(#path) {
                    return Some(::core::any::TypeId::of::<#target>());
                }
                None
            }
        }
    };

    let file: syn::File =
        syn::parse2(tokens).map_err(|err| SignpostError::Codegen(err.to_string()))?;
    let source = format!("{HEADER}{}", prettyplease::unparse(&file));

    Ok(GeneratedUnit {
        package_name: decl.package_name.clone(),
        type_name: decl.resolver_name(),
        relative_path: unit_relative_path(decl),
        source,
    })
}

/// Output location, derived deterministically from package and type name:
/// one directory per package segment, file `<simple_name>__route.rs`.
fn unit_relative_path(decl: &RouteDeclaration) -> PathBuf {
    let mut path: PathBuf = decl
        .package_name
        .split("::")
        .filter(|segment| !segment.is_empty())
        .collect();
    path.push(format!("{}__route.rs", snake_case(&decl.simple_name)));
    path
}

fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
