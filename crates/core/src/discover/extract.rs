use crate::model::RouteDeclaration;
use std::path::Path;
use syn::{Attribute, Item, LitStr};
use tracing::warn;

pub(crate) struct Extraction {
    pub declarations: Vec<RouteDeclaration>,
    pub excluded: usize,
}

impl Extraction {
    /// Outcome for a file that could not be read or parsed.
    pub(crate) fn skipped_file() -> Self {
        Self {
            declarations: Vec::new(),
            excluded: 1,
        }
    }
}

/// Extracts the route declarations of one parsed file.
///
/// `package` is the module path of the file's top-level items; inline `mod`
/// blocks extend it while walking. Declarations that violate the marker
/// contract are reported and excluded without failing the pass.
pub(crate) fn extract(package: &str, ast: &syn::File, file: &Path) -> Extraction {
    let mut extraction = Extraction {
        declarations: Vec::new(),
        excluded: 0,
    };
    let mut scope: Vec<String> = package
        .split("::")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    walk_items(&mut scope, &ast.items, file, &mut extraction);
    extraction
}

fn walk_items(scope: &mut Vec<String>, items: &[Item], file: &Path, out: &mut Extraction) {
    for item in items {
        match item {
            Item::Struct(s) => consider(
                scope,
                &s.attrs,
                &s.ident,
                !s.generics.params.is_empty(),
                file,
                out,
            ),
            Item::Enum(e) => consider(
                scope,
                &e.attrs,
                &e.ident,
                !e.generics.params.is_empty(),
                file,
                out,
            ),
            Item::Trait(t) => reject_marked(&t.attrs, &t.ident, "a trait", file, out),
            Item::TraitAlias(t) => reject_marked(&t.attrs, &t.ident, "a trait alias", file, out),
            Item::Type(t) => reject_marked(&t.attrs, &t.ident, "a type alias", file, out),
            Item::Union(u) => reject_marked(&u.attrs, &u.ident, "a union", file, out),
            Item::Fn(f) => reject_marked(&f.attrs, &f.sig.ident, "a function", file, out),
            Item::Mod(m) => {
                if let Some((_, items)) = &m.content {
                    scope.push(m.ident.to_string());
                    walk_items(scope, items, file, out);
                    scope.pop();
                }
            }
            _ => {}
        }
    }
}

/// Validates one candidate type and records it, or reports why it is skipped.
fn consider(
    scope: &[String],
    attrs: &[Attribute],
    ident: &syn::Ident,
    generic: bool,
    file: &Path,
    out: &mut Extraction,
) {
    let Some(attr) = route_attribute(attrs) else {
        return;
    };

    let path = match route_path_value(attr) {
        Ok(Some(path)) => path,
        Ok(None) => {
            warn!(
                "skipping `{ident}` in {}: route marker has no `path` argument",
                file.display()
            );
            out.excluded += 1;
            return;
        }
        Err(err) => {
            warn!(
                "skipping `{ident}` in {}: malformed route marker: {err}",
                file.display()
            );
            out.excluded += 1;
            return;
        }
    };

    if path.is_empty() {
        warn!(
            "skipping `{ident}` in {}: route path is empty",
            file.display()
        );
        out.excluded += 1;
        return;
    }

    if generic {
        warn!(
            "skipping `{ident}` in {}: a generic type has no single route target",
            file.display()
        );
        out.excluded += 1;
        return;
    }

    // A raw identifier cannot be spliced into the `<SimpleName>__Route`
    // resolver name.
    if ident.to_string().starts_with("r#") {
        warn!(
            "skipping `{ident}` in {}: raw-identifier types are not supported as route targets",
            file.display()
        );
        out.excluded += 1;
        return;
    }

    out.declarations.push(RouteDeclaration {
        package_name: scope.join("::"),
        simple_name: ident.to_string(),
        path,
    });
}

fn reject_marked(
    attrs: &[Attribute],
    ident: &syn::Ident,
    kind: &str,
    file: &Path,
    out: &mut Extraction,
) {
    if route_attribute(attrs).is_some() {
        warn!(
            "skipping `{ident}` in {}: {kind} is not an instantiable route target",
            file.display()
        );
        out.excluded += 1;
    }
}

/// The marker is matched by its last path segment, so both `#[route(…)]` and
/// `#[signpost_annotation::route(…)]` count.
fn route_attribute(attrs: &[Attribute]) -> Option<&Attribute> {
    attrs.iter().find(|attr| {
        attr.path()
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "route")
    })
}

/// Reads the `path = "…"` argument, taking the raw value exactly as written.
fn route_path_value(attr: &Attribute) -> syn::Result<Option<String>> {
    let mut value = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("path") {
            let lit: LitStr = meta.value()?.parse()?;
            value = Some(lit.value());
            Ok(())
        } else {
            Err(meta.error("unsupported route marker argument"))
        }
    })?;
    Ok(value)
}
