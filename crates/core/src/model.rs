use serde::Serialize;
use std::path::PathBuf;

/// One discovered route declaration: a concrete type carrying
/// `#[route(path = "…")]`, together with its enclosing module path.
///
/// Declarations are materialized once per run by the discoverer and are
/// immutable afterwards. The raw `path` value is kept exactly as written in
/// the source; case normalization happens only inside the generated matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDeclaration {
    /// `::`-separated module path of the enclosing scope. Empty for items at
    /// the crate root.
    pub package_name: String,
    /// The type identifier the marker is attached to.
    pub simple_name: String,
    /// The raw route path string from the marker.
    pub path: String,
}

impl RouteDeclaration {
    /// Fully-qualified name of the declaring type.
    pub fn qualified_name(&self) -> String {
        if self.package_name.is_empty() {
            self.simple_name.clone()
        } else {
            format!("{}::{}", self.package_name, self.simple_name)
        }
    }

    /// Name of the generated resolver type (fixed `__Route` suffix).
    pub fn resolver_name(&self) -> String {
        format!("{}__Route", self.simple_name)
    }
}

/// The rendered output artifact for one declaration, before persistence.
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    /// Module path the unit belongs to (same package as the declaration).
    pub package_name: String,
    /// Generated resolver type name, e.g. `OrderScreen__Route`.
    pub type_name: String,
    /// Output location relative to the generated-output directory, derived
    /// deterministically from package and type name.
    pub relative_path: PathBuf,
    /// Complete source text of the unit.
    pub source: String,
}

/// Summary of one generator run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    /// Well-formed declarations found by the discoverer.
    pub discovered: usize,
    /// Units written to the output directory.
    pub generated: usize,
    /// Declarations or files excluded with a diagnostic.
    pub excluded: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_joins_package_and_type() {
        let decl = RouteDeclaration {
            package_name: "app::screens".to_string(),
            simple_name: "OrderScreen".to_string(),
            path: "/app/OrderScreen".to_string(),
        };
        assert_eq!(decl.qualified_name(), "app::screens::OrderScreen");
        assert_eq!(decl.resolver_name(), "OrderScreen__Route");
    }

    #[test]
    fn qualified_name_at_crate_root_is_the_simple_name() {
        let decl = RouteDeclaration {
            package_name: String::new(),
            simple_name: "Home".to_string(),
            path: "/Home".to_string(),
        };
        assert_eq!(decl.qualified_name(), "Home");
    }
}
