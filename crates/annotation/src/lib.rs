// The #[route] marker attribute consumed by the signpost generator.

use proc_macro::TokenStream;
use syn::parse::{Parse, ParseStream};
use syn::LitStr;

/// Marks a concrete type as a navigable route target.
///
/// The attribute is inert: it validates its argument shape and re-emits the
/// item unchanged. Discovery and code generation happen in `signpost-core`,
/// which scans the source tree for this marker.
///
/// # Example
///
/// ```ignore
/// #[route(path = "/app/OrderScreen")]
/// pub struct OrderScreen;
/// ```
#[proc_macro_attribute]
pub fn route(args: TokenStream, input: TokenStream) -> TokenStream {
    match syn::parse2::<RouteArgs>(args.into()) {
        Ok(_) => input,
        Err(err) => {
            // Surface the argument error but keep the item compiling, so one
            // bad marker does not cascade into unrelated resolution errors.
            let mut out = TokenStream::from(err.to_compile_error());
            out.extend(input);
            out
        }
    }
}

struct RouteArgs {
    #[allow(dead_code)]
    path: LitStr,
}

impl Parse for RouteArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: syn::Ident = input
            .parse()
            .map_err(|_| input.error("expected `path = \"…\"`"))?;
        if key != "path" {
            return Err(syn::Error::new(key.span(), "expected `path = \"…\"`"));
        }
        input.parse::<syn::Token![=]>()?;
        let path: LitStr = input.parse()?;
        Ok(RouteArgs { path })
    }
}

#[cfg(test)]
mod tests {
    use super::RouteArgs;
    use quote::quote;

    #[test]
    fn accepts_a_path_argument() {
        let args: RouteArgs = syn::parse2(quote! { path = "/app/OrderScreen" }).unwrap();
        assert_eq!(args.path.value(), "/app/OrderScreen");
    }

    #[test]
    fn accepts_an_empty_path() {
        // The empty-path policy belongs to the discoverer, which excludes the
        // declaration with a diagnostic instead of failing the build.
        let args: RouteArgs = syn::parse2(quote! { path = "" }).unwrap();
        assert_eq!(args.path.value(), "");
    }

    #[test]
    fn rejects_missing_or_unknown_arguments() {
        assert!(syn::parse2::<RouteArgs>(quote! {}).is_err());
        assert!(syn::parse2::<RouteArgs>(quote! { name = "x" }).is_err());
        assert!(syn::parse2::<RouteArgs>(quote! { path = 42 }).is_err());
    }
}
