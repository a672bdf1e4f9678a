//! Compile-time validated ERE macro implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{LitStr, Result};

/// The ere! macro input.
pub struct EreInput {
    /// The pattern string.
    pub pattern: LitStr,
}

impl Parse for EreInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let pattern = input.parse()?;
        // tolerate a trailing comma
        let _: Option<syn::Token![,]> = input.parse()?;
        Ok(Self { pattern })
    }
}

/// Check a pattern the same way `capgroup::Pattern::new` will at run time.
///
/// The builder settings are `CompileOptions::default()` in `capgroup`.
pub fn check(pattern: &str) -> std::result::Result<(), String> {
    let lowered =
        capgroup_syntax::translate(pattern).map_err(|e| format!("invalid ERE pattern: {e}"))?;
    regex::RegexBuilder::new(&lowered)
        .case_insensitive(false)
        .multi_line(false)
        .dot_matches_new_line(true)
        .build()
        .map(|_| ())
        .map_err(|e| format!("invalid ERE pattern: {e}"))
}

/// Generate code for the ere! macro.
pub fn expand(input: EreInput) -> TokenStream {
    if let Err(message) = check(&input.pattern.value()) {
        return syn::Error::new(input.pattern.span(), message).to_compile_error();
    }

    let lit = &input.pattern;

    quote! {
        {
            static PATTERN: ::std::sync::OnceLock<::capgroup::Pattern> =
                ::std::sync::OnceLock::new();
            PATTERN.get_or_init(|| {
                ::capgroup::Pattern::new(#lit).expect("pattern was validated at compile time")
            })
        }
    }
}
