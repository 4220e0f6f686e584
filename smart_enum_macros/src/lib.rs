use proc_macro::TokenStream;

mod derive;

/// Implement `smart_enum::SmartEnum` for a fieldless enum.
///
/// Explicit discriminants must be integer literals, optionally negated.
#[proc_macro_derive(SmartEnum)]
pub fn smart_enum(tokens: TokenStream) -> TokenStream {
    derive::derive(tokens)
}
