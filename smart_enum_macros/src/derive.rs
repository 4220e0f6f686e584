use proc_macro::TokenStream;
use quote::quote;

pub fn derive(tokens: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(tokens as syn::DeriveInput);
    match expand(input) {
        Ok(output) => output.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "SmartEnum can not be derived for generic enums",
        ));
    }

    let data = match &input.data {
        syn::Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "SmartEnum can only be derived for enums",
            ));
        }
    };

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "SmartEnum requires at least one variant",
        ));
    }

    let declaration = render_declaration(data)?;
    let ident = &input.ident;
    let variants = data.variants.iter().map(|v| &v.ident);

    Ok(quote! {
        smart_enum::__impl_smart_enum!(#ident, #declaration, [#(#variants),*]);
    })
}

/// Render the enumerator list, e.g. `"A, B = 5, C"`.
fn render_declaration(data: &syn::DataEnum) -> syn::Result<String> {
    let mut entries = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        if !matches!(variant.fields, syn::Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "SmartEnum variants can not have fields",
            ));
        }

        match &variant.discriminant {
            Some((_, expr)) => {
                let value = i32::try_from(literal_value(expr)?).map_err(|_| {
                    syn::Error::new_spanned(expr, "discriminant does not fit into an i32")
                })?;
                entries.push(format!("{} = {}", variant.ident, value));
            }
            None => entries.push(variant.ident.to_string()),
        }
    }

    Ok(entries.join(", "))
}

fn literal_value(expr: &syn::Expr) -> syn::Result<i64> {
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(lit),
            ..
        }) => lit.base10_parse(),
        syn::Expr::Unary(syn::ExprUnary {
            op: syn::UnOp::Neg(_),
            expr,
            ..
        }) => Ok(-literal_value(expr)?),
        syn::Expr::Paren(syn::ExprParen { expr, .. }) => literal_value(expr),
        other => Err(syn::Error::new_spanned(
            other,
            "SmartEnum discriminants must be integer literals",
        )),
    }
}
