use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

pub fn derive_enum_variants(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let data_enum = match &input.data {
        Data::Enum(data_enum) => data_enum,
        _ => {
            return syn::Error::new_spanned(&input.ident, "EnumVariants can only be derived for enums")
                .to_compile_error()
                .into()
        }
    };

    if let Some(variant) = data_enum.variants.iter().find(|v| !matches!(v.fields, Fields::Unit)) {
        return syn::Error::new_spanned(&variant.ident, "EnumVariants supports unit variants only")
            .to_compile_error()
            .into();
    }

    let variants = data_enum.variants.iter().map(|variant| {
        let variant_name = &variant.ident;
        quote! { #enum_name::#variant_name }
    });

    let names = data_enum.variants.iter().map(|variant| {
        let variant_name = &variant.ident;
        let name = variant_name.to_string();
        quote! { #enum_name::#variant_name => #name }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics #enum_name #ty_generics #where_clause {
            pub const fn variants() -> &'static [Self] {
                &[
                    #(#variants),*
                ]
            }

            pub const fn variant_name(&self) -> &'static str {
                match self {
                    #(#names),*
                }
            }
        }
    };

    TokenStream::from(expanded)
}
