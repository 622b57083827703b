mod enum_variants;

use proc_macro::TokenStream;

/// Adds `variants()` listing all unit variants in declaration order and
/// `variant_name()` returning the identifier of a value.
#[proc_macro_derive(EnumVariants)]
pub fn enum_variants_derive(input: TokenStream) -> TokenStream {
    enum_variants::derive_enum_variants(input)
}
