//! Vocabulary derive macro implementation
//!
//! Generates the `Vocabulary` trait implementation together with `Display`,
//! `FromStr` and label-based `Serialize`/`Deserialize` for unit-only enums.

use darling::{ast, FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Sentinel used when the enum does not declare one
const DEFAULT_SENTINEL: &str = "All";

/// Receiver for the enum that derives Vocabulary
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(vocabulary), supports(enum_unit))]
pub struct VocabularyReceiver {
    /// The enum identifier
    ident: syn::Ident,
    /// The enum variants
    data: ast::Data<VocabularyVariantReceiver, ()>,
    /// Human readable vocabulary name used in error messages
    #[darling(default)]
    name: Option<String>,
    /// The "All ..." value that disables a filter on this vocabulary
    #[darling(default)]
    sentinel: Option<String>,
}

/// Receiver for a single unit variant
#[derive(Debug, FromVariant)]
#[darling(attributes(vocabulary))]
pub struct VocabularyVariantReceiver {
    /// The variant identifier
    ident: syn::Ident,
    /// Display label, defaults to the identifier
    #[darling(default)]
    label: Option<String>,
}

/// Process the Vocabulary derive macro
pub fn process_derive_vocabulary(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand_vocabulary(&input))
}

/// Expand a parsed derive input into the generated implementation
///
/// Darling errors are turned into `compile_error!` tokens.
pub fn expand_vocabulary(input: &DeriveInput) -> proc_macro2::TokenStream {
    let receiver = match VocabularyReceiver::from_derive_input(input) {
        Ok(receiver) => receiver,
        Err(err) => return err.write_errors(),
    };

    let ast::Data::Enum(variants) = &receiver.data else {
        unreachable!("Darling ensures this is an enum")
    };

    generate_vocabulary_impl(&receiver, variants)
}

fn generate_vocabulary_impl(
    receiver: &VocabularyReceiver,
    variants: &[VocabularyVariantReceiver],
) -> proc_macro2::TokenStream {
    let enum_name = &receiver.ident;
    let vocabulary_name = receiver
        .name
        .clone()
        .unwrap_or_else(|| enum_name.to_string());
    let sentinel = receiver
        .sentinel
        .clone()
        .unwrap_or_else(|| DEFAULT_SENTINEL.to_string());

    let idents: Vec<&syn::Ident> = variants.iter().map(|v| &v.ident).collect();
    let labels: Vec<String> = variants
        .iter()
        .map(|v| v.label.clone().unwrap_or_else(|| v.ident.to_string()))
        .collect();

    quote! {
        impl crate::models::vocabulary::Vocabulary for #enum_name {
            const NAME: &'static str = #vocabulary_name;
            const SENTINEL: &'static str = #sentinel;
            const VARIANTS: &'static [Self] = &[#(Self::#idents),*];

            fn label(&self) -> &'static str {
                match self {
                    #(Self::#idents => #labels,)*
                }
            }
        }

        impl ::std::fmt::Display for #enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(crate::models::vocabulary::Vocabulary::label(self))
            }
        }

        impl ::std::str::FromStr for #enum_name {
            type Err = crate::error::PopHealthError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim() {
                    #(#labels => Ok(Self::#idents),)*
                    other => Err(crate::error::PopHealthError::unknown_label(#vocabulary_name, other)),
                }
            }
        }

        impl ::serde::Serialize for #enum_name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(crate::models::vocabulary::Vocabulary::label(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for #enum_name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let label = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                label.parse().map_err(::serde::de::Error::custom)
            }
        }
    }
}
