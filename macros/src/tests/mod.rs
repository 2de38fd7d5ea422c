//! Tests for the Vocabulary derive macro
//!
//! The generated code only compiles inside pophealth, so these tests inspect
//! the expanded tokens instead.

use syn::parse_quote;

use crate::vocabulary::expand_vocabulary;

fn expand(input: syn::DeriveInput) -> String {
    expand_vocabulary(&input).to_string()
}

#[test]
fn test_labels_and_sentinel_are_emitted() {
    let output = expand(parse_quote! {
        #[vocabulary(name = "risk level", sentinel = "All Levels")]
        enum RiskLevel {
            #[vocabulary(label = "Critical")]
            Critical,
            #[vocabulary(label = "High")]
            High,
        }
    });

    assert!(output.contains("\"risk level\""));
    assert!(output.contains("\"All Levels\""));
    assert!(output.contains("\"Critical\""));
    assert!(output.contains("impl :: std :: str :: FromStr for RiskLevel"));
    assert!(output.contains("impl :: serde :: Serialize for RiskLevel"));
}

#[test]
fn test_defaults_use_identifier_and_all() {
    let output = expand(parse_quote! {
        enum GapStatus {
            Pending,
            Resolved,
        }
    });

    assert!(output.contains("\"GapStatus\""));
    assert!(output.contains("\"All\""));
    assert!(output.contains("\"Pending\""));
    assert!(output.contains("\"Resolved\""));
}

#[test]
fn test_struct_input_is_rejected() {
    let output = expand(parse_quote! {
        struct NotAnEnum {
            field: u32,
        }
    });

    assert!(output.contains("compile_error"));
}
