//! Procedural macros for the pophealth crate
//!
//! This crate provides procedural macros for generating the boilerplate that
//! every closed clinical vocabulary in pophealth needs: label lookup,
//! parsing, display and label-based serde.

use proc_macro::TokenStream;

mod vocabulary;

// Tests
#[cfg(test)]
mod tests;

/// Derive macro for closed label vocabularies
///
/// The derive is meant to be used inside the pophealth crate: the generated
/// code implements `crate::models::vocabulary::Vocabulary` and reports parse
/// failures as `crate::error::PopHealthError`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Vocabulary)]
/// #[vocabulary(name = "risk level", sentinel = "All Levels")]
/// pub enum RiskLevel {
///     #[vocabulary(label = "Critical")]
///     Critical,
///     #[vocabulary(label = "High")]
///     High,
/// }
/// ```
///
/// Variants without a `label` use their identifier; an enum without a
/// `sentinel` uses `"All"`.
#[proc_macro_derive(Vocabulary, attributes(vocabulary))]
pub fn derive_vocabulary(input: TokenStream) -> TokenStream {
    vocabulary::process_derive_vocabulary(input)
}
