extern crate proc_macro;

mod paths;
mod record;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives the `Record` trait for a struct with named fields, producing the
/// field/column descriptor and the per-field decoder.
///
/// # Field attributes
///
/// - `#[column(primary)]` or `#[column(primary = true)]` marks the primary
///   key. Only the first marked field counts.
/// - `#[column(name = "col")]` maps the field to a differently named column.
///   An empty name falls back to the field name.
/// - `#[column(unmapped)]` selects the column but never decodes it; the field
///   keeps its `Default` value. Required for field types without a
///   `ColumnValue` impl.
///
/// # Example
///
/// ```ignore
/// #[derive(Record, Default, Clone, Debug)]
/// struct Catalog {
///     #[column(primary, name = "id")]
///     id: i32,
///     #[column(name = "title")]
///     title: String,
///     description: String,
/// }
/// ```
#[proc_macro_derive(Record, attributes(column))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match record::generate_record_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
