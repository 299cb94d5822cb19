//! Fully-qualified paths used in generated code.

use proc_macro2::TokenStream;
use quote::quote;

pub fn record() -> TokenStream {
    quote!(::topn::Record)
}

pub fn field_def() -> TokenStream {
    quote!(::topn::FieldDef)
}

pub fn value() -> TokenStream {
    quote!(::topn::Value)
}

pub fn value_kind() -> TokenStream {
    quote!(::topn::ValueKind)
}

pub fn column_value() -> TokenStream {
    quote!(::topn::ColumnValue)
}

pub fn result() -> TokenStream {
    quote!(::topn::Result)
}
