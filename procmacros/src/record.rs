use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Field, Fields, LitBool, LitStr, Result};

use crate::paths;

/// Parsed `#[column(...)]` options for one field.
#[derive(Default)]
struct ColumnAttrs {
    name: Option<String>,
    primary: bool,
    unmapped: bool,
}

fn parse_column_attrs(field: &Field) -> Result<ColumnAttrs> {
    let mut attrs = ColumnAttrs::default();

    for attr in field.attrs.iter().filter(|a| a.path().is_ident("column")) {
        attr.parse_nested_meta(|meta| {
            let path_ident = meta
                .path
                .get_ident()
                .ok_or_else(|| Error::new_spanned(&meta.path, "Expected identifier"))?;

            match path_ident.to_string().to_ascii_uppercase().as_str() {
                "PRIMARY" | "PRIMARY_KEY" | "PK" => {
                    attrs.primary = if meta.input.peek(syn::Token![=]) {
                        meta.value()?.parse::<LitBool>()?.value
                    } else {
                        true
                    };
                }
                "NAME" => {
                    attrs.name = Some(meta.value()?.parse::<LitStr>()?.value());
                }
                "UNMAPPED" => {
                    attrs.unmapped = true;
                }
                _ => {
                    return Err(meta.error(format!(
                        "unknown column option `{path_ident}`; expected `primary`, `name` or `unmapped`"
                    )));
                }
            }
            Ok(())
        })?;
    }

    Ok(attrs)
}

pub(crate) fn generate_record_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(Error::new_spanned(
                    struct_name,
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(Error::new_spanned(
                struct_name,
                "Record can only be derived for structs",
            ));
        }
    };

    let record = paths::record();
    let field_def = paths::field_def();
    let value = paths::value();
    let value_kind = paths::value_kind();
    let column_value = paths::column_value();
    let result = paths::result();

    let mut defs = Vec::with_capacity(fields.len());
    let mut arms = Vec::with_capacity(fields.len());

    for (idx, field) in fields.iter().enumerate() {
        let attrs = parse_column_attrs(field)?;
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new_spanned(field, "Record fields must be named"))?;
        let ty = &field.ty;
        let name = ident.to_string();
        let name = name.strip_prefix("r#").unwrap_or(&name).to_string();
        let column = attrs.name.unwrap_or_default();
        let primary = attrs.primary;

        if attrs.unmapped {
            defs.push(quote! {
                #field_def::new(#name, #column, #value_kind::Unmapped, #primary)
            });
            continue;
        }

        defs.push(quote! {
            #field_def::new(#name, #column, <#ty as #column_value>::KIND, #primary)
        });
        arms.push(quote! {
            #idx => self.#ident = <#ty as #column_value>::from_value(value)?,
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #record for #struct_name #ty_generics #where_clause {
            const FIELDS: &'static [#field_def] = &[
                #(#defs,)*
            ];

            #[allow(unused_variables)]
            fn set_field(&mut self, index: usize, value: #value) -> #result<()> {
                match index {
                    #(#arms)*
                    _ => {}
                }
                ::core::result::Result::Ok(())
            }
        }
    })
}
