//! Tags for type identity: `#[derive(Tagged)]`, and the identifiers every tag is built from.
//!
//! An identifier is the 32-bit FNV-1a hash of the text of a definition, spelled out most
//! significant digit first as an inductive list of `B0` and `B1`. Tagging a type without
//! arguments gives it the tag `Node<Id, ()>`; containers put the tags of their arguments in
//! place of `()`.

use {
    proc_macro2::{Span, TokenStream},
    quote::{quote, ToTokens},
    syn::{
        parse::{Parse, ParseStream, Result},
        punctuated::Punctuated,
        DeriveInput, Ident, Token, Type,
    },
};

use crate::{rebind_crate, DeriveError};

/// The number of binary digits in an identifier.
pub const ID_DIGITS: u32 = 32;

/// The identifier of a definition, hashed from its text.
pub fn id_of(text: &str) -> u32 {
    text.bytes().fold(0x811c_9dc5, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(0x0100_0193)
    })
}

/// The type-level digits of `id`, naming `B0` and `B1` inside the module at `same`.
pub fn id_digits(id: u32, same: &TokenStream) -> TokenStream {
    (0..ID_DIGITS).fold(quote!(()), |tail, i| {
        let digit = if (id >> i) & 1 == 1 {
            quote!(#same::B1)
        } else {
            quote!(#same::B0)
        };
        quote!((#digit, #tail))
    })
}

/// A type without arguments, to be tagged by `#[derive(Tagged)]`.
#[derive(Debug, Clone)]
pub struct LeafDef {
    ident: Ident,
    id: u32,
}

impl LeafDef {
    /// Read a leaf type from the input to `#[derive(Tagged)]`.
    ///
    /// A generic type has arguments, so it must be registered as a container instead.
    pub fn from_derive_input(input: &DeriveInput) -> Result<Self> {
        if let Some(param) = input.generics.params.first() {
            return Err(DeriveError::GenericLeaf(input.ident.to_string())
                .at(syn::spanned::Spanned::span(param))
                .into());
        }
        Ok(LeafDef {
            ident: input.ident.clone(),
            id: id_of(&input.to_token_stream().to_string()),
        })
    }

    /// The identifier hashed from the definition.
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl ToTokens for LeafDef {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let c = rebind_crate(Span::call_site());
        let ident = &self.ident;
        let digits = id_digits(self.id, &quote!(#c::same));
        quote! {
            impl #c::same::Tagged for #ident {
                type Tag = #c::same::Node<#digits, ()>;
            }
        }
        .to_tokens(tokens)
    }
}

/// A list of types without arguments, tagged from inside the `rebind` crate itself.
#[derive(Debug, Clone)]
pub struct Leaves {
    types: Vec<Type>,
}

impl Parse for Leaves {
    fn parse(input: ParseStream) -> Result<Self> {
        let types = Punctuated::<Type, Token![,]>::parse_terminated(input)?;
        Ok(Leaves {
            types: types.into_iter().collect(),
        })
    }
}

impl ToTokens for Leaves {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        for ty in &self.types {
            let digits = id_digits(id_of(&ty.to_token_stream().to_string()), &quote!(crate::same));
            quote! {
                impl crate::same::Tagged for #ty {
                    type Tag = crate::same::Node<#digits, ()>;
                }
            }
            .to_tokens(tokens)
        }
    }
}

/// The digits of the identifier hashed from `text`, for use inside the `rebind` crate itself.
pub fn id_in_crate(text: &str) -> TokenStream {
    id_digits(id_of(text), &quote!(crate::same))
}
