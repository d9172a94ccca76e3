//! `chars!`: spelling a string literal as an argument list of characters.

use {
    proc_macro2::{Literal, Span, TokenStream},
    quote::{quote, ToTokens},
    syn::{
        parse::{Parse, ParseStream, Result},
        LitStr,
    },
};

use crate::rebind_crate;

/// The characters of a string literal, in order.
///
/// Expands to an `Arguments` carrier holding one `Char<'c'>` per character, so that
/// `chars!("ab")` is `Arguments<(Char<'a'>, (Char<'b'>, ()))>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chars {
    chars: Vec<char>,
}

impl Chars {
    /// The characters to be spelled.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for Chars {
    fn from(s: &str) -> Self {
        Chars {
            chars: s.chars().collect(),
        }
    }
}

impl Parse for Chars {
    fn parse(input: ParseStream) -> Result<Self> {
        let lit: LitStr = input.parse()?;
        Ok(Chars::from(lit.value().as_str()))
    }
}

impl ToTokens for Chars {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let c = rebind_crate(Span::call_site());
        let list = self.chars.iter().rev().fold(quote!(()), |tail, &ch| {
            let ch = Literal::character(ch);
            quote!((#c::value::Char<#ch>, #tail))
        });
        quote!(#c::Arguments<#list>).to_tokens(tokens)
    }
}
