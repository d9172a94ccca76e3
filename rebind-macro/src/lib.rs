extern crate proc_macro;

use {
    proc_macro::TokenStream,
    quote::ToTokens,
    rebind_compiler::{tags, tuples, Chars, ContainerDef, LeafDef, Leaves},
    syn::{parse_macro_input, DeriveInput, LitInt},
};

/// Register a generic type as a container, so that the operations of `rebind` can take its
/// arguments apart and apply new ones to it.
///
/// The derive generates a zero-sized *template token* named after the type with a `Template`
/// suffix, and implements `Container` for the type and `Instantiate` for the token. It also
/// implements `Tagged` for the type, comparing its template and then its arguments, so a
/// container type must not derive `Tagged` as well.
///
/// ```
/// use rebind::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// #[derive(Container)]
/// struct Pair<A, B>(A, B);
///
/// assert_type_eq_all!(Rebind<(u8, char), PairTemplate>, Pair<u8, char>);
/// ```
///
/// # Attributes
///
/// - `#[container(template = Name)]` names the template token `Name` instead.
/// - `#[container(list)]` marks a type whose single parameter is an inductive list of its
///   arguments, like `Row<(A, (B, ()))>`.
/// - `#[container(tuple)]` marks a type whose single parameter is a flat tuple of its arguments,
///   like `Row<(A, B)>`.
///
/// Only type parameters can be arguments: lifetime and const parameters are rejected.
#[proc_macro_derive(Container, attributes(container))]
pub fn derive_container(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match ContainerDef::from_derive_input(&input) {
        Ok(def) => def.into_token_stream().into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Tag a type without generic parameters, so that `Contains` and `SameAs` can find it.
///
/// The tag is hashed from the definition of the type.
///
/// ```
/// use rebind::prelude::*;
///
/// #[derive(Tagged)]
/// struct Meters;
///
/// #[derive(Tagged)]
/// struct Feet;
///
/// assert!(Contains::<(u8, Meters), Meters>::VALUE);
/// assert!(!Contains::<(u8, Meters), Feet>::VALUE);
/// ```
#[proc_macro_derive(Tagged)]
pub fn derive_tagged(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match LeafDef::from_derive_input(&input) {
        Ok(def) => def.into_token_stream().into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// The characters of a string literal as an argument list of `Char` constants.
///
/// ```
/// use rebind::{chars, value::Char, Arguments};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(chars!("ab"), Arguments<(Char<'a'>, (Char<'b'>, ()))>);
/// ```
#[proc_macro]
pub fn chars(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as Chars).into_token_stream().into()
}

#[doc(hidden)]
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    with_arity(input, tuples::impl_tuples)
}

#[doc(hidden)]
#[proc_macro]
pub fn impl_tuple_containers(input: TokenStream) -> TokenStream {
    with_arity(input, tuples::impl_tuple_containers)
}

#[doc(hidden)]
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    with_arity(input, tuples::unary_conversions)
}

#[doc(hidden)]
#[proc_macro]
pub fn impl_leaf_tags(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as Leaves).into_token_stream().into()
}

#[doc(hidden)]
#[proc_macro]
pub fn tag_id(input: TokenStream) -> TokenStream {
    tags::id_in_crate(&input.to_string()).into()
}

fn with_arity(input: TokenStream, generate: fn(usize) -> proc_macro2::TokenStream) -> TokenStream {
    let parsed = syn::parse::<LitInt>(input).and_then(|lit| lit.base10_parse::<usize>());
    match parsed {
        Ok(max) => generate(max).into(),
        Err(err) => err.to_compile_error().into(),
    }
}
