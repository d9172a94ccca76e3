//! Generators for the per-arity implementations the `rebind` crate needs for tuples and numbers.
//!
//! Tuples and inductive lists are both built from pairs, so none of these can be blanket
//! implementations without overlapping: every arity gets its own impl instead. These are only
//! invoked from inside `rebind` itself, so the generated code names items by `crate::` paths.

use {
    proc_macro2::{Literal, TokenStream},
    quote::{format_ident, quote},
    syn::Ident,
};

/// The type parameters `T0, T1, ...` of a tuple of arity `n`.
fn params(n: usize) -> Vec<Ident> {
    (0..n).map(|i| format_ident!("T{}", i)).collect()
}

/// The inductive list `(T0, (T1, ... ()))` over the given parameters.
fn list_of(params: &[Ident]) -> TokenStream {
    params
        .iter()
        .rev()
        .fold(quote!(()), |tail, param| quote!((#param, #tail)))
}

/// The tuple `(T0, T1, ...)` over the given parameters.
fn tuple_of(params: &[Ident]) -> TokenStream {
    if params.len() == 1 {
        let param = &params[0];
        quote!((#param,))
    } else {
        quote!((#(#params),*))
    }
}

/// Implement `Tuple` and `IntoTuple` for every tuple of arity 0 through `max`.
pub fn impl_tuples(max: usize) -> TokenStream {
    let mut out = TokenStream::new();
    for n in 0..=max {
        let params = params(n);
        let list = list_of(&params);
        let tuple = tuple_of(&params);
        out.extend(quote! {
            impl<#(#params),*> crate::tuple::Tuple for #tuple {
                type AsList = #list;
            }

            impl<#(#params),*> crate::tuple::IntoTuple for #list {
                type AsTuple = #tuple;
            }
        });
    }
    out
}

/// Register every tuple of arity 0 through `max` as a container with the template
/// `TupleTemplate`, tagged by its arguments.
pub fn impl_tuple_containers(max: usize) -> TokenStream {
    let id = crate::tags::id_in_crate("TupleTemplate");
    let mut out = TokenStream::new();
    for n in 0..=max {
        let params = params(n);
        let list = list_of(&params);
        let tuple = tuple_of(&params);
        let tags = params.iter().rev().fold(quote!(()), |tail, param| {
            quote!((<#param as crate::same::Tagged>::Tag, #tail))
        });
        out.extend(quote! {
            impl<#(#params: crate::same::Tagged),*> crate::same::Tagged for #tuple {
                type Tag = crate::same::Node<#id, #tags>;
            }

            impl<#(#params),*> crate::container::Container for #tuple {
                type Template = crate::container::TupleTemplate;
                type Args = #list;
            }

            impl<#(#params),*> crate::container::Instantiate<#list>
                for crate::container::TupleTemplate
            {
                type Instance = #tuple;
            }
        });
    }
    out
}

/// Implement `ToUnary` for `Number<0>` through `Number<max>`, and `ToConstant` for the unary
/// numbers they convert to.
pub fn unary_conversions(max: usize) -> TokenStream {
    let mut out = TokenStream::new();
    let mut unary = quote!(crate::unary::Z);
    for n in 0..=max {
        let n = Literal::usize_unsuffixed(n);
        out.extend(quote! {
            impl crate::unary::ToUnary for crate::unary::Number<#n> {
                type AsUnary = #unary;
            }

            impl crate::unary::ToConstant for #unary {
                type AsConstant = crate::unary::Number<#n>;
            }
        });
        unary = quote!(crate::unary::S<#unary>);
    }
    out
}
