//! Introspection of generic types: taking a type apart into its template and its argument list,
//! and putting a template back together with a new argument list.
//!
//! A *container* is any type of the shape `Template<A1, ..., An>` whose parameters are all
//! types. Rust cannot name `Template` on its own, so each container kind is registered with a
//! zero-sized *template token* standing in for it:
//!
//! - [`Container`] takes an instance apart, giving its template token and the inductive
//!   [`List`] of its arguments.
//! - [`Instantiate`] is implemented by a template token for every argument list it accepts, and
//!   puts an instance back together.
//!
//! Tuples up to arity 64, the [`Arguments`] carrier, and a handful of standard library types
//! are registered here. Other types are registered with
//! [`#[derive(Container)]`](macro@crate::Container).
//!
//! # Examples
//!
//! ```
//! use rebind::prelude::*;
//! use rebind::container::{ArgsOf, Instance, OptionTemplate, TemplateOf, TupleTemplate};
//! use static_assertions::assert_type_eq_all;
//!
//! assert_type_eq_all!(TemplateOf<(u8, char)>, TupleTemplate);
//! assert_type_eq_all!(ArgsOf<(u8, char)>, (u8, (char, ())));
//! assert_type_eq_all!(Instance<OptionTemplate, (u8, ())>, Option<u8>);
//! ```

use std::marker::PhantomData;

use crate::list::List;
use crate::same::{Node, TagList, Tagged};

/// A type whose parameters can be enumerated and replaced.
///
/// For a container `C`, `C::Args` lists its type arguments in order, and `C::Template` is a
/// token for its primary template, such that instantiating `C::Template` with `C::Args` gives
/// back `C`.
pub trait Container {
    /// The token for the primary template of this container.
    type Template;

    /// The type arguments of this container, as an inductive list.
    type Args: List;
}

/// A template token which can be applied to the argument list `Args`.
///
/// A template only implements this trait for argument lists of an arity it accepts; applying it
/// to any other list fails to elaborate.
pub trait Instantiate<Args: List> {
    /// The template applied to `Args`.
    type Instance: Container<Template = Self, Args = Args>;
}

/// The template token of the container `C`.
pub type TemplateOf<C> = <C as Container>::Template;

/// The argument list of the container `C`.
pub type ArgsOf<C> = <C as Container>::Args;

/// The template `T` applied to the argument list `Args`.
pub type Instance<T, Args> = <T as Instantiate<Args>>::Instance;

/// A container of any arity with no other meaning, holding its arguments as an inductive list.
///
/// Operations which need "some sequence" without caring which container it ends up in use this
/// as scratch space; [`Append`](crate::Append), for instance, joins a container with a one-element
/// carrier. The [`Args!`](crate::Args!) macro writes one out from a flat list of types.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    PartialOrd(bound = ""),
    Ord(bound = ""),
    Hash(bound = "")
)]
pub struct Arguments<L>(PhantomData<fn() -> L>);

/// The template token for [`Arguments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ArgumentsTemplate;

impl<L: List> Container for Arguments<L> {
    type Template = ArgumentsTemplate;
    type Args = L;
}

impl<L: List> Instantiate<L> for ArgumentsTemplate {
    type Instance = Arguments<L>;
}

impl<L: List + TagList> Tagged for Arguments<L> {
    type Tag = Node<rebind_macro::tag_id!(ArgumentsTemplate), L::Tags>;
}

/// The template token for tuples.
///
/// Tuples of arity 0 through 64 are containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TupleTemplate;

/// Register standard library types, whose parameters are all types, as containers tagged by
/// their arguments.
macro_rules! std_containers {
    (@list) => { () };
    (@list $head:ident $(, $tail:ident)*) => { ($head, std_containers!(@list $($tail),*)) };
    ($($(#[$attr:meta])* $template:ident => $name:ident<$($param:ident),+>;)*) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
            pub struct $template;

            impl<$($param),+> Container for $name<$($param),+> {
                type Template = $template;
                type Args = std_containers!(@list $($param),+);
            }

            impl<$($param),+> Instantiate<std_containers!(@list $($param),+)> for $template {
                type Instance = $name<$($param),+>;
            }

            impl<$($param: Tagged),+> Tagged for $name<$($param),+> {
                type Tag = Node<
                    rebind_macro::tag_id!($template),
                    <std_containers!(@list $($param),+) as TagList>::Tags,
                >;
            }
        )*
    };
}

std_containers! {
    /// The template token for [`PhantomData`].
    PhantomDataTemplate => PhantomData<T>;
    /// The template token for [`Option`].
    OptionTemplate => Option<T>;
    /// The template token for [`Result`].
    ResultTemplate => Result<T, E>;
    /// The template token for [`Box`].
    BoxTemplate => Box<T>;
    /// The template token for [`Vec`].
    VecTemplate => Vec<T>;
}

rebind_macro::impl_tuple_containers!(64);

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    assert_type_eq_all!(ArgsOf<()>, ());
    assert_type_eq_all!(ArgsOf<(u8,)>, (u8, ()));
    assert_type_eq_all!(TemplateOf<Result<u8, ()>>, ResultTemplate);
    assert_type_eq_all!(ArgsOf<Result<u8, ()>>, (u8, ((), ())));
    assert_type_eq_all!(Instance<TupleTemplate, ()>, ());
    assert_type_eq_all!(Instance<TupleTemplate, (u8, (u16, ()))>, (u8, u16));
    assert_type_eq_all!(Instance<VecTemplate, (u8, ())>, Vec<u8>);
    assert_type_eq_all!(Instance<ArgumentsTemplate, (u8, ())>, Arguments<(u8, ())>);

    assert_impl_all!(
        (u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8): Container
    );
    assert_impl_all!(Arguments<()>: Container, Copy, Default);

    // Fixed-arity templates only accept argument lists of their own arity.
    assert_not_impl_any!(OptionTemplate: Instantiate<()>, Instantiate<(u8, (u8, ()))>);
    assert_not_impl_any!(ResultTemplate: Instantiate<(u8, ())>);
}
