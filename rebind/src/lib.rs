/*!
![license: MIT](https://img.shields.io/github/license/boltlabs-inc/rebind)
[![crates.io](https://img.shields.io/crates/v/rebind)](https://crates.io/crates/rebind)
[![docs.rs documentation](https://docs.rs/rebind/badge.svg)](https://docs.rs/rebind)

> **rebind (verb):** To bind again, or anew.
>
> **rebind (crate):** An algebra over the type arguments of generic types, evaluated entirely by
> the type checker.

A generic type like `(i32, f64)`, `Result<T, E>` or your own `Pair<A, B>` is a *template*
applied to an ordered list of type arguments. This crate lets type-level code treat that list as
a sequence in its own right: pull it out of one template and apply it to another, join two of
them, reverse one, index into it, map or fold over it, or search it.

Every operation here is a type. None of them exist at runtime, and none of them can fail at
runtime; an operation that makes no sense (the first element of an empty tuple, say) is a type
error at the point it is used.

## Quick reference

The **[`prelude`]** module exports everything needed to use the operations below. Most programs
should `use rebind::prelude::*;`.

| Alias | Result |
| :---- | :----- |
| [`Rebind<C, T>`](Rebind) | the arguments of `C` applied to the template token `T` |
| [`RebindConcrete<C, D>`](RebindConcrete) | the arguments of `C` applied to the template of the container `D` |
| [`RebindArgs<(A, ..., D)>`](RebindArgs) | `A, ...` applied to the template of the container `D` |
| [`Join<A, B>`](Join) | the arguments of `A` then `B`, in the template of `A` |
| [`Append<C, T>`](Append) | `C` with `T` added at the end |
| [`Reverse<C>`](Reverse) | `C` with its arguments reversed |
| [`First<C>`](First), [`Last<C>`](Last) | the first or last argument of `C` |
| [`Nth<N, C>`](Nth) | the argument of `C` at position `N`, counting from zero |
| [`DropFirst<C>`](DropFirst), [`DropLast<C>`](DropLast) | `C` without its first or last argument |
| [`Size<C>`](Size) | the number of arguments of `C`, as a [unary number](unary) |
| [`TransformEach<C, F>`](TransformEach) | `C` with each argument mapped through `F` |
| [`TransformAll<C, F>`](TransformAll) | `C` with its whole argument list replaced by `F` of it |
| [`Accumulate<C, Init, Op>`](Accumulate) | the left fold of the arguments of `C` with `Op` from `Init` |
| [`Any<C, P>`](Any) | whether the predicate `P` holds for any argument of `C` |
| [`Contains<C, X>`](Contains) | whether `X` is an argument of `C` |
| [`Repeat<N, C, F>`](Repeat) | `F` applied to `C`, `N` times over |

Each alias is backed by a trait of the same name in [`ops`], for use in bounds.

## Containers and templates

Rust has no way to name a generic type without its arguments, so each generic type that takes
part is registered with a zero-sized *template token* naming it: [`TupleTemplate`] for tuples,
[`OptionTemplate`](container::OptionTemplate) for [`Option`], and so on. See the [`container`]
module for the details, and [`#[derive(Container)]`](macro@Container) to register your own types.

```
use rebind::prelude::*;
use static_assertions::assert_type_eq_all;

#[derive(Container)]
struct Pair<A, B>(A, B);

assert_type_eq_all!(Rebind<Pair<i32, f64>, TupleTemplate>, (i32, f64));
assert_type_eq_all!(Rebind<(i32, f64), PairTemplate>, Pair<i32, f64>);
assert_type_eq_all!(Join<(i32, f64), (char,)>, (i32, f64, char));
assert_type_eq_all!(Reverse<(i32, f64, f32)>, (f32, f64, i32));
assert_type_eq_all!(DropFirst<(i32, f64, bool)>, (f64, bool));
assert_type_eq_all!(Nth<2, (char, i32, f64)>, f64);
assert_type_eq_all!(Repeat<2, (i32, char, f64), func::DropFirst>, (f64,));
```

## Functions

Operations which take a function, like [`TransformEach`] or [`Accumulate`], take a marker type
implementing [`Apply`](func::Apply) or [`Apply2`](func::Apply2). The [`func`] module has the
functions this crate uses itself, including one for each sequence operation so that they can
be passed to [`Repeat`] and [`TransformAll`].
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod boolean;
pub mod container;
pub mod func;
pub mod list;
pub mod ops;
pub mod same;
pub mod tuple;
pub mod unary;
pub mod value;

pub use container::{Arguments, Container, Instantiate, TupleTemplate};
pub use rebind_macro::{chars, Container, Tagged};

#[allow(unused_imports)] // For documentation linking
use prelude::*;

use unary::UnaryOf;

/// Apply the arguments of the container `C` to the template token `T`.
///
/// `Rebind<Pair<i32, f64>, TupleTemplate>` is `(i32, f64)`. The template must accept that many
/// arguments:
///
/// ```compile_fail
/// # use rebind::prelude::*;
/// use rebind::container::OptionTemplate;
///
/// let _: Option<Rebind<(u8, u16), OptionTemplate>> = None;
/// ```
pub type Rebind<C, T> = <C as ops::Rebind<T>>::Output;

/// Apply the arguments of the container `C` to the template of the container `D`, ignoring the
/// arguments of `D`.
///
/// `RebindConcrete<Pair<i32, f64>, (char,)>` is `(i32, f64)`.
pub type RebindConcrete<C, D> = <C as ops::RebindConcrete<D>>::Output;

/// Apply all but the last element of the tuple `Args` to the template of its last element.
///
/// `RebindArgs<(i32, f64, Pair<char, char>)>` is `Pair<i32, f64>`.
///
/// ```compile_fail
/// # use rebind::prelude::*;
/// // There must be at least one element to take the template from.
/// type Nothing = RebindArgs<()>;
/// let _: Option<Nothing> = None;
/// ```
pub type RebindArgs<Args> = <Args as ops::RebindArgs>::Output;

/// Concatenate the arguments of `A` and `B`, keeping the template of `A`.
///
/// `Join<(i32, f64), Pair<char, bool>>` is `(i32, f64, char, bool)`. The template of `A` must
/// accept the joined arity, so a fixed-arity container cannot grow:
///
/// ```compile_fail
/// # use rebind::prelude::*;
/// let _: Option<Join<Option<u8>, (u16,)>> = None;
/// ```
pub type Join<A, B> = <A as ops::Join<B>>::Output;

/// Add `T` to the end of the arguments of `C`.
///
/// `Append<(i32,), f64>` is `(i32, f64)`.
pub type Append<C, T> = <C as ops::Append<T>>::Output;

/// Reverse the arguments of `C`.
///
/// `Reverse<(i32, f64, f32)>` is `(f32, f64, i32)`.
pub type Reverse<C> = <C as ops::Reverse>::Output;

/// The first argument of `C`.
///
/// `First<(i32, f64)>` is `i32`. An empty container has no first argument:
///
/// ```compile_fail
/// # use rebind::prelude::*;
/// let _: Option<First<()>> = None;
/// ```
pub type First<C> = <C as ops::First>::Output;

/// The last argument of `C`.
///
/// `Last<(i32, f64)>` is `f64`. An empty container has no last argument:
///
/// ```compile_fail
/// # use rebind::prelude::*;
/// let _: Option<Last<()>> = None;
/// ```
pub type Last<C> = <C as ops::Last>::Output;

/// The argument of `C` at the zero-based position `N`.
///
/// `Nth<1, (char, i32, f64)>` is `i32`. There is no argument past the end:
///
/// ```compile_fail
/// # use rebind::prelude::*;
/// let _: Option<Nth<3, (char, i32, f64)>> = None;
/// ```
///
/// `N` is converted with [`UnaryOf`], so past 64 or so the crate using it needs a raised
/// `#![recursion_limit]`, as it does for [`UnaryOf`] itself.
pub type Nth<const N: usize, C> = <C as ops::Nth<UnaryOf<N>>>::Output;

/// The arguments of `C` without the first.
///
/// `DropFirst<(i32, bool)>` is `(bool,)`. An empty container has no first argument to drop:
///
/// ```compile_fail
/// # use rebind::prelude::*;
/// let _: Option<DropFirst<()>> = None;
/// ```
pub type DropFirst<C> = <C as ops::DropFirst>::Output;

/// The arguments of `C` without the last.
///
/// `DropLast<(i32, bool)>` is `(i32,)`. An empty container has no last argument to drop:
///
/// ```compile_fail
/// # use rebind::prelude::*;
/// let _: Option<DropLast<()>> = None;
/// ```
pub type DropLast<C> = <C as ops::DropLast>::Output;

/// The number of arguments of `C`, as a [unary number](unary).
///
/// ```
/// use rebind::prelude::*;
///
/// assert_eq!(Size::<(char, i32, f64)>::VALUE, 3);
/// assert_eq!(Size::<()>::VALUE, 0);
/// ```
pub type Size<C> = <C as ops::Size>::Output;

/// Map each argument of `C` through the element function `F`.
pub type TransformEach<C, F> = <C as ops::TransformEach<F>>::Output;

/// Replace the arguments of `C` with the arguments of the sequence function `F` applied to them.
///
/// ```
/// use rebind::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(TransformAll<Option<u8>, func::Rebind<TupleTemplate>>, Option<u8>);
/// assert_type_eq_all!(TransformAll<(i32, f64), func::Reverse>, (f64, i32));
/// ```
pub type TransformAll<C, F> = <C as ops::TransformAll<F>>::Output;

/// Left fold of the arguments of `C` with the binary operation `Op`, starting from `Init`.
///
/// ```
/// use rebind::prelude::*;
///
/// type Numbers = (UnaryOf<0>, UnaryOf<1>, UnaryOf<2>);
/// assert_eq!(Accumulate::<Numbers, UnaryOf<0>, func::Plus>::VALUE, 3);
/// assert_eq!(Accumulate::<(), UnaryOf<1>, func::Plus>::VALUE, 1);
/// ```
pub type Accumulate<C, Init, Op> = <C as ops::Accumulate<Init, Op>>::Output;

/// Whether the predicate `P` holds for any argument of `C`.
pub type Any<C, P> = <C as ops::Any<P>>::Output;

/// Whether `X` is one of the arguments of `C`.
///
/// ```
/// use rebind::prelude::*;
///
/// assert!(Contains::<(i32, f32), i32>::VALUE);
/// assert!(!Contains::<(f64, f32), i32>::VALUE);
/// assert!(!Contains::<(), i32>::VALUE);
/// assert!(Contains::<(Option<u8>, f32), Option<u8>>::VALUE);
/// assert!(!Contains::<(Option<u8>, f32), Option<u16>>::VALUE);
/// ```
///
/// Elements are compared by their [tags](same), which describe a container by its template and
/// its arguments.
pub type Contains<C, X> = <C as ops::Contains<X>>::Output;

/// Apply the sequence function `F` to `C`, `N` times over.
///
/// Each application nests one more level of trait resolution, so counts past 64 or so need a
/// raised `#![recursion_limit]` in the crate using them.
pub type Repeat<const N: usize, C, F> = <C as ops::Repeat<UnaryOf<N>, F>>::Output;

/// The logical OR of two type-level booleans.
pub type LogicalOr<A, B> = <A as boolean::Or<B>>::Output;

/// Write out an inductive type-level [`List`](list::List) from a flat list of types.
///
/// ```
/// use rebind::List;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(List![u8, u16, u32], (u8, (u16, (u32, ()))));
/// assert_type_eq_all!(List![], ());
/// ```
#[macro_export]
macro_rules! List {
    () => { () };
    ($head:ty $(, $tail:ty)* $(,)?) => { ($head, $crate::List![$($tail),*]) };
}

/// Write out an [`Arguments`] carrier from a flat list of types.
///
/// ```
/// use rebind::{Args, Arguments};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Args![u8, u16], Arguments<(u8, (u16, ()))>);
/// ```
#[macro_export]
macro_rules! Args {
    ($($arg:ty),* $(,)?) => { $crate::Arguments<$crate::List![$($arg),*]> };
}

/// The prelude module for quickly getting started with Rebind.
///
/// This module is designed to be imported as `use rebind::prelude::*;`, which brings into scope
/// the operation aliases, the traits needed to define functions and read results, and the
/// [`func`] module.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::boolean::{Bool, False, True};
    #[doc(no_inline)]
    pub use crate::container::{Arguments, Container, Instantiate, TupleTemplate};
    #[doc(no_inline)]
    pub use crate::func::{self, Apply, Apply2};
    #[doc(no_inline)]
    pub use crate::same::Tagged;
    #[doc(no_inline)]
    pub use crate::unary::{Unary, UnaryOf};
    #[doc(no_inline)]
    pub use crate::{
        Accumulate, Any, Append, Contains, DropFirst, DropLast, First, Join, Last, LogicalOr, Nth,
        Rebind, RebindArgs, RebindConcrete, Repeat, Reverse, Size, TransformAll, TransformEach,
    };
    #[doc(no_inline)]
    pub use rebind_macro::{chars, Container, Tagged};
}

#[cfg(test)]
mod tests {
    include!(concat!(env!("OUT_DIR"), "/sequence_properties.rs"));
}
