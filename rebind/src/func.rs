//! Type-level functions.
//!
//! Rust has no template template parameters, so a function over types is a marker type which
//! implements [`Apply`] (one argument) or [`Apply2`] (two arguments). The output of applying it is
//! the associated `Output` type.
//!
//! Element functions map one element to another and are passed to
//! [`TransformEach`](crate::TransformEach) or [`Any`](crate::Any). Binary operations combine an
//! accumulator with an element and are passed to [`Accumulate`](crate::Accumulate). Sequence
//! functions map a whole [`Container`] to another and are passed to
//! [`TransformAll`](crate::TransformAll) or [`Repeat`](crate::Repeat); there is one for each
//! sequence operation in [`ops`].
//!
//! # Examples
//!
//! ```
//! use rebind::prelude::*;
//! use static_assertions::assert_type_eq_all;
//!
//! struct BoolToChar;
//!
//! impl Apply<bool> for BoolToChar {
//!     type Output = char;
//! }
//!
//! impl Apply<i32> for BoolToChar {
//!     type Output = i32;
//! }
//!
//! assert_type_eq_all!(TransformEach<(i32, bool), BoolToChar>, (i32, char));
//! ```

use std::marker::PhantomData;

use crate::boolean::{self, Bool};
use crate::container::Arguments;
use crate::list::{List, Map};
use crate::ops;
use crate::same::Same;
use crate::unary::{self, Unary};

#[allow(unused_imports)] // For documentation linking
use crate::container::Container;

/// A type-level function of one argument.
pub trait Apply<Arg> {
    /// The result of applying `Self` to `Arg`.
    type Output;
}

/// A type-level function of two arguments.
pub trait Apply2<Lhs, Rhs> {
    /// The result of applying `Self` to `Lhs` and `Rhs`.
    type Output;
}

/// Returns its argument unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity;

impl<T> Apply<T> for Identity {
    type Output = T;
}

/// Apply `F`, then `G`.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct Compose<F, G>(PhantomData<fn() -> (F, G)>);

impl<T, F, G> Apply<T> for Compose<F, G>
where
    F: Apply<T>,
    G: Apply<<F as Apply<T>>::Output>,
{
    type Output = <G as Apply<<F as Apply<T>>::Output>>::Output;
}

/// The predicate "is the same type as `X`", yielding [`True`](boolean::True) or
/// [`False`](boolean::False).
///
/// Both the argument and `X` must be [`Tagged`](crate::same::Tagged).
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct SameAs<X>(PhantomData<fn() -> X>);

impl<T: Same<X>, X> Apply<T> for SameAs<X> {
    type Output = <T as Same<X>>::Output;
}

/// Logical OR of two type-level booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LogicalOr;

impl<A: boolean::Or<B>, B: Bool> Apply2<A, B> for LogicalOr {
    type Output = <A as boolean::Or<B>>::Output;
}

/// Logical AND of two type-level booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LogicalAnd;

impl<A: boolean::And<B>, B: Bool> Apply2<A, B> for LogicalAnd {
    type Output = <A as boolean::And<B>>::Output;
}

/// Sum of two unary numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Plus;

impl<N: unary::Add<M>, M: Unary> Apply2<N, M> for Plus {
    type Output = <N as unary::Add<M>>::Sum;
}

/// Map `F` over the elements of an [`Arguments`] carrier.
///
/// This is the whole-sequence function [`TransformEach`](crate::TransformEach) hands to
/// [`TransformAll`](crate::TransformAll).
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct Each<F>(PhantomData<fn() -> F>);

impl<F, L: List + Map<F>> Apply<Arguments<L>> for Each<F> {
    type Output = Arguments<<L as Map<F>>::Output>;
}

/// Generate a marker for a nullary sequence operation, applying it to any container that
/// supports it.
macro_rules! sequence_functions {
    ($($(#[$attr:meta])* $name:ident;)*) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
            pub struct $name;

            impl<C: ops::$name> Apply<C> for $name {
                type Output = <C as ops::$name>::Output;
            }
        )*
    };
}

sequence_functions! {
    /// [`Reverse`](crate::Reverse) as a sequence function.
    Reverse;
    /// [`DropFirst`](crate::DropFirst) as a sequence function.
    DropFirst;
    /// [`DropLast`](crate::DropLast) as a sequence function.
    DropLast;
}

/// Generate a marker for a sequence operation with one type parameter, applying it to any
/// container that supports it.
macro_rules! parameterized_sequence_functions {
    ($($(#[$attr:meta])* $name:ident<$param:ident>;)*) => {
        $(
            $(#[$attr])*
            #[derive(Derivative)]
            #[derivative(
                Debug(bound = ""),
                Clone(bound = ""),
                Copy(bound = ""),
                Default(bound = ""),
                PartialEq(bound = ""),
                Eq(bound = "")
            )]
            pub struct $name<$param>(PhantomData<fn() -> $param>);

            impl<C: ops::$name<$param>, $param> Apply<C> for $name<$param> {
                type Output = <C as ops::$name<$param>>::Output;
            }
        )*
    };
}

parameterized_sequence_functions! {
    /// [`Rebind`](crate::Rebind) onto the template `T`, as a sequence function.
    Rebind<T>;
    /// [`Join`](crate::Join) with the container `B`, as a sequence function.
    Join<B>;
    /// [`Append`](crate::Append) the type `T`, as a sequence function.
    Append<T>;
    /// [`TransformEach`](crate::TransformEach) with the element function `F`, as a sequence
    /// function.
    TransformEach<F>;
    /// [`TransformAll`](crate::TransformAll) with the sequence function `F`, as a sequence
    /// function.
    TransformAll<F>;
}
