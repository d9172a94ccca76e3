//! The sequence operations, as traits over [`Container`]s.
//!
//! Each trait here is implemented for every container it makes sense for, and its `Output` is
//! the result of the operation. The crate root has an alias with the same name for each one,
//! which is usually the more convenient way to write them: `rebind::Reverse<C>` is
//! `<C as rebind::ops::Reverse>::Output`. The traits are for writing bounds in generic code.
//!
//! An operation applied to a container it does not support has no implementation, so it fails
//! to elaborate: [`First`] of an empty container, [`Nth`] past the end, [`Rebind`] onto a
//! template of the wrong arity, and so on.
//!
//! # Examples
//!
//! ```
//! use rebind::ops;
//! use rebind::prelude::*;
//!
//! fn reversed_size<C>() -> usize
//! where
//!     C: ops::Reverse,
//!     <C as ops::Reverse>::Output: ops::Size,
//! {
//!     <Size<Reverse<C>> as Unary>::VALUE
//! }
//!
//! assert_eq!(reversed_size::<(u8, u16)>(), 2);
//! ```

use crate::boolean::{Bool, False};
use crate::container::{Arguments, Container, Instantiate};
use crate::func::{self, Apply};
use crate::list::{self, Concat, Fold, HasLength, NonEmpty, Select};
use crate::unary::{Unary, S, Z};

/// Apply the arguments of `Self` to the template `T`.
pub trait Rebind<T>: Container {
    /// `T<Self::Args...>`.
    type Output: Container;
}

impl<C, T> Rebind<T> for C
where
    C: Container,
    T: Instantiate<C::Args>,
{
    type Output = <T as Instantiate<C::Args>>::Instance;
}

/// Apply the arguments of `Self` to the template of the container `D`, discarding the arguments
/// of `D`.
pub trait RebindConcrete<D: Container>: Container {
    /// `D::Template<Self::Args...>`.
    type Output: Container;
}

impl<C, D> RebindConcrete<D> for C
where
    C: Container,
    D: Container,
    D::Template: Instantiate<C::Args>,
{
    type Output = <D::Template as Instantiate<C::Args>>::Instance;
}

/// Apply all but the last element of `Self` to the template of its last element.
///
/// `Self` is the flat list of arguments followed by the carrier of the template, so `Self` must
/// have at least one element.
pub trait RebindArgs: Container {
    /// `Last::Template<leading elements...>`.
    type Output: Container;
}

impl<C> RebindArgs for C
where
    C: Last + DropLast,
    <C as Last>::Output: Container,
    <C as DropLast>::Output: RebindConcrete<<C as Last>::Output>,
{
    type Output = <<C as DropLast>::Output as RebindConcrete<<C as Last>::Output>>::Output;
}

/// Concatenate the arguments of `Self` and `Rhs`, keeping the template of `Self`.
///
/// The template of `Rhs` plays no part in the result.
pub trait Join<Rhs>: Container {
    /// `Self::Template<Self::Args..., Rhs::Args...>`.
    type Output: Container;
}

impl<C, Rhs> Join<Rhs> for C
where
    C: Container,
    Rhs: Container,
    C::Args: Concat<Rhs::Args>,
    C::Template: Instantiate<<C::Args as Concat<Rhs::Args>>::Output>,
{
    type Output = <C::Template as Instantiate<<C::Args as Concat<Rhs::Args>>::Output>>::Instance;
}

/// Add the type `T` to the end of `Self`.
pub trait Append<T>: Container {
    /// `Self::Template<Self::Args..., T>`.
    type Output: Container;
}

impl<C, T> Append<T> for C
where
    C: Join<Arguments<(T, ())>>,
{
    type Output = <C as Join<Arguments<(T, ())>>>::Output;
}

/// Reverse the arguments of `Self`, keeping its template.
pub trait Reverse: Container {
    /// `Self::Template` applied to `Self::Args` in reverse order.
    type Output: Container;
}

impl<C> Reverse for C
where
    C: Container,
    C::Args: list::Reverse,
    C::Template: Instantiate<<C::Args as list::Reverse>::Output>,
{
    type Output = <C::Template as Instantiate<<C::Args as list::Reverse>::Output>>::Instance;
}

/// The first argument of `Self`.
pub trait First: Container {
    /// The first argument.
    type Output;
}

impl<C> First for C
where
    C: Container,
    C::Args: NonEmpty,
{
    type Output = <C::Args as NonEmpty>::Head;
}

/// The last argument of `Self`: the [`First`] argument of its [`Reverse`].
pub trait Last: Container {
    /// The last argument.
    type Output;
}

impl<C> Last for C
where
    C: Reverse,
    <C as Reverse>::Output: First,
{
    type Output = <<C as Reverse>::Output as First>::Output;
}

/// Every argument of `Self` but the first, keeping its template.
pub trait DropFirst: Container {
    /// `Self::Template` applied to the tail of `Self::Args`.
    type Output: Container;
}

impl<C> DropFirst for C
where
    C: Container,
    C::Args: NonEmpty,
    C::Template: Instantiate<<C::Args as NonEmpty>::Tail>,
{
    type Output = <C::Template as Instantiate<<C::Args as NonEmpty>::Tail>>::Instance;
}

/// Every argument of `Self` but the last, keeping its template.
pub trait DropLast: Container {
    /// The [`Reverse`] of the [`DropFirst`] of the [`Reverse`] of `Self`.
    type Output: Container;
}

impl<C> DropLast for C
where
    C: Reverse,
    <C as Reverse>::Output: DropFirst,
    <<C as Reverse>::Output as DropFirst>::Output: Reverse,
{
    type Output = <<<C as Reverse>::Output as DropFirst>::Output as Reverse>::Output;
}

/// The argument of `Self` at the zero-based position `N`.
pub trait Nth<N: Unary>: Container {
    /// The argument at position `N`.
    type Output;
}

impl<C, N> Nth<N> for C
where
    C: Container,
    C::Args: Select<N>,
    N: Unary,
{
    type Output = <C::Args as Select<N>>::Selected;
}

/// The number of arguments of `Self`.
pub trait Size: Container {
    /// The arity, as a unary number.
    type Output: Unary;
}

impl<C> Size for C
where
    C: Container,
    C::Args: HasLength,
{
    type Output = <C::Args as HasLength>::Length;
}

/// Hand the arguments of `Self` to the sequence function `F` as an [`Arguments`] carrier, and
/// apply whatever arguments it returns to the template of `Self`.
///
/// `F` may reorder, drop or duplicate arguments, and may return any container: only its
/// arguments are kept.
pub trait TransformAll<F>: Container {
    /// `Self::Template` applied to the arguments of `F(Arguments<Self::Args>)`.
    type Output: Container;
}

impl<C, F> TransformAll<F> for C
where
    C: Container,
    F: Apply<Arguments<C::Args>>,
    <F as Apply<Arguments<C::Args>>>::Output: RebindConcrete<C>,
{
    type Output = <<F as Apply<Arguments<C::Args>>>::Output as RebindConcrete<C>>::Output;
}

/// Map each argument of `Self` through the element function `F`, keeping its template.
pub trait TransformEach<F>: Container {
    /// `Self::Template<F(A1), ..., F(An)>`.
    type Output: Container;
}

impl<C, F> TransformEach<F> for C
where
    C: TransformAll<func::Each<F>>,
{
    type Output = <C as TransformAll<func::Each<F>>>::Output;
}

/// Left fold of the arguments of `Self` with the binary operation `Op`, starting from `Init`.
///
/// For arguments `A1, ..., An` the result is `Op(...Op(Op(Init, A1), A2)..., An)`, and for no
/// arguments it is `Init`.
pub trait Accumulate<Init, Op>: Container {
    /// The folded result.
    type Output;
}

impl<C, Init, Op> Accumulate<Init, Op> for C
where
    C: Container,
    C::Args: Fold<Init, Op>,
{
    type Output = <C::Args as Fold<Init, Op>>::Output;
}

/// Whether the predicate `P` holds for any argument of `Self`.
///
/// `P` is applied to every argument, even after one has satisfied it, so it must be defined for
/// all of them.
pub trait Any<P>: Container {
    /// [`True`](crate::boolean::True) or [`False`].
    type Output: Bool;
}

impl<C, P> Any<P> for C
where
    C: TransformEach<P>,
    <C as TransformEach<P>>::Output: Accumulate<False, func::LogicalOr>,
    <<C as TransformEach<P>>::Output as Accumulate<False, func::LogicalOr>>::Output: Bool,
{
    type Output = <<C as TransformEach<P>>::Output as Accumulate<False, func::LogicalOr>>::Output;
}

/// Whether `X` is one of the arguments of `Self`.
///
/// `X` and every argument must be [`Tagged`](crate::same::Tagged).
pub trait Contains<X>: Container {
    /// [`True`](crate::boolean::True) or [`False`].
    type Output: Bool;
}

impl<C, X> Contains<X> for C
where
    C: Any<func::SameAs<X>>,
{
    type Output = <C as Any<func::SameAs<X>>>::Output;
}

/// Apply the sequence function `F` to `Self`, `N` times over.
///
/// Each application is handed the result of the one before; zero applications give back `Self`.
pub trait Repeat<N: Unary, F>: Container {
    /// `F(F(...F(Self)...))`, with `N` applications.
    type Output: Container;
}

impl<C, F> Repeat<Z, F> for C
where
    C: Container,
{
    type Output = C;
}

impl<C, N, F> Repeat<S<N>, F> for C
where
    C: Container,
    N: Unary,
    F: Apply<C>,
    <F as Apply<C>>::Output: Repeat<N, F>,
{
    type Output = <<F as Apply<C>>::Output as Repeat<N, F>>::Output;
}
