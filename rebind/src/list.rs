//! Inductive type-level lists, `()` and `(T, Ts)`, and the algorithms over them.
//!
//! Every sequence operation in this crate works by opening a [`Container`](crate::Container) up
//! into one of these lists, running one of the algorithms below, and instantiating a template
//! with the result. The list is the only intermediate representation; nothing here knows which
//! container it came from or will go to.
//!
//! The [`List!`](crate::List!) macro writes these out from a flat list of types.

use crate::func::{Apply, Apply2};
use crate::unary::{Unary, S, Z};

/// An inductive type-level list: either `()` or `(T, Ts)` where `Ts` is itself a list.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait List: sealed::List + Sized {}

impl List for () {}

impl<T, Ts: List> List for (T, Ts) {}

/// Take the length of a type-level list as a unary type-level number.
pub trait HasLength: List {
    /// The length of a type-level list.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

/// A list with at least one element, split into its first element and the rest.
///
/// There is no implementation for `()`: asking for the head or tail of an empty list fails to
/// elaborate.
pub trait NonEmpty: List {
    /// The first element.
    type Head;
    /// Every element but the first.
    type Tail: List;
}

impl<T, Ts: List> NonEmpty for (T, Ts) {
    type Head = T;
    type Tail = Ts;
}

/// Concatenate two lists, `Self` first.
pub trait Concat<Rhs: List>: List {
    /// `Self ++ Rhs`.
    type Output: List;
}

impl<Rhs: List> Concat<Rhs> for () {
    type Output = Rhs;
}

impl<T, Ts, Rhs> Concat<Rhs> for (T, Ts)
where
    Ts: Concat<Rhs>,
    Rhs: List,
{
    type Output = (T, <Ts as Concat<Rhs>>::Output);
}

/// Push every element of `Self` onto the front of `Acc`, so that the last element of `Self` ends
/// up first.
pub trait ReverseOnto<Acc: List>: List {
    /// `reverse(Self) ++ Acc`.
    type Output: List;
}

impl<Acc: List> ReverseOnto<Acc> for () {
    type Output = Acc;
}

impl<T, Ts, Acc> ReverseOnto<Acc> for (T, Ts)
where
    Ts: ReverseOnto<(T, Acc)>,
    Acc: List,
{
    type Output = <Ts as ReverseOnto<(T, Acc)>>::Output;
}

/// Reverse a list.
pub trait Reverse: List {
    /// The elements of `Self`, last first.
    type Output: List;
}

impl<L: ReverseOnto<()>> Reverse for L {
    type Output = <L as ReverseOnto<()>>::Output;
}

/// Index into a list by a unary number.
///
/// Each successor peels one element off the front; the element in front when the index reaches
/// [`Z`] is the one selected. An index past the end runs out of elements first and fails to
/// elaborate.
pub trait Select<N: Unary>: List {
    /// The element at position `N`.
    type Selected;
}

impl<T, Ts: List> Select<Z> for (T, Ts) {
    type Selected = T;
}

impl<T, Ts, N> Select<S<N>> for (T, Ts)
where
    Ts: Select<N>,
    N: Unary,
{
    type Selected = <Ts as Select<N>>::Selected;
}

/// Apply the type-level function `F` to each element of a list.
pub trait Map<F>: List {
    /// The list of results, in the same order.
    type Output: List;
}

impl<F> Map<F> for () {
    type Output = ();
}

impl<F, T, Ts> Map<F> for (T, Ts)
where
    F: Apply<T>,
    Ts: Map<F>,
{
    type Output = (<F as Apply<T>>::Output, <Ts as Map<F>>::Output);
}

/// Strict left fold of a list with the binary operation `Op`, starting from `Init`.
///
/// The result for `(A, (B, (C, ())))` is `Op(Op(Op(Init, A), B), C)`. Every element is visited.
pub trait Fold<Init, Op>: List {
    /// The folded result.
    type Output;
}

impl<Init, Op> Fold<Init, Op> for () {
    type Output = Init;
}

impl<Init, Op, T, Ts> Fold<Init, Op> for (T, Ts)
where
    Op: Apply2<Init, T>,
    Ts: Fold<<Op as Apply2<Init, T>>::Output, Op>,
{
    type Output = <Ts as Fold<<Op as Apply2<Init, T>>::Output, Op>>::Output;
}

mod sealed {
    pub trait List {}
    impl List for () {}
    impl<T, Ts: List> List for (T, Ts) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::Plus;
    use crate::unary::UnaryOf;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    type Abc = (u8, (u16, (u32, ())));

    assert_type_eq_all!(<Abc as HasLength>::Length, UnaryOf<3>);
    assert_type_eq_all!(<() as HasLength>::Length, UnaryOf<0>);

    assert_type_eq_all!(<Abc as Concat<(i8, ())>>::Output, (u8, (u16, (u32, (i8, ())))));
    assert_type_eq_all!(<() as Concat<Abc>>::Output, Abc);
    assert_type_eq_all!(<Abc as Concat<()>>::Output, Abc);

    assert_type_eq_all!(<Abc as Reverse>::Output, (u32, (u16, (u8, ()))));
    assert_type_eq_all!(<() as Reverse>::Output, ());
    assert_type_eq_all!(<Abc as ReverseOnto<(i8, ())>>::Output, (u32, (u16, (u8, (i8, ())))));

    assert_type_eq_all!(<Abc as NonEmpty>::Head, u8);
    assert_type_eq_all!(<Abc as NonEmpty>::Tail, (u16, (u32, ())));
    assert_not_impl_any!((): NonEmpty);

    assert_type_eq_all!(<Abc as Select<UnaryOf<0>>>::Selected, u8);
    assert_type_eq_all!(<Abc as Select<UnaryOf<2>>>::Selected, u32);
    assert_impl_all!(Abc: Select<UnaryOf<2>>);
    assert_not_impl_any!(Abc: Select<UnaryOf<3>>);

    struct Boxed;

    impl<T> Apply<T> for Boxed {
        type Output = Box<T>;
    }

    assert_type_eq_all!(<Abc as Map<Boxed>>::Output, (Box<u8>, (Box<u16>, (Box<u32>, ()))));
    assert_type_eq_all!(<() as Map<Boxed>>::Output, ());

    /// Records the order in which a fold combines its arguments.
    struct Nest;

    impl<Acc, T> Apply2<Acc, T> for Nest {
        type Output = (Acc, T);
    }

    assert_type_eq_all!(<Abc as Fold<(), Nest>>::Output, ((((), u8), u16), u32));
    assert_type_eq_all!(<() as Fold<i64, Nest>>::Output, i64);

    #[test]
    fn fold_sums_numerals() {
        type Numerals = (UnaryOf<1>, (UnaryOf<2>, (UnaryOf<3>, ())));
        assert_eq!(<<Numerals as Fold<UnaryOf<4>, Plus>>::Output as Unary>::VALUE, 10);
    }
}
