//! Unary numerals: zero is [`Z`], and the successor of `N` is [`S<N>`](S).
//!
//! [`Size`](crate::Size) counts arguments with these, and [`Nth`](crate::Nth) and
//! [`Repeat`](crate::Repeat) recurse on them. The aliases take ordinary `usize` constants and
//! convert them with [`UnaryOf`].

use crate::boolean::{Bool, False, True};

/// Zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// One more than `N`.
///
/// ```
/// use rebind::unary::{S, Z};
///
/// let two: S<S<Z>> = S(S(Z));
/// # let _ = two;
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// The unary numeral for the constant `N`, for `N` up to 256.
///
/// Every successor is one more level of trait resolution: a crate naming numerals past 64 or so
/// must raise its `#![recursion_limit]`, to 256 for the largest ones.
///
/// ```
/// use rebind::unary::{UnaryOf, S, Z};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(UnaryOf<0>, Z);
/// assert_type_eq_all!(UnaryOf<2>, S<S<Z>>);
/// ```
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// A unary numeral, and the `usize` it stands for.
///
/// ```
/// # #![recursion_limit = "512"]
/// use rebind::unary::{Unary, UnaryOf};
///
/// assert_eq!(<UnaryOf<0>>::VALUE, 0);
/// assert_eq!(<UnaryOf<37>>::VALUE, 37);
/// assert_eq!(<UnaryOf<256>>::VALUE, 256);
/// ```
pub trait Unary: sealed::Unary + Sized + Sync + Send + 'static {
    /// The numeral as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Whether two numerals are equal, as a type-level [`Bool`].
///
/// Both numerals are peeled one successor at a time until one of them reaches zero.
///
/// ```
/// use rebind::boolean::{False, True};
/// use rebind::unary::{Equals, UnaryOf};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<UnaryOf<4> as Equals<UnaryOf<4>>>::Output, True);
/// assert_type_eq_all!(<UnaryOf<4> as Equals<UnaryOf<5>>>::Output, False);
/// ```
pub trait Equals<M: Unary>: Unary {
    /// [`True`] if `Self` and `M` are the same number.
    type Output: Bool;
}

impl Equals<Z> for Z {
    type Output = True;
}

impl<M: Unary> Equals<S<M>> for Z {
    type Output = False;
}

impl<N: Unary> Equals<Z> for S<N> {
    type Output = False;
}

impl<N: Equals<M>, M: Unary> Equals<S<M>> for S<N> {
    type Output = <N as Equals<M>>::Output;
}

/// The sum of two numerals.
///
/// ```
/// use rebind::unary::{Add, Unary, UnaryOf};
///
/// assert_eq!(<<UnaryOf<5> as Add<UnaryOf<7>>>::Sum as Unary>::VALUE, 12);
/// ```
pub trait Add<M: Unary>: Unary {
    /// `Self + M`.
    type Sum: Unary;
}

impl<N: Unary> Add<Z> for N {
    type Sum = N;
}

impl<N: Add<M>, M: Unary> Add<S<M>> for N {
    type Sum = S<<N as Add<M>>::Sum>;
}

/// A `usize` constant lifted to a type, so that it can be converted to its numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Number<const N: usize>;

/// Conversion from a [`Number`] to its numeral.
pub trait ToUnary {
    /// The numeral.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// Conversion from a numeral back to its [`Number`].
pub trait ToConstant: Unary {
    /// The constant.
    type AsConstant: ToUnary<AsUnary = Self>;
}

rebind_macro::generate_unary_conversion_impls!(256);

mod sealed {
    pub trait Unary: 'static {}
    impl Unary for super::Z {}
    impl<N: Unary> Unary for super::S<N> {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    assert_type_eq_all!(UnaryOf<3>, S<S<S<Z>>>);
    assert_type_eq_all!(<UnaryOf<3> as ToConstant>::AsConstant, Number<3>);
    assert_type_eq_all!(<Z as Equals<Z>>::Output, True);
    assert_type_eq_all!(<UnaryOf<9> as Equals<UnaryOf<10>>>::Output, False);
    assert_type_eq_all!(<UnaryOf<10> as Equals<UnaryOf<9>>>::Output, False);
    assert_impl_all!(S<Z>: Copy, Default);

    // Only `Z` and `S` are numerals.
    assert_not_impl_any!(S<u8>: Unary);

    #[test]
    fn addition_matches_usize_addition() {
        assert_eq!(<<UnaryOf<17> as Add<UnaryOf<25>>>::Sum as Unary>::VALUE, 42);
        assert_eq!(<<Z as Add<Z>>::Sum as Unary>::VALUE, 0);
        assert_eq!(<<UnaryOf<128> as Add<UnaryOf<64>>>::Sum as Unary>::VALUE, 192);
    }
}
