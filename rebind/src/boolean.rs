//! Type-level booleans, [`True`] and [`False`], and their connectives.
//!
//! Predicates handed to [`Any`](crate::Any) map each element to one of these, and
//! [`Contains`](crate::Contains) and [`Any`](crate::Any) evaluate to one.

/// The boolean `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct True;

/// The boolean `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct False;

/// All type-level booleans can be converted to their value-level equivalent `bool`.
///
/// # Examples
///
/// ```
/// use rebind::boolean::*;
///
/// assert!(True::VALUE);
/// assert!(!False::VALUE);
/// ```
pub trait Bool: sealed::Bool + Sized + Sync + Send + 'static {
    /// The runtime value of this type-level boolean.
    const VALUE: bool;
}

impl Bool for True {
    const VALUE: bool = true;
}

impl Bool for False {
    const VALUE: bool = false;
}

/// Logical disjunction of two type-level booleans.
///
/// # Examples
///
/// ```
/// use rebind::boolean::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<False as Or<True>>::Output, True);
/// assert_type_eq_all!(<False as Or<False>>::Output, False);
/// ```
pub trait Or<Rhs: Bool>: Bool {
    /// `Self || Rhs`.
    type Output: Bool;
}

impl<Rhs: Bool> Or<Rhs> for True {
    type Output = True;
}

impl<Rhs: Bool> Or<Rhs> for False {
    type Output = Rhs;
}

/// Logical conjunction of two type-level booleans.
pub trait And<Rhs: Bool>: Bool {
    /// `Self && Rhs`.
    type Output: Bool;
}

impl<Rhs: Bool> And<Rhs> for True {
    type Output = Rhs;
}

impl<Rhs: Bool> And<Rhs> for False {
    type Output = False;
}

/// Logical negation of a type-level boolean.
pub trait Not: Bool {
    /// `!Self`.
    type Output: Bool;
}

impl Not for True {
    type Output = False;
}

impl Not for False {
    type Output = True;
}

mod sealed {
    pub trait Bool: 'static {}
    impl Bool for super::True {}
    impl Bool for super::False {}
}
