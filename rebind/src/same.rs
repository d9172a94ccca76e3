//! Type identity, for [`Contains`](crate::Contains) and [`SameAs`](crate::func::SameAs).
//!
//! Stable Rust has no way to ask whether two arbitrary types are equal and get a type-level
//! answer back. Instead, each type which may be searched for is [`Tagged`] with a type-level
//! description of its structure, and two tagged types are the [`Same`] exactly when their tags
//! [`Match`].
//!
//! A tag is a [`Node`] of an identifier and the tags of the type's arguments. The identifier is
//! a list of 32 binary digits ([`B0`] and [`B1`]) hashed from the definition of the type, or of
//! its template for a container. So `Option<u8>` and `Option<u16>` share an identifier but
//! differ in their arguments, and `(u8,)` and `Option<u8>` differ in their identifiers.
//!
//! Containers are tagged when they are registered: tuples, [`Arguments`](crate::Arguments) and
//! the standard library containers here, and other types by
//! [`#[derive(Container)]`](macro@crate::Container). Of the types without arguments, `bool`,
//! `char`, the integer and floating point primitives, `str` and `String` are tagged here, and
//! others by [`#[derive(Tagged)]`](macro@crate::Tagged).
//!
//! # Examples
//!
//! ```
//! use rebind::prelude::*;
//!
//! #[derive(Tagged)]
//! struct Meters;
//!
//! #[derive(Container)]
//! struct Pair<A, B>(A, B);
//!
//! assert!(Contains::<(u8, Meters), Meters>::VALUE);
//! assert!(!Contains::<(u8, u16), Meters>::VALUE);
//! assert!(Contains::<(u8, Pair<Meters, char>), Pair<Meters, char>>::VALUE);
//! assert!(!Contains::<(u8, Pair<Meters, char>), Pair<char, Meters>>::VALUE);
//! assert!(!Contains::<(u8, Pair<Meters, char>), (Meters, char)>::VALUE);
//! ```
//!
//! A type without a tag cannot be searched for:
//!
//! ```compile_fail
//! use rebind::prelude::*;
//!
//! struct Untagged;
//!
//! let _ = Contains::<(u8, Untagged), u8>::VALUE;
//! ```

use std::marker::PhantomData;

use crate::boolean::{And, Bool, False, True};

/// A type with a tag describing its structure.
///
/// Two distinct types must never share a tag: a shared tag makes them the [`Same`]. Tags are
/// best left to the registration macros, which hash the definition of the type into its
/// identifier.
pub trait Tagged {
    /// The structure of this type, as a [`Node`].
    type Tag;
}

/// A binary digit zero, in the identifier of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct B0;

/// A binary digit one, in the identifier of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct B1;

/// The tag of a type with the identifier `Id` and the argument tags `Args`.
///
/// `Id` is an inductive list of binary digits, and `Args` an inductive list of tags.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct Node<Id, Args>(PhantomData<fn() -> (Id, Args)>);

/// The tags of every element of an inductive list.
pub trait TagList {
    /// One tag per element, in order.
    type Tags;
}

impl TagList for () {
    type Tags = ();
}

impl<T: Tagged, Ts: TagList> TagList for (T, Ts) {
    type Tags = (T::Tag, Ts::Tags);
}

/// Structural equality of tags, their identifiers and their argument lists.
///
/// Lists of different lengths never match. Both sides are compared all the way through, even
/// after a difference is found.
pub trait Match<Rhs> {
    /// [`True`] if `Self` and `Rhs` are equal, otherwise [`False`].
    type Output: Bool;
}

impl Match<B0> for B0 {
    type Output = True;
}

impl Match<B1> for B0 {
    type Output = False;
}

impl Match<B0> for B1 {
    type Output = False;
}

impl Match<B1> for B1 {
    type Output = True;
}

impl Match<()> for () {
    type Output = True;
}

impl<U, Us> Match<(U, Us)> for () {
    type Output = False;
}

impl<T, Ts> Match<()> for (T, Ts) {
    type Output = False;
}

impl<T, Ts, U, Us> Match<(U, Us)> for (T, Ts)
where
    T: Match<U>,
    Ts: Match<Us>,
    <T as Match<U>>::Output: And<<Ts as Match<Us>>::Output>,
{
    type Output = <<T as Match<U>>::Output as And<<Ts as Match<Us>>::Output>>::Output;
}

impl<Id1, Args1, Id2, Args2> Match<Node<Id2, Args2>> for Node<Id1, Args1>
where
    Id1: Match<Id2>,
    Args1: Match<Args2>,
    <Id1 as Match<Id2>>::Output: And<<Args1 as Match<Args2>>::Output>,
{
    type Output = <<Id1 as Match<Id2>>::Output as And<<Args1 as Match<Args2>>::Output>>::Output;
}

/// Type-level equality of [`Tagged`] types.
pub trait Same<U: ?Sized> {
    /// [`True`](crate::boolean::True) if `Self` and `U` have matching tags, otherwise
    /// [`False`](crate::boolean::False).
    type Output: Bool;
}

impl<T, U> Same<U> for T
where
    T: Tagged + ?Sized,
    U: Tagged + ?Sized,
    T::Tag: Match<U::Tag>,
{
    type Output = <T::Tag as Match<U::Tag>>::Output;
}

rebind_macro::impl_leaf_tags! {
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String,
}
