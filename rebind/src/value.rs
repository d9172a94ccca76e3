//! Wrapped constants: types which carry a compile-time value.

use crate::boolean::{False, True};
use crate::unary::{Number, Unary, S, Z};

/// A type which carries a compile-time value of type [`Value::Type`].
///
/// Folds over sequences of wrapped constants (see [`Accumulate`](crate::Accumulate)) produce
/// another wrapped constant, whose value can then be read back with [`Value::VALUE`].
///
/// # Examples
///
/// ```
/// use rebind::prelude::*;
/// use rebind::value::{Char, Value};
///
/// assert_eq!(<Size<(u8, u16, u32)> as Value>::VALUE, 3);
/// assert_eq!(<Contains<(u8, u16), u16> as Value>::VALUE, true);
/// assert_eq!(<Char<'x'> as Value>::VALUE, 'x');
/// ```
pub trait Value {
    /// The type of the carried value.
    type Type: Copy + 'static;

    /// The carried value.
    const VALUE: Self::Type;
}

/// A wrapper for a type-level `char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Char<const C: char>;

impl<const C: char> Value for Char<C> {
    type Type = char;
    const VALUE: char = C;
}

impl Value for True {
    type Type = bool;
    const VALUE: bool = true;
}

impl Value for False {
    type Type = bool;
    const VALUE: bool = false;
}

impl Value for Z {
    type Type = usize;
    const VALUE: usize = 0;
}

impl<N: Unary> Value for S<N> {
    type Type = usize;
    const VALUE: usize = <S<N> as Unary>::VALUE;
}

impl<const N: usize> Value for Number<N> {
    type Type = usize;
    const VALUE: usize = N;
}
