//! Conversions back and forth between flat tuples and their corresponding inductive list
//! structures.
//!
//! Internally, this library uses inductive type-level lists, but tuples are far easier to read
//! and write. The traits here convert between the two equivalent representations, and are what
//! lets a container like `Row<(A, B, C)>` be registered with
//! [`#[container(tuple)]`](macro@crate::Container).
//!
//! At present, tuples up to size 64 are supported.

use crate::list::List;

/// Convert a tuple into its corresponding inductive list structure.
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: IntoTuple<AsTuple = Self>;
}

/// Convert an inductive list structure into its corresponding tuple.
pub trait IntoTuple: List {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;
}

rebind_macro::impl_tuples!(64);

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<() as Tuple>::AsList, ());
    assert_type_eq_all!(<(u8,) as Tuple>::AsList, (u8, ()));
    assert_type_eq_all!(<(u8, (u16,)) as Tuple>::AsList, (u8, ((u16,), ())));
    assert_type_eq_all!(<(u8, (u16, ())) as IntoTuple>::AsTuple, (u8, u16));
    assert_type_eq_all!(<() as IntoTuple>::AsTuple, ());
}
