#![recursion_limit = "256"]

use std::marker::PhantomData;

use rebind::prelude::*;
use static_assertions::assert_type_eq_all;

#[derive(Container)]
#[container(tuple)]
#[allow(dead_code)]
struct TestArgs<T>(PhantomData<T>);

/// Maps `bool` to `char`, and every other element to itself.
struct BoolToChar;

macro_rules! bool_to_char {
    ($($ty:ty => $out:ty),* $(,)?) => {
        $(impl Apply<$ty> for BoolToChar {
            type Output = $out;
        })*
    };
}

bool_to_char! {
    bool => char,
    char => char,
    i32 => i32,
    f64 => f64,
}

/// Whether an element is one of the integer primitives.
struct IsIntegral;

macro_rules! is_integral {
    ($($ty:ty => $out:ty),* $(,)?) => {
        $(impl Apply<$ty> for IsIntegral {
            type Output = $out;
        })*
    };
}

is_integral! {
    i32 => True,
    u8 => True,
    f32 => False,
    f64 => False,
    bool => False,
}

/// Reverses the whole argument list, like `TransformAll` with `func::Reverse`, but going
/// through a tuple on the way.
struct ThroughTuple;

impl<C> Apply<C> for ThroughTuple
where
    C: rebind::ops::Rebind<TupleTemplate>,
    Rebind<C, TupleTemplate>: rebind::ops::Reverse,
{
    type Output = Reverse<Rebind<C, TupleTemplate>>;
}

// TransformAll
assert_type_eq_all!(TransformAll<TestArgs<(i32, f64)>, func::Reverse>, TestArgs<(f64, i32)>);
assert_type_eq_all!(TransformAll<TestArgs<(i32, f64)>, ThroughTuple>, TestArgs<(f64, i32)>);
assert_type_eq_all!(
    TransformAll<TestArgs<(i32, f64)>, func::Join<(u8, u8)>>,
    TestArgs<(i32, f64, u8, u8)>
);
assert_type_eq_all!(TransformAll<Option<u8>, func::Identity>, Option<u8>);

// TransformEach
assert_type_eq_all!(TransformEach<TestArgs<(i32, f64)>, func::Identity>, TestArgs<(i32, f64)>);
assert_type_eq_all!(TransformEach<TestArgs<(i32, bool)>, BoolToChar>, TestArgs<(i32, char)>);
assert_type_eq_all!(TransformEach<TestArgs<()>, BoolToChar>, TestArgs<()>);
assert_type_eq_all!(TransformEach<(u8, f32), IsIntegral>, (True, False));
assert_type_eq_all!(
    TransformEach<(bool, bool), func::Compose<BoolToChar, func::SameAs<char>>>,
    (True, True)
);

// Sequence functions compose with each other
assert_type_eq_all!(
    TransformEach<(i32, bool), func::Compose<func::Identity, BoolToChar>>,
    (i32, char)
);
assert_type_eq_all!(
    Repeat<2, ((bool,), (bool, bool)), func::TransformEach<func::TransformEach<BoolToChar>>>,
    ((char,), (char, char))
);
assert_type_eq_all!(Repeat<1, (u8, u16), func::Rebind<TestArgsTemplate>>, TestArgs<(u8, u16)>);

// Boolean connectives
assert_type_eq_all!(LogicalOr<False, False>, False);
assert_type_eq_all!(LogicalOr<True, False>, True);

#[test]
fn any() {
    assert!(!Any::<TestArgs<()>, IsIntegral>::VALUE);
    assert!(Any::<TestArgs<(i32, f64)>, IsIntegral>::VALUE);
    assert!(!Any::<TestArgs<(f32, f64)>, IsIntegral>::VALUE);
    assert!(Any::<(f32, bool, u8), IsIntegral>::VALUE);
}

#[test]
fn any_visits_every_element() {
    // The predicate is defined for every element here, so this elaborates; `Any` never stops
    // at the first `True`.
    assert!(Any::<(i32, u8, f64, bool), IsIntegral>::VALUE);
}
