#![recursion_limit = "256"]

use std::marker::PhantomData;

use rebind::prelude::*;
use rebind::unary::UnaryOf;
use static_assertions::assert_type_eq_all;

/// A variadic container, taking its arguments as one flat tuple.
#[derive(Container)]
#[container(tuple)]
#[allow(dead_code)]
struct TestArgs<T>(PhantomData<T>);

#[derive(Container)]
#[allow(dead_code)]
struct Pair<A, B>(A, B);

// Rebind
assert_type_eq_all!(Rebind<(i32, f64), TestArgsTemplate>, TestArgs<(i32, f64)>);
assert_type_eq_all!(Rebind<Pair<i32, f64>, TestArgsTemplate>, TestArgs<(i32, f64)>);
assert_type_eq_all!(Rebind<Pair<i32, f64>, TupleTemplate>, (i32, f64));
assert_type_eq_all!(RebindConcrete<Pair<i32, f64>, TestArgs<(char,)>>, TestArgs<(i32, f64)>);

// RebindArgs
assert_type_eq_all!(RebindArgs<(i32, f64, TestArgs<(char,)>)>, TestArgs<(i32, f64)>);
assert_type_eq_all!(RebindArgs<(i32, Option<char>)>, Option<i32>);
assert_type_eq_all!(RebindArgs<(TestArgs<(u8,)>,)>, TestArgs<()>);

// Append
assert_type_eq_all!(Append<TestArgs<()>, i32>, TestArgs<(i32,)>);
assert_type_eq_all!(Append<TestArgs<(i32,)>, f64>, TestArgs<(i32, f64)>);
assert_type_eq_all!(Append<(i32,), f64>, (i32, f64));

// First and Last
assert_type_eq_all!(First<TestArgs<(i32, f64)>>, i32);
assert_type_eq_all!(Last<TestArgs<(i32, f64)>>, f64);
assert_type_eq_all!(First<(i32, f64)>, i32);
assert_type_eq_all!(Last<(i32, f64)>, f64);
assert_type_eq_all!(First<Result<u8, ()>>, u8);

// Reverse
assert_type_eq_all!(Reverse<TestArgs<()>>, TestArgs<()>);
assert_type_eq_all!(Reverse<TestArgs<(i32,)>>, TestArgs<(i32,)>);
assert_type_eq_all!(Reverse<TestArgs<(i32, f64)>>, TestArgs<(f64, i32)>);
assert_type_eq_all!(Reverse<TestArgs<(i32, f64, f32)>>, TestArgs<(f32, f64, i32)>);
assert_type_eq_all!(Reverse<(i32, f64, f32)>, (f32, f64, i32));

// Join
assert_type_eq_all!(Join<TestArgs<(i32, f64)>, TestArgs<(f32,)>>, TestArgs<(i32, f64, f32)>);
assert_type_eq_all!(Join<(i32, f64), (f32,)>, (i32, f64, f32));
assert_type_eq_all!(Join<(i32, f64), (char,)>, (i32, f64, char));
assert_type_eq_all!(Join<(), Pair<u8, u16>>, (u8, u16));
assert_type_eq_all!(Join<Pair<u8, u16>, ()>, Pair<u8, u16>);
assert_type_eq_all!(Join<Join<(u8,), Pair<u16, u32>>, Option<u64>>, (u8, u16, u32, u64));

// DropFirst
assert_type_eq_all!(DropFirst<TestArgs<(i32, f64, bool)>>, TestArgs<(f64, bool)>);
assert_type_eq_all!(DropFirst<TestArgs<(f64, bool)>>, TestArgs<(bool,)>);
assert_type_eq_all!(DropFirst<TestArgs<(bool,)>>, TestArgs<()>);
assert_type_eq_all!(DropFirst<(i32, f64, bool)>, (f64, bool));

// DropLast
assert_type_eq_all!(DropLast<TestArgs<(i32, f64, bool)>>, TestArgs<(i32, f64)>);
assert_type_eq_all!(DropLast<TestArgs<(i32, f64)>>, TestArgs<(i32,)>);
assert_type_eq_all!(DropLast<TestArgs<(i32,)>>, TestArgs<()>);

// Nth
assert_type_eq_all!(Nth<0, TestArgs<(char,)>>, char);
assert_type_eq_all!(Nth<0, TestArgs<(char, i32)>>, char);
assert_type_eq_all!(Nth<1, TestArgs<(char, i32)>>, i32);
assert_type_eq_all!(Nth<0, TestArgs<(char, i32, f64)>>, char);
assert_type_eq_all!(Nth<1, TestArgs<(char, i32, f64)>>, i32);
assert_type_eq_all!(Nth<2, TestArgs<(char, i32, f64)>>, f64);
assert_type_eq_all!(Nth<2, (char, i32, f64)>, f64);

// Repeat
assert_type_eq_all!(Repeat<0, TestArgs<(i32, f64)>, func::DropFirst>, TestArgs<(i32, f64)>);
assert_type_eq_all!(Repeat<1, TestArgs<(i32, f64)>, func::DropFirst>, TestArgs<(f64,)>);
assert_type_eq_all!(Repeat<2, TestArgs<(i32, f64)>, func::DropFirst>, TestArgs<()>);
assert_type_eq_all!(Repeat<2, (i32, char, f64), func::DropFirst>, (f64,));
assert_type_eq_all!(Repeat<3, (i32, char), func::Append<u8>>, (i32, char, u8, u8, u8));
assert_type_eq_all!(Repeat<5, (i32, char), func::Reverse>, (char, i32));

#[test]
fn size() {
    assert_eq!(Size::<TestArgs<()>>::VALUE, 0);
    assert_eq!(Size::<TestArgs<(i32,)>>::VALUE, 1);
    assert_eq!(Size::<TestArgs<(i32, f64)>>::VALUE, 2);
    assert_eq!(Size::<Join<TestArgs<(u8, u8)>, (u8, u8, u8)>>::VALUE, 5);
    assert_eq!(Size::<Join<(), Pair<u8, u8>>>::VALUE, 2);
}

#[test]
fn accumulate() {
    assert_eq!(Accumulate::<TestArgs<()>, UnaryOf<1>, func::Plus>::VALUE, 1);
    assert_eq!(
        Accumulate::<TestArgs<(UnaryOf<0>,)>, UnaryOf<1>, func::Plus>::VALUE,
        1
    );
    assert_eq!(
        Accumulate::<TestArgs<(UnaryOf<0>, UnaryOf<1>)>, UnaryOf<0>, func::Plus>::VALUE,
        1
    );
    assert_eq!(
        Accumulate::<TestArgs<(UnaryOf<0>, UnaryOf<1>, UnaryOf<2>)>, UnaryOf<0>, func::Plus>::VALUE,
        3
    );
}

#[test]
fn contains() {
    assert!(!Contains::<TestArgs<()>, i32>::VALUE);
    assert!(!Contains::<TestArgs<(f64,)>, i32>::VALUE);
    assert!(!Contains::<TestArgs<(f64, f32)>, i32>::VALUE);
    assert!(Contains::<TestArgs<(i32,)>, i32>::VALUE);
    assert!(Contains::<TestArgs<(i32, f32)>, i32>::VALUE);
    assert!(Contains::<Pair<String, char>, String>::VALUE);
}

#[test]
fn contains_compares_compound_types_structurally() {
    assert!(!Contains::<(Option<u8>, u8), Option<u16>>::VALUE);
    assert!(Contains::<(Option<u8>, u8), Option<u8>>::VALUE);
    assert!(Contains::<(Option<u8>, u8), u8>::VALUE);
    assert!(!Contains::<(Option<u8>,), u8>::VALUE);
    assert!(Contains::<((u8, u16), u8), (u8, u16)>::VALUE);
    assert!(!Contains::<((u8, u16), u8), (u16, u8)>::VALUE);
    assert!(!Contains::<((u8, u16), u8), (u8, u16, u8)>::VALUE);
    assert!(Contains::<TestArgs<((), char)>, ()>::VALUE);

    // Same arguments, different templates.
    assert!(!Contains::<(Pair<u8, u16>,), (u8, u16)>::VALUE);
    assert!(!Contains::<((u8, u16),), Pair<u8, u16>>::VALUE);
    assert!(!Contains::<(TestArgs<(u8,)>,), Option<u8>>::VALUE);
    assert!(Contains::<(TestArgs<(u8,)>, Pair<u8, u8>), Pair<u8, u8>>::VALUE);
    assert!(Contains::<(Vec<Pair<u8, char>>,), Vec<Pair<u8, char>>>::VALUE);
    assert!(!Contains::<(Vec<Pair<u8, char>>,), Vec<Pair<char, u8>>>::VALUE);
}

#[derive(Tagged)]
#[allow(dead_code)]
struct Meters;

#[derive(Tagged)]
#[allow(dead_code)]
struct Feet;

#[test]
fn contains_finds_derived_leaves() {
    assert!(Contains::<(u8, Meters), Meters>::VALUE);
    assert!(!Contains::<(u8, Meters), Feet>::VALUE);
    assert!(Contains::<(Pair<Meters, Feet>,), Pair<Meters, Feet>>::VALUE);
    assert!(!Contains::<(Pair<Meters, Feet>,), Pair<Feet, Meters>>::VALUE);
    assert!(Any::<(Option<Meters>, Feet), func::SameAs<Option<Meters>>>::VALUE);
}
