//! The examples from the README, checked at compile time.

use std::marker::PhantomData;

use rebind::prelude::*;
use static_assertions::assert_type_eq_all;

/// A pair of values, registered so its arguments can be moved onto other templates.
#[derive(Container, Debug, Default)]
struct MyStruct<A, B>(A, B);

/// A stand-in for an allocator parameterized by the type it allocates.
#[derive(Container, Debug, Default)]
struct Allocator<T>(PhantomData<T>);

// The arguments of a pair, as a tuple.
assert_type_eq_all!(Rebind<(i32, f64), MyStructTemplate>, MyStruct<i32, f64>);
assert_type_eq_all!(Rebind<MyStruct<i32, f64>, TupleTemplate>, (i32, f64));

// Joining two tuples.
assert_type_eq_all!(Join<(i32, f64), (char,)>, (i32, f64, char));

// Rebinding an allocator onto a different element type.
assert_type_eq_all!(RebindArgs<(i32, Allocator<char>)>, Allocator<i32>);

fn main() {
    let pair: Rebind<(i32, f64), MyStructTemplate> = MyStruct(1, 2.5);
    let alloc: RebindArgs<(i32, Allocator<char>)> = Allocator::default();
    println!("{:?} has {} arguments", pair, Size::<MyStruct<i32, f64>>::VALUE);
    println!("{:?} has {} argument", alloc, Size::<Allocator<i32>>::VALUE);
}
