//! Reverse a string at compile time: spell it as a sequence of character types, reverse the
//! sequence, and read the characters back out.

use rebind::prelude::*;
use rebind::value::{Char, Value};

/// A list of `Char` types which can be written out as a string.
trait Spell {
    fn spell(out: &mut String);
}

impl Spell for () {
    fn spell(_: &mut String) {}
}

impl<const C: char, Ts: Spell> Spell for (Char<C>, Ts) {
    fn spell(out: &mut String) {
        out.push(<Char<C> as Value>::VALUE);
        Ts::spell(out);
    }
}

/// The string spelled by the arguments of a container of `Char`s.
fn to_string<C>() -> String
where
    C: Container,
    C::Args: Spell,
{
    let mut out = String::new();
    <C::Args as Spell>::spell(&mut out);
    out
}

type Hello = chars!("Hello, world!");

fn main() {
    println!("{}", to_string::<Reverse<Hello>>());
}
