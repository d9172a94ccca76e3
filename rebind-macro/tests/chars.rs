use rebind::{chars, prelude::*, value::Char};
use static_assertions::assert_type_eq_all;

assert_type_eq_all!(chars!(""), Arguments<()>);
assert_type_eq_all!(
    chars!("abc"),
    Arguments<(Char<'a'>, (Char<'b'>, (Char<'c'>, ())))>
);
assert_type_eq_all!(Reverse<chars!("abc")>, chars!("cba"));
assert_type_eq_all!(Nth<1, chars!("xyz")>, Char<'y'>);
assert_type_eq_all!(Join<chars!("ab"), chars!("cd")>, chars!("abcd"));

#[test]
fn length_counts_chars_not_bytes() {
    assert_eq!(Size::<chars!("naïve")>::VALUE, 5);
}
