use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

/// Element types the enumerated sequences are built from.
const ELEMENTS: &[&str] = &["u8", "Option<u8>", "()"];

/// Types searched for with `Contains`: every element type, plus some which never occur, among
/// them types sharing a template or arguments with an element.
const NEEDLES: &[&str] = &["u8", "Option<u8>", "()", "char", "Option<char>", "(u8,)"];

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate unit tests for every sequence within certain size bounds, checking the
    // algebraic laws the operations should obey. This makes it much less likely that an error in
    // a trait definition will be un-caught.

    // Open a file to write to it in the output directory for the build
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("sequence_properties.rs");
    let mut f = File::create(&dest_path)?;

    let long: Vec<Sequence> = Sequence::enumerate(ELEMENTS.len(), 4).collect();
    let short: Vec<Sequence> = Sequence::enumerate(ELEMENTS.len(), 2).collect();

    // File header
    writeln!(f, "#[allow(unused_imports)] use crate::prelude::*;")?;
    writeln!(f, "use static_assertions::assert_type_eq_all;")?;
    writeln!(f)?;

    writeln!(f, "#[test]")?;
    writeln!(f, "fn reverse_is_an_involution() {{")?;
    for s in &long {
        writeln!(f, "    assert_type_eq_all!(Reverse<Reverse<{}>>, {});", s, s)?;
        writeln!(f, "    assert_type_eq_all!(Reverse<{}>, {});", s, s.reversed())?;
    }
    writeln!(f, "}}")?;
    writeln!(f)?;

    writeln!(f, "#[test]")?;
    writeln!(f, "fn drop_last_is_reversed_drop_first() {{")?;
    for s in long.iter().filter(|s| !s.is_empty()) {
        writeln!(
            f,
            "    assert_type_eq_all!(DropLast<{}>, Reverse<DropFirst<Reverse<{}>>>);",
            s, s
        )?;
        writeln!(f, "    assert_type_eq_all!(DropFirst<{}>, {});", s, s.skip(1))?;
    }
    writeln!(f, "}}")?;
    writeln!(f)?;

    writeln!(f, "#[test]")?;
    writeln!(f, "fn nth_agrees_with_first_and_last() {{")?;
    for s in long.iter().filter(|s| !s.is_empty()) {
        let last = s.len() - 1;
        writeln!(f, "    assert_type_eq_all!(Nth<0, {}>, First<{}>);", s, s)?;
        writeln!(f, "    assert_type_eq_all!(Nth<{}, {}>, Last<{}>);", last, s, s)?;
        for (i, element) in s.elements().enumerate() {
            writeln!(f, "    assert_type_eq_all!(Nth<{}, {}>, {});", i, s, element)?;
        }
    }
    writeln!(f, "}}")?;
    writeln!(f)?;

    writeln!(f, "#[test]")?;
    writeln!(f, "fn size_is_additive_over_join() {{")?;
    for a in &short {
        writeln!(f, "    assert_eq!(Size::<{}>::VALUE, {});", a, a.len())?;
        for b in &short {
            writeln!(
                f,
                "    assert_eq!(Size::<Join<{}, {}>>::VALUE, {});",
                a,
                b,
                a.len() + b.len()
            )?;
            writeln!(
                f,
                "    assert_type_eq_all!(Join<{}, {}>, {});",
                a,
                b,
                a.joined(b)
            )?;
        }
    }
    writeln!(f, "}}")?;
    writeln!(f)?;

    writeln!(f, "#[test]")?;
    writeln!(f, "fn repeat_composes() {{")?;
    for s in &long {
        writeln!(f, "    assert_type_eq_all!(Repeat<0, {}, func::Reverse>, {});", s, s)?;
        for n in 0..=s.len() {
            writeln!(
                f,
                "    assert_type_eq_all!(Repeat<{}, {}, func::DropFirst>, {});",
                n,
                s,
                s.skip(n)
            )?;
            for m in 0..=(s.len() - n) {
                writeln!(
                    f,
                    "    assert_type_eq_all!(Repeat<{}, {}, func::DropFirst>, Repeat<{}, Repeat<{}, {}, func::DropFirst>, func::DropFirst>);",
                    n + m,
                    s,
                    n,
                    m,
                    s
                )?;
            }
        }
    }
    writeln!(f, "}}")?;
    writeln!(f)?;

    writeln!(f, "#[test]")?;
    writeln!(f, "fn contains_finds_exactly_the_elements() {{")?;
    for s in &long {
        for needle in NEEDLES {
            let expected = s.elements().any(|e| e == *needle);
            writeln!(
                f,
                "    assert_eq!(Contains::<{}, {}>::VALUE, {});",
                s, needle, expected
            )?;
        }
    }
    writeln!(f, "}}")?;
    Ok(())
}

/// A tuple of element types, identified by their indices into [`ELEMENTS`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence(Vec<usize>);

impl Sequence {
    /// Every sequence of length at most `max_len` over the first `width` elements, shortest
    /// first.
    pub fn enumerate(width: usize, max_len: usize) -> SequenceIter {
        SequenceIter {
            width,
            max_len,
            sequence: Some(Sequence(Vec::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn elements(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|&i| ELEMENTS[i])
    }

    pub fn reversed(&self) -> Sequence {
        Sequence(self.0.iter().rev().copied().collect())
    }

    pub fn skip(&self, n: usize) -> Sequence {
        Sequence(self.0[n..].to_vec())
    }

    pub fn joined(&self, other: &Sequence) -> Sequence {
        Sequence(self.0.iter().chain(other.0.iter()).copied().collect())
    }

    /// Step this sequence to the next one of the same length, like an odometer, or return
    /// `false` if it was the last one.
    fn step(&mut self, width: usize) -> bool {
        for digit in self.0.iter_mut().rev() {
            if *digit + 1 < width {
                *digit += 1;
                return true;
            } else {
                *digit = 0;
            }
        }
        false
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let count = self.len();
        write!(f, "(")?;
        for (i, e) in self.elements().enumerate() {
            write!(f, "{}", e)?;
            if i + 1 < count {
                write!(f, ", ")?;
            }
        }
        if count == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

#[derive(Clone, Debug)]
pub struct SequenceIter {
    width: usize,
    max_len: usize,
    sequence: Option<Sequence>,
}

impl Iterator for SequenceIter {
    type Item = Sequence;

    fn next(&mut self) -> Option<Sequence> {
        match self.sequence {
            None => None,
            Some(ref mut sequence) => {
                let result = sequence.clone();
                if !sequence.step(self.width) {
                    if sequence.len() < self.max_len {
                        *sequence = Sequence(vec![0; sequence.len() + 1]);
                    } else {
                        self.sequence = None;
                    }
                }
                Some(result)
            }
        }
    }
}
