//! The code generators behind the Rebind crate's procedural macros.
//!
//! Everything here works on [`proc_macro2`] token streams, so that it can be exercised from
//! ordinary tests; the `rebind-macro` crate only wraps it.

use {
    lazy_static::lazy_static,
    proc_macro2::{Ident, Span},
    proc_macro_crate::FoundCrate,
    std::fmt,
};

pub mod chars;
pub mod container;
pub mod error;
pub mod tags;
pub mod tuples;

pub use chars::Chars;
pub use container::{ContainerDef, Mode};
pub use error::DeriveError;
pub use tags::{Leaves, LeafDef};

/// A value paired with the span of the source it came from.
#[derive(Debug, Clone, Copy)]
pub struct Spanned<T> {
    /// The inner value.
    pub inner: T,
    /// The span of the source it was parsed from.
    pub span: Span,
}

impl<T> Spanned<T> {
    /// Pair a value with a span.
    pub fn new(inner: T, span: Span) -> Self {
        Spanned { inner, span }
    }
}

impl<T: fmt::Display> fmt::Display for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.inner.fmt(f)
    }
}

/// The identifier by which the crate invoking a macro refers to `rebind`.
///
/// Inside `rebind` itself this is still `rebind`: the crate's doctests and integration tests see
/// it under that name.
pub fn rebind_crate(span: Span) -> Ident {
    lazy_static! {
        static ref CRATE_NAME: String = match proc_macro_crate::crate_name("rebind") {
            Ok(FoundCrate::Name(name)) => name,
            Ok(FoundCrate::Itself) | Err(_) => "rebind".to_owned(),
        };
    }

    Ident::new(&**CRATE_NAME, span)
}
