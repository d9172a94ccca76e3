use {std::fmt, thiserror::Error};

use crate::{Mode, Spanned};

/// A reason a type cannot be registered with `#[derive(Container)]` or `#[derive(Tagged)]`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    #[error("lifetime parameter `{0}` cannot be part of a container's argument list; only type parameters can")]
    LifetimeParameter(String),
    #[error("const parameter `{0}` cannot be part of a container's argument list; only type parameters can")]
    ConstParameter(String),
    #[error("a `{mode}` container must have exactly one type parameter, but this one has {found}")]
    VariadicArity { mode: Mode, found: usize },
    #[error("a container cannot be both `list` and `tuple`")]
    ConflictingModes,
    #[error("`{0}` is given more than once")]
    DuplicateArgument(&'static str),
    #[error("`{0}` has generic parameters, so it is tagged by `#[derive(Container)]` instead")]
    GenericLeaf(String),
}

impl DeriveError {
    /// Attach a span to this error.
    pub fn at(self, span: proc_macro2::Span) -> Spanned<DeriveError> {
        Spanned::new(self, span)
    }
}

impl From<Spanned<DeriveError>> for syn::Error {
    fn from(err: Spanned<DeriveError>) -> Self {
        syn::Error::new(err.span, err.inner)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::Params => write!(f, "params"),
            Mode::List => write!(f, "list"),
            Mode::Tuple => write!(f, "tuple"),
        }
    }
}
