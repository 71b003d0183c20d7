//! Error taxonomy shared by every container.
//!
//! All failures are synchronous and reported at the call site. A call that
//! returns `Err` has not mutated the container.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation needs at least one element but the container is empty.
    #[error("`{op}` cannot be called when the structure is empty")]
    Underflow { op: &'static str },

    /// An index fell outside the window the operation accepts.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A key lookup found no matching entry and no default was supplied.
    #[error("key not found")]
    OutOfBounds,

    /// A malformed parameter, such as an invalid capacity policy.
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        reason: &'static str,
    },

    /// A mutating operation was called on a read-only sequence.
    #[error("cannot modify immutable sequence using `{op}`")]
    ImmutableViolation { op: &'static str },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    pub(crate) fn underflow(op: &'static str) -> Self {
        Error::Underflow { op }
    }

    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Error::OutOfRange { index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: messages name the offending operation or index.
    #[test]
    fn display_messages() {
        assert_eq!(
            Error::underflow("pop").to_string(),
            "`pop` cannot be called when the structure is empty"
        );
        assert_eq!(
            Error::out_of_range(5, 3).to_string(),
            "index 5 is out of range for length 3"
        );
        let e = Error::ImmutableViolation { op: "push" };
        assert!(e.to_string().contains("push"));
    }
}
