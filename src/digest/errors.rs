use std::fmt::{self, Display, Formatter};

use static_assertions::assert_impl_all;

use crate::error::Error;

/// ErrorKind categorizes possible errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    AlgorithmNotFound,
    UnsupportedAlgorithm,
    UndefinedAlgorithm,

    UninitializedState,

    DigestInitError,
    DigestUpdateError,
    DigestFinalError,
    FinalOverflow,
}

impl ErrorKind {
    fn as_str(&self) -> &'static str {
        use ErrorKind::*;
        match *self {
            AlgorithmNotFound => "digest algorithm not found",
            UnsupportedAlgorithm => "unsupported digest algorithm",
            UndefinedAlgorithm => "undefined digest algorithm",

            UninitializedState => "digest context uninitialized",

            DigestInitError => "digest init failed",
            DigestUpdateError => "digest update failed",
            DigestFinalError => "digest final failed",
            FinalOverflow => "digest output buffer too small",
        }
    }

    /// Returns true for misuse of the digest state machine. These are the checks relaxed by
    /// [crate::StateCheck::Relaxed].
    pub fn is_state_violation(&self) -> bool {
        matches!(self, ErrorKind::UndefinedAlgorithm | ErrorKind::UninitializedState)
    }

    /// Returns true for failures reported by digest backends.
    pub fn is_backend_failure(&self) -> bool {
        matches!(self, ErrorKind::DigestInitError | ErrorKind::DigestUpdateError | ErrorKind::DigestFinalError)
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for ErrorKind {}

assert_impl_all!(ErrorKind: Display, std::error::Error, Send, Sync);

pub type DigestError = Error<ErrorKind>;
pub type Result<T> = std::result::Result<T, DigestError>;

assert_impl_all!(DigestError: std::error::Error, Send, Sync, Clone);
