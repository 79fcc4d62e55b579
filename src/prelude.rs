//! Export types with less chance to conflict with other crates in case of no renaming.
pub use crate::{
    CryptoAlg,
    DigestAlgorithm,
    DigestContext,
    DigestError,
    ErrorKind as DigestErrorKind,
    StateCheck,
    MAX_DIGEST_SIZE,
};
