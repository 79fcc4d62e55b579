//! Streaming message digests over pluggable crypto backends.
//!
//! [Algorithm] resolves a digest from portable [CryptoAlg] or backend name. [Digester] computes
//! digest incrementally through `init`, `update` and `finish`.

mod algs;
pub mod backend;
mod digest;
mod error;
pub mod prelude;

pub use self::algs::CryptoAlg;
use self::backend::{Backend, RustCrypto};
pub use self::digest::{digest, Algorithm, DigestError, Digester, ErrorKind, Result, StateCheck};
pub use self::error::Error;

/// Digest algorithm of default backend.
pub type DigestAlgorithm = Algorithm<RustCrypto>;

/// Digest context of default backend.
pub type DigestContext = Digester<RustCrypto>;

/// Maximum digest size of default backend, suitable to size output buffers.
pub const MAX_DIGEST_SIZE: usize = <RustCrypto as Backend>::MAX_DIGEST_SIZE;
