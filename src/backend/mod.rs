//! Seam between digest contexts and the libraries that implement hash functions.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

mod rust_crypto;

pub use self::rust_crypto::{MdInfo, RustCrypto, RustCryptoContext};

/// Digest constants known to backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MdType {
    Md4,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

/// Failure reported by backend with the failing operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendError {
    operation: &'static str,
    reason: Cow<'static, str>,
}

impl BackendError {
    pub fn new<S: Into<Cow<'static, str>>>(operation: &'static str, reason: S) -> BackendError {
        BackendError { operation, reason: reason.into() }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl Display for BackendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), fmt::Error> {
        write!(f, "{}: {}", self.operation, self.reason)
    }
}

impl std::error::Error for BackendError {}

/// Backend provides digest metadata and running hash states.
///
/// Metadata returned from lookups is process wide static data and is never freed. Contexts are
/// owned by their digesters and released by dropping them.
pub trait Backend: 'static {
    /// Static metadata describing one digest algorithm.
    type Info: Sync + 'static;

    /// Running hash state.
    type Context;

    /// Largest digest size among supported algorithms.
    const MAX_DIGEST_SIZE: usize;

    /// Returns metadata for compiled in digest or `None` if not supported.
    fn info_from_type(md_type: MdType) -> Option<&'static Self::Info>;

    /// Looks up digest by backend defined name.
    fn info_from_string(name: &str) -> Option<&'static Self::Info>;

    fn md_type(info: &Self::Info) -> MdType;

    /// Returns digest output size in bytes.
    fn size(info: &Self::Info) -> usize;

    /// Allocates context for given digest.
    fn init_ctx(info: &'static Self::Info) -> Result<Self::Context, BackendError>;

    /// Starts accumulation as if zero bytes were hashed.
    fn starts(ctx: &mut Self::Context) -> Result<(), BackendError>;

    fn update(ctx: &mut Self::Context, input: &[u8]) -> Result<(), BackendError>;

    /// Writes digest into `output` whose length is exactly digest size.
    fn finish(ctx: &mut Self::Context, output: &mut [u8]) -> Result<(), BackendError>;
}
